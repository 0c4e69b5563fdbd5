// nginxconf - nginx-style configuration front end
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Lexical analysis for nginx-style configuration text.
//!
//! # Module Structure
//!
//! - [`token`] - The location-tagged [`Token`] type
//! - [`lexer`] - The character state machine and `tokenize*` entry points
//!
//! # Examples
//!
//! ```
//! use nginxconf::lex::{tokenize_named, Token};
//!
//! let tokens = tokenize_named("site.conf", b"listen 80; # http\n");
//! assert_eq!(tokens[0], Token::new("site.conf", 1, "listen"));
//! assert_eq!(tokens.len(), 3);
//! ```

pub mod lexer;
pub mod token;

pub use lexer::{tokenize, tokenize_named, tokenize_reader, Lexer, DEFAULT_SOURCE_NAME};
pub use token::Token;
