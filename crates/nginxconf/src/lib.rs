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

//! Lexer, parser and include resolver for nginx-style configuration.
//!
//! This crate turns configuration text into an ordered tree of
//! [`Directive`]s. It does not interpret directives: names, arity and
//! variables are left to the consumer.
//!
//! # Pipeline
//!
//! - [`lex`] splits bytes into location-tagged tokens
//! - the parser builds the directive tree, expanding `include` statements
//!   through the [`include`] resolver as it meets them
//! - [`traverse`] walks a finished tree context by context
//!
//! # Examples
//!
//! ```
//! use nginxconf::{get_directive, parse};
//!
//! let dirs = parse(b"http {\n  server {\n    listen 8080;\n  }\n}\n").unwrap();
//!
//! let http = get_directive(&dirs, "http").unwrap();
//! let server = http.child("server").unwrap();
//! assert_eq!(server.child("listen").unwrap().args(), ["8080"]);
//! assert_eq!(server.line, 2);
//! ```
//!
//! Parsing a file on disk, with includes resolved under its directory:
//!
//! ```no_run
//! use nginxconf::{parse_file, ParseOptions};
//!
//! let opts = ParseOptions::builder().root("/usr/local/etc/nginx").build();
//! let dirs = parse_file("/usr/local/etc/nginx/nginx.conf", &opts)?;
//! println!("{} top-level directives", dirs.len());
//! # Ok::<(), nginxconf::ConfError>(())
//! ```
//!
//! # Features
//!
//! - `serde`: `Serialize`/`Deserialize` for [`Token`] and [`Directive`]
//!   (`cargo test --features serde` runs the serialization tests)

mod directive;
mod error;
pub mod include;
pub mod lex;
mod limits;
mod parser;
pub mod traverse;

pub use directive::{get_all_directives, get_directive, Directive};
pub use error::{ConfError, ConfErrorKind, ConfResult, Location};
pub use include::ResolverConfig;
pub use lex::{tokenize, Token};
pub use limits::Limits;
pub use parser::{parse, parse_file, parse_tokens, parse_with_options, ParseOptions, ParseOptionsBuilder};
pub use traverse::{traverse, DirectiveVisitor, StatsCollector, VisitorContext};
