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

//! `include` directive support.
//!
//! An `include <pattern>;` statement is replaced in the token stream by the
//! tokens of every file the pattern matches. This module turns a pattern into
//! files ([`IncludeResolver::resolve`]), files into tagged tokens
//! ([`IncludeResolver::load`]) and keeps track of which files are currently
//! being included so that cycles are reported instead of looping
//! ([`IncludeChain`]).
//!
//! # Example
//!
//! ```no_run
//! use nginxconf::include::{IncludeChain, IncludeResolver, ResolverConfig};
//! use nginxconf::Limits;
//!
//! let config = ResolverConfig::new("/etc/nginx");
//! let limits = Limits::default();
//! let resolver = IncludeResolver::new(&config, &limits);
//!
//! let chain = IncludeChain::root("/etc/nginx/nginx.conf");
//! let tokens = resolver.import("conf.d/*.conf", &chain).unwrap();
//! println!("{} tokens included", tokens.len());
//! ```

mod chain;
mod config;
mod pattern;
mod resolver;

pub use chain::{ChainedToken, IncludeChain};
pub use config::{ResolverConfig, DEFAULT_ROOT, DEFAULT_SUBDIRS, SOLARIS_ROOT, STANDARD_FILES};
pub use pattern::{check_pattern, clean_path, has_wildcards, strip_root};
pub use resolver::IncludeResolver;
