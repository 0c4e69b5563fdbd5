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

//! Tracking of the active inclusion chain.
//!
//! Every token spliced into the parser's stream remembers the chain of
//! files through which it was included. Including a file that is already
//! on the chain would recurse forever, so it is rejected as a cycle.

use std::fs;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use crate::error::{ConfError, ConfResult};
use crate::lex::Token;

/// Files from the top-level source down to the file a token came from.
///
/// Chains are shared between all tokens of one included file, so cloning
/// is cheap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncludeChain {
    files: Rc<Vec<PathBuf>>,
}

impl IncludeChain {
    /// Chain for the top-level source.
    pub fn root(source: impl AsRef<Path>) -> Self {
        Self {
            files: Rc::new(vec![identity(source.as_ref())]),
        }
    }

    /// Number of include hops from the top-level source (0 at the top).
    pub fn depth(&self) -> usize {
        self.files.len().saturating_sub(1)
    }

    /// The chain extended by `path`.
    ///
    /// Fails with a cycle error if `path` is already on the chain, and with
    /// a security error if the chain would grow beyond `max_depth` hops.
    pub fn enter(&self, path: &Path, max_depth: usize) -> ConfResult<Self> {
        let key = identity(path);
        if self.files.contains(&key) {
            return Err(ConfError::cycle(format!(
                "{} is already being included: {} -> {}",
                path.display(),
                self.describe(),
                key.display()
            )));
        }
        if self.depth() >= max_depth {
            return Err(ConfError::security(format!(
                "include depth exceeds maximum {} while including {}",
                max_depth,
                path.display()
            )));
        }

        let mut files = Vec::with_capacity(self.files.len() + 1);
        files.extend(self.files.iter().cloned());
        files.push(key);
        Ok(Self {
            files: Rc::new(files),
        })
    }

    /// The chain rendered as `a -> b -> c`.
    pub fn describe(&self) -> String {
        self.files
            .iter()
            .map(|p| p.display().to_string())
            .collect::<Vec<_>>()
            .join(" -> ")
    }
}

/// A token in the parser's stream, with the chain that brought it there.
#[derive(Debug, Clone)]
pub struct ChainedToken {
    /// The lexed token.
    pub token: Token,
    /// Files through which the token was included, ending with its own.
    pub chain: IncludeChain,
}

impl ChainedToken {
    /// Pair a token with its include chain.
    pub fn new(token: Token, chain: IncludeChain) -> Self {
        Self { token, chain }
    }
}

// Canonical form when the file exists, so `a.conf` and `./x/../a.conf`
// compare equal; the path as given otherwise.
fn identity(path: &Path) -> PathBuf {
    fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
}
