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

//! Resolution of `include` arguments to files and tokens.
//!
//! Resolution order for an argument:
//!
//! 1. Normalize the path and screen it with [`check_pattern`].
//! 2. An absolute argument is glob-expanded as is.
//! 3. If nothing matched, a bare standard file name (e.g. `mime.types`)
//!    resolves to `root/<name>`; anything else is glob-expanded under the
//!    root itself and then under each `root/<subdir>/`, accumulating
//!    matches in that order.
//!
//! Every matched file is read, lexed and tagged with its own path.

use std::fs::{self, File};
use std::path::{Path, PathBuf};

use tracing::{debug, trace};

use crate::error::{ConfError, ConfErrorKind, ConfResult};
use crate::include::chain::{ChainedToken, IncludeChain};
use crate::include::config::ResolverConfig;
use crate::include::pattern::{check_pattern, clean_path, has_wildcards, strip_root};
use crate::lex::{tokenize_reader, Token};
use crate::limits::Limits;

/// Resolves `include` arguments against a [`ResolverConfig`].
#[derive(Debug, Clone, Copy)]
pub struct IncludeResolver<'a> {
    config: &'a ResolverConfig,
    limits: &'a Limits,
}

impl<'a> IncludeResolver<'a> {
    /// Create a resolver searching `config` and reading within `limits`.
    pub fn new(config: &'a ResolverConfig, limits: &'a Limits) -> Self {
        Self { config, limits }
    }

    /// Find the files an include argument refers to, in include order.
    ///
    /// A wildcard pattern may match nothing; a literal path that matches
    /// nothing is an import error.
    pub fn resolve(&self, argument: &str) -> ConfResult<Vec<PathBuf>> {
        let cleaned = clean_path(argument);
        let pattern = cleaned.to_string_lossy().into_owned();
        check_pattern(&pattern)?;

        let mut matches = Vec::new();
        if cleaned.is_absolute() {
            matches = glob_files(&pattern)?;
        }

        if matches.is_empty() {
            let relative = strip_root(&cleaned);
            let relative = relative.to_string_lossy().into_owned();

            if self.config.is_standard_file(&relative) {
                matches.push(self.config.root.join(&relative));
            } else {
                let root = PathBuf::from(glob::Pattern::escape(&self.config.root.to_string_lossy()));
                matches.extend(glob_files(&root.join(&relative).to_string_lossy())?);
                for subdir in &self.config.subdirs {
                    let candidate = root.join(glob::Pattern::escape(subdir)).join(&relative);
                    matches.extend(glob_files(&candidate.to_string_lossy())?);
                }
            }
        }

        if matches.is_empty() && !has_wildcards(&pattern) {
            return Err(ConfError::import(format!(
                "no file matches include \"{}\" (searched under {})",
                argument,
                self.config.root.display()
            )));
        }

        trace!(argument, matches = matches.len(), "resolved include argument");
        Ok(matches)
    }

    /// Read and lex one file, tagging every token with the file's path.
    pub fn load(&self, path: &Path) -> ConfResult<Vec<Token>> {
        let name = path.display().to_string();

        let metadata = fs::metadata(path)
            .map_err(|e| ConfError::import(format!("cannot open {}: {}", name, e)))?;
        if metadata.is_dir() {
            return Err(ConfError::import(format!("{} is a directory", name)));
        }

        let file =
            File::open(path).map_err(|e| ConfError::import(format!("cannot open {}: {}", name, e)))?;

        tokenize_reader(&name, file, self.limits).map_err(|e| match e.kind {
            ConfErrorKind::Lex => ConfError::import(format!("cannot read {}: {}", name, e.message)),
            _ => e,
        })
    }

    /// Resolve an include argument and lex every matched file.
    ///
    /// `chain` is the inclusion chain of the `include` directive; the
    /// returned tokens carry the chain extended by their own file.
    pub fn import(&self, argument: &str, chain: &IncludeChain) -> ConfResult<Vec<ChainedToken>> {
        let paths = self.resolve(argument)?;
        if paths.len() > self.limits.max_include_files {
            return Err(ConfError::security(format!(
                "include \"{}\" matches {} files, maximum is {}",
                argument,
                paths.len(),
                self.limits.max_include_files
            )));
        }

        let mut imported = Vec::new();
        for path in &paths {
            let file_chain = chain.enter(path, self.limits.max_include_depth)?;
            let tokens = self.load(path)?;
            debug!(
                file = %path.display(),
                tokens = tokens.len(),
                depth = file_chain.depth(),
                "including file"
            );
            imported.extend(
                tokens
                    .into_iter()
                    .map(|token| ChainedToken::new(token, file_chain.clone())),
            );
        }

        Ok(imported)
    }
}

/// Expand a glob pattern, keeping regular files only.
fn glob_files(pattern: &str) -> ConfResult<Vec<PathBuf>> {
    let paths = glob::glob(pattern).map_err(|e| {
        ConfError::pattern(format!("invalid include pattern \"{}\": {}", pattern, e))
    })?;

    let mut files = Vec::new();
    for entry in paths {
        match entry {
            Ok(path) if path.is_file() => files.push(path),
            Ok(_) => {}
            Err(e) => debug!(pattern, error = %e, "skipping unreadable glob entry"),
        }
    }
    Ok(files)
}
