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

//! Directive tree produced by the parser.

/// One configuration statement.
///
/// `params[0]` is the directive name; the remaining entries are its
/// arguments in source order. `block` is present exactly when the statement
/// was terminated by `{ ... }` rather than `;`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Directive {
    /// Name followed by the parameters.
    pub params: Vec<String>,
    /// Child directives, if the statement opened a block.
    pub block: Option<Vec<Directive>>,
    /// File the directive originates from (the included file for spliced directives).
    pub file: String,
    /// Line of the directive's first token (1-based).
    pub line: usize,
}

impl Directive {
    /// Create a simple (`;`-terminated) directive.
    pub fn new(params: Vec<String>, file: impl Into<String>, line: usize) -> Self {
        Self {
            params,
            block: None,
            file: file.into(),
            line,
        }
    }

    /// Create a block directive.
    pub fn with_block(
        params: Vec<String>,
        block: Vec<Directive>,
        file: impl Into<String>,
        line: usize,
    ) -> Self {
        Self {
            params,
            block: Some(block),
            file: file.into(),
            line,
        }
    }

    /// The directive name, or `""` if there are no parameters.
    pub fn name(&self) -> &str {
        self.param(0).unwrap_or("")
    }

    /// The parameter at position `idx` (0 is the name).
    pub fn param(&self, idx: usize) -> Option<&str> {
        self.params.get(idx).map(String::as_str)
    }

    /// The parameters after the name.
    pub fn args(&self) -> &[String] {
        self.params.get(1..).unwrap_or(&[])
    }

    /// Whether the directive opened a block.
    pub fn is_block(&self) -> bool {
        self.block.is_some()
    }

    /// The child directives (empty for simple directives).
    pub fn block(&self) -> &[Directive] {
        self.block.as_deref().unwrap_or(&[])
    }

    /// First child directive named `name`.
    pub fn child(&self, name: &str) -> Option<&Directive> {
        get_directive(self.block(), name)
    }

    /// All child directives named `name`, in order.
    pub fn children(&self, name: &str) -> Vec<&Directive> {
        get_all_directives(self.block(), name)
    }
}

/// First directive in `dirs` named `name`.
pub fn get_directive<'a>(dirs: &'a [Directive], name: &str) -> Option<&'a Directive> {
    dirs.iter().find(|dir| dir.name() == name)
}

/// All directives in `dirs` named `name`, in order.
pub fn get_all_directives<'a>(dirs: &'a [Directive], name: &str) -> Vec<&'a Directive> {
    dirs.iter().filter(|dir| dir.name() == name).collect()
}
