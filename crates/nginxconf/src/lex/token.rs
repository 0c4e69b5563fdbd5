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

//! Location-tagged lexical tokens.

/// A minimal lexical unit: a word, a quoted string, or a lone `;`.
///
/// `file` and `line` point at the first character of the token (the
/// opening quote for quoted tokens). Tokens spliced in from an included
/// file carry that file's path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Token {
    /// Source file the token was lexed from.
    pub file: String,
    /// Line number (1-based).
    pub line: usize,
    /// Token text, with quotes and quote escapes removed.
    pub text: String,
}

impl Token {
    /// Create a new token.
    pub fn new(file: impl Into<String>, line: usize, text: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            line,
            text: text.into(),
        }
    }

    /// Whether this token terminates a simple statement.
    #[inline]
    pub fn is_semicolon(&self) -> bool {
        self.text == ";"
    }

    /// Whether this token opens a block.
    #[inline]
    pub fn is_block_open(&self) -> bool {
        self.text == "{"
    }

    /// Whether this token closes a block.
    #[inline]
    pub fn is_block_close(&self) -> bool {
        self.text == "}"
    }
}
