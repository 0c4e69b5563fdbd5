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

//! Resource limits for configuration parsing.

/// Configurable limits for parser robustness.
///
/// Nested blocks and nested includes are parsed recursively, so both depths
/// are bounded here instead of by the call stack.
#[derive(Debug, Clone)]
pub struct Limits {
    /// Maximum size of one input file in bytes (default: 16MB).
    pub max_file_size: usize,
    /// Maximum `{ ... }` nesting depth (default: 64).
    pub max_block_depth: usize,
    /// Maximum length of an include chain (default: 32).
    pub max_include_depth: usize,
    /// Maximum number of files one `include` statement may match (default: 1024).
    pub max_include_files: usize,
    /// Maximum number of tokens in the spliced stream (default: 10M).
    pub max_tokens: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_file_size: 16 * 1024 * 1024, // 16MB
            max_block_depth: 64,
            max_include_depth: 32,
            max_include_files: 1024,
            max_tokens: 10_000_000, // 10M
        }
    }
}

impl Limits {
    /// Create limits with no restrictions (for testing).
    pub fn unlimited() -> Self {
        Self {
            max_file_size: usize::MAX,
            max_block_depth: usize::MAX,
            max_include_depth: usize::MAX,
            max_include_files: usize::MAX,
            max_tokens: usize::MAX,
        }
    }
}
