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

//! Include argument normalization and glob pattern screening.

use std::path::{Component, Path, PathBuf};

use crate::error::{ConfError, ConfResult};

/// Lexically normalize a path: drop `.` components and repeated
/// separators, and fold `..` into the preceding component.
///
/// No filesystem access is performed. `..` directly under the root of an
/// absolute path is dropped; leading `..` of a relative path is kept.
/// An empty result is `.`.
pub fn clean_path(path: &str) -> PathBuf {
    let mut out: Vec<Component<'_>> = Vec::new();

    for comp in Path::new(path).components() {
        match comp {
            Component::CurDir => {}
            Component::ParentDir => match out.last() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => out.push(comp),
            },
            other => out.push(other),
        }
    }

    if out.is_empty() {
        return PathBuf::from(".");
    }
    out.iter().collect()
}

/// The path with any root or prefix removed, for joining under a search root.
pub fn strip_root(path: &Path) -> PathBuf {
    path.components()
        .filter(|c| !matches!(c, Component::RootDir | Component::Prefix(_)))
        .collect()
}

/// Whether `pattern` contains glob metacharacters.
pub fn has_wildcards(pattern: &str) -> bool {
    pattern.contains(['*', '?', '['])
}

/// Reject patterns whose expansion could blow up combinatorially.
///
/// Allowed: at most one `*`, at most one `?`, and a `[...]` character
/// class only when no other wildcard is present.
pub fn check_pattern(pattern: &str) -> ConfResult<()> {
    let stars = pattern.matches('*').count();
    let questions = pattern.matches('?').count();
    let has_class = pattern.contains('[') && pattern.contains(']');

    if stars > 1 {
        return Err(ConfError::pattern(format!(
            "include pattern \"{}\" has more than one '*' wildcard",
            pattern
        )));
    }
    if questions > 1 {
        return Err(ConfError::pattern(format!(
            "include pattern \"{}\" has more than one '?' wildcard",
            pattern
        )));
    }
    if has_class && (stars > 0 || questions > 0) {
        return Err(ConfError::pattern(format!(
            "include pattern \"{}\" combines a character class with other wildcards",
            pattern
        )));
    }
    Ok(())
}
