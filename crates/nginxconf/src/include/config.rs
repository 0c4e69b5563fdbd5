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

//! Search roots for relative `include` arguments.
//!
//! The defaults differ per operating system. They are captured in a plain
//! [`ResolverConfig`] value that is built once and handed to the parser,
//! so callers can override the root or the search lists freely.

use std::path::{Path, PathBuf};

use tracing::debug;

/// Default configuration root on Linux, the BSDs and macOS.
pub const DEFAULT_ROOT: &str = "/etc/nginx";

/// Default configuration root on Solaris and illumos.
pub const SOLARIS_ROOT: &str = "/opt/local/nginx";

/// Subdirectories of the root searched for relative includes, in order.
pub const DEFAULT_SUBDIRS: &[&str] = &["sites-enabled", "modules-enabled", "conf.d", "snippets"];

/// Top-level files shipped with nginx that are included by bare name.
pub const STANDARD_FILES: &[&str] = &[
    "mime.types",
    "fastcgi.conf",
    "fastcgi_params",
    "proxy_params",
    "scgi_params",
    "uwsgi_params",
    "koi-utf",
    "koi-win",
    "win-utf",
];

/// Where the include resolver looks for relative paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolverConfig {
    /// Configuration root directory.
    pub root: PathBuf,
    /// Subdirectories of `root` searched in order.
    pub subdirs: Vec<String>,
    /// File names resolved directly against `root`.
    pub standard_files: Vec<String>,
}

impl ResolverConfig {
    /// Create a config rooted at `root` with the default search lists.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            subdirs: DEFAULT_SUBDIRS.iter().map(|s| s.to_string()).collect(),
            standard_files: STANDARD_FILES.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Defaults for the platform this crate was compiled for.
    ///
    /// - Solaris/illumos: `/opt/local/nginx`, with `conf` in place of `conf.d`.
    /// - Windows: the directory holding `nginx.exe` on `PATH` (or the current
    ///   directory), with `conf` in place of `conf.d`.
    /// - Everything else: `/etc/nginx`.
    pub fn platform_default() -> Self {
        if cfg!(any(target_os = "solaris", target_os = "illumos")) {
            Self::new(SOLARIS_ROOT).with_conf_dir()
        } else if cfg!(windows) {
            Self::beside_executable("nginx.exe")
                .unwrap_or_else(|| Self::new(".").with_conf_dir())
        } else {
            Self::new(DEFAULT_ROOT)
        }
    }

    /// Config rooted at the directory containing executable `name`, found on `PATH`.
    ///
    /// nginx on Windows keeps its `conf/` directory next to the binary.
    /// Returns `None` if the executable cannot be found.
    pub fn beside_executable(name: &str) -> Option<Self> {
        let exe = match which::which(name) {
            Ok(exe) => exe,
            Err(e) => {
                debug!(name, error = %e, "executable not found on PATH");
                return None;
            }
        };
        let dir = exe.parent()?;
        Some(Self::new(dir).with_conf_dir())
    }

    /// Replace the root directory.
    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = root.into();
        self
    }

    /// Replace the searched subdirectories.
    pub fn with_subdirs<I, S>(mut self, subdirs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.subdirs = subdirs.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the standard file names.
    pub fn with_standard_files<I, S>(mut self, files: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.standard_files = files.into_iter().map(Into::into).collect();
        self
    }

    /// Whether `name` is one of the standard top-level files.
    pub fn is_standard_file(&self, name: &str) -> bool {
        self.standard_files.iter().any(|f| f == name)
    }

    /// The root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn with_conf_dir(mut self) -> Self {
        for dir in &mut self.subdirs {
            if dir == "conf.d" {
                *dir = "conf".to_string();
            }
        }
        self
    }
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self::platform_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_uses_default_lists() {
        let config = ResolverConfig::new("/srv/nginx");
        assert_eq!(config.root(), Path::new("/srv/nginx"));
        assert_eq!(config.subdirs, DEFAULT_SUBDIRS);
        assert_eq!(config.standard_files.len(), STANDARD_FILES.len());
    }

    #[test]
    fn test_subdir_order() {
        let config = ResolverConfig::new("/etc/nginx");
        assert_eq!(config.subdirs[0], "sites-enabled");
        assert_eq!(config.subdirs[2], "conf.d");
    }

    #[test]
    fn test_conf_dir_replaces_conf_d() {
        let config = ResolverConfig::new(SOLARIS_ROOT).with_conf_dir();
        assert!(config.subdirs.iter().any(|d| d == "conf"));
        assert!(!config.subdirs.iter().any(|d| d == "conf.d"));
        assert_eq!(config.subdirs.len(), DEFAULT_SUBDIRS.len());
    }

    #[cfg(all(unix, not(any(target_os = "solaris", target_os = "illumos"))))]
    #[test]
    fn test_platform_default_unix() {
        let config = ResolverConfig::platform_default();
        assert_eq!(config.root(), Path::new(DEFAULT_ROOT));
        assert_eq!(config, ResolverConfig::default());
    }

    #[test]
    fn test_overrides() {
        let config = ResolverConfig::new("/a")
            .with_root("/b")
            .with_subdirs(["x", "y"])
            .with_standard_files(vec!["mime.types".to_string()]);
        assert_eq!(config.root(), Path::new("/b"));
        assert_eq!(config.subdirs, ["x", "y"]);
        assert!(config.is_standard_file("mime.types"));
        assert!(!config.is_standard_file("fastcgi_params"));
    }

    #[test]
    fn test_standard_file_exact_match() {
        let config = ResolverConfig::new("/etc/nginx");
        assert!(config.is_standard_file("mime.types"));
        assert!(!config.is_standard_file("mime.types.bak"));
        assert!(!config.is_standard_file("conf.d/mime.types"));
    }

    #[test]
    fn test_beside_missing_executable() {
        assert!(ResolverConfig::beside_executable("nginxconf-no-such-binary-4f1c").is_none());
    }
}
