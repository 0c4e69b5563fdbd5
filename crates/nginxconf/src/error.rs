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

//! Error types for configuration parsing.

use std::fmt;
use thiserror::Error;

/// The kind of error that occurred while lexing, including or parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfErrorKind {
    /// The input could not be read (I/O failure, not end of input).
    Lex,
    /// An include argument is a glob pattern that is rejected.
    Pattern,
    /// An included file could not be opened or read, or is a directory.
    Import,
    /// The parser could not make structural progress.
    Parse,
    /// A file includes itself, directly or transitively.
    Cycle,
    /// A resource limit was exceeded.
    Security,
}

impl fmt::Display for ConfErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lex => write!(f, "LexError"),
            Self::Pattern => write!(f, "PatternError"),
            Self::Import => write!(f, "ImportError"),
            Self::Parse => write!(f, "ParseError"),
            Self::Cycle => write!(f, "CycleError"),
            Self::Security => write!(f, "SecurityError"),
        }
    }
}

/// Where an error was raised: a source file and a 1-based line.
///
/// A line of 0 means the line is unknown; an empty file name means the
/// location is unknown altogether.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Location {
    /// Source file name, as stamped on the tokens.
    pub file: String,
    /// Line number (1-based, 0 when unknown).
    pub line: usize,
}

impl Location {
    /// Create a new location.
    pub fn new(file: impl Into<String>, line: usize) -> Self {
        Self {
            file: file.into(),
            line,
        }
    }

    /// Whether any part of the location is known.
    pub fn is_known(&self) -> bool {
        !self.file.is_empty() || self.line > 0
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.file.is_empty(), self.line) {
            (true, 0) => write!(f, "<unknown>"),
            (true, line) => write!(f, "line {}", line),
            (false, 0) => write!(f, "{}", self.file),
            (false, line) => write!(f, "{}:{}", self.file, line),
        }
    }
}

/// An error that aborted a parse.
///
/// No partial directive tree is ever returned alongside an error.
#[derive(Debug, Clone, Error)]
#[error("{kind} at {location}: {message}")]
pub struct ConfError {
    /// The kind of error.
    pub kind: ConfErrorKind,
    /// Human-readable error message.
    pub message: String,
    /// File and line of the directive or file that triggered the error.
    pub location: Location,
    /// Additional context (e.g., "while including /etc/nginx/conf.d/*.conf").
    pub context: Option<String>,
}

impl ConfError {
    /// Create a new error with an unknown location.
    pub fn new(kind: ConfErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            location: Location::default(),
            context: None,
        }
    }

    /// Set the location.
    pub fn at(mut self, file: impl Into<String>, line: usize) -> Self {
        self.location = Location::new(file, line);
        self
    }

    /// Set the location unless one is already known.
    ///
    /// Errors raised deep inside an included file keep their own location.
    pub fn or_at(self, file: impl Into<String>, line: usize) -> Self {
        if self.location.is_known() {
            self
        } else {
            self.at(file, line)
        }
    }

    /// Add context information.
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    // Convenience constructors for each error kind
    pub fn lex(message: impl Into<String>) -> Self {
        Self::new(ConfErrorKind::Lex, message)
    }

    pub fn pattern(message: impl Into<String>) -> Self {
        Self::new(ConfErrorKind::Pattern, message)
    }

    pub fn import(message: impl Into<String>) -> Self {
        Self::new(ConfErrorKind::Import, message)
    }

    pub fn parse(message: impl Into<String>) -> Self {
        Self::new(ConfErrorKind::Parse, message)
    }

    pub fn cycle(message: impl Into<String>) -> Self {
        Self::new(ConfErrorKind::Cycle, message)
    }

    pub fn security(message: impl Into<String>) -> Self {
        Self::new(ConfErrorKind::Security, message)
    }
}

/// Result type for configuration parsing.
pub type ConfResult<T> = Result<T, ConfError>;
