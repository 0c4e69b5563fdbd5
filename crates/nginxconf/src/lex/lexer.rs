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

//! Character-level state machine that turns configuration text into tokens.
//!
//! The lexer tracks a token buffer, the active quote character, an escape
//! flag, a comment flag and the current line. Within a quoted string a
//! backslash escapes only the active quote character; any other backslash
//! sequence is kept verbatim.
//!
//! # Examples
//!
//! ```
//! use nginxconf::lex::tokenize;
//!
//! let tokens = tokenize(b"root \"/var/www/my site\";");
//! let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
//! assert_eq!(texts, ["root", "/var/www/my site", ";"]);
//! ```

use std::io::Read;
use std::iter::Peekable;
use std::str::Chars;

use tracing::trace;

use crate::error::{ConfError, ConfResult};
use crate::lex::token::Token;
use crate::limits::Limits;

/// Source name stamped on tokens when the caller does not provide one.
pub const DEFAULT_SOURCE_NAME: &str = "nginx.conf";

/// Streaming lexer over one in-memory buffer.
///
/// The comment flag and the line counter persist across tokens; the quote
/// and escape state are local to the token being scanned.
pub struct Lexer<'a> {
    chars: Peekable<Chars<'a>>,
    file: String,
    line: usize,
    comment: bool,
}

impl<'a> Lexer<'a> {
    /// Create a lexer that stamps its tokens with `file`.
    pub fn new(file: impl Into<String>, input: &'a str) -> Self {
        Self {
            chars: input.chars().peekable(),
            file: file.into(),
            line: 1,
            comment: false,
        }
    }

    /// Current line number (1-based).
    pub fn line(&self) -> usize {
        self.line
    }

    /// Scan the next token, or `None` at end of input.
    pub fn next_token(&mut self) -> Option<Token> {
        let mut val = String::new();
        let mut quote: Option<char> = None;
        let mut escaped = false;
        let mut start_line = self.line;

        while let Some(&ch) = self.chars.peek() {
            if let Some(q) = quote {
                self.chars.next();
                if !escaped {
                    if ch == '\\' {
                        escaped = true;
                        continue;
                    }
                    if ch == q {
                        return Some(self.make_token(start_line, val));
                    }
                }
                if ch == '\n' {
                    self.line += 1;
                }
                // Only the quote character itself can be escaped
                if escaped && ch != q {
                    val.push('\\');
                }
                val.push(ch);
                escaped = false;
                continue;
            }

            if ch.is_whitespace() {
                self.chars.next();
                if ch == '\r' {
                    continue;
                }
                if ch == '\n' {
                    self.line += 1;
                    self.comment = false;
                }
                if !val.is_empty() {
                    return Some(self.make_token(start_line, val));
                }
                continue;
            }

            if self.comment {
                self.chars.next();
                continue;
            }

            if ch == ';' {
                if val.is_empty() {
                    self.chars.next();
                    return Some(self.make_token(self.line, ";".to_string()));
                }
                // Leave the semicolon for the next call
                return Some(self.make_token(start_line, val));
            }

            self.chars.next();

            if ch == '#' {
                self.comment = true;
                continue;
            }

            if val.is_empty() {
                start_line = self.line;
                if ch == '"' || ch == '\'' {
                    quote = Some(ch);
                    continue;
                }
            }

            val.push(ch);
        }

        if val.is_empty() {
            None
        } else {
            Some(self.make_token(start_line, val))
        }
    }

    fn make_token(&self, line: usize, text: String) -> Token {
        Token {
            file: self.file.clone(),
            line,
            text,
        }
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        self.next_token()
    }
}

/// Tokenize a buffer using the default source name.
pub fn tokenize(input: &[u8]) -> Vec<Token> {
    tokenize_named(DEFAULT_SOURCE_NAME, input)
}

/// Tokenize a buffer, stamping every token with `file`.
///
/// Invalid UTF-8 sequences are replaced with U+FFFD rather than rejected.
pub fn tokenize_named(file: &str, input: &[u8]) -> Vec<Token> {
    let text = String::from_utf8_lossy(input);
    let tokens: Vec<Token> = Lexer::new(file, &text).collect();
    trace!(file, tokens = tokens.len(), "tokenized input");
    tokens
}

/// Read `reader` to the end and tokenize its contents.
///
/// A read failure is a lex error; input larger than
/// [`Limits::max_file_size`] is a security error.
pub fn tokenize_reader<R: Read>(file: &str, reader: R, limits: &Limits) -> ConfResult<Vec<Token>> {
    let mut buf = Vec::new();
    let cap = (limits.max_file_size as u64).saturating_add(1);
    reader
        .take(cap)
        .read_to_end(&mut buf)
        .map_err(|e| ConfError::lex(format!("failed to read input: {}", e)).at(file, 0))?;

    if buf.len() > limits.max_file_size {
        return Err(ConfError::security(format!(
            "input exceeds maximum file size of {} bytes",
            limits.max_file_size
        ))
        .at(file, 0));
    }

    Ok(tokenize_named(file, &buf))
}
