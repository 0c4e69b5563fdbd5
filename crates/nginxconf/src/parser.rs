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

//! Recursive-descent parser for nginx-style configuration.
//!
//! The parser owns the unconsumed part of the token stream, stored in reverse
//! so the next token is popped from the end. `include <pattern>;` statements
//! are expanded in place: the two tokens `include <pattern>` are replaced by
//! the tokens of every matched file, and parsing resumes at the first spliced
//! token. A splice costs only the number of included tokens. Directives parsed
//! from spliced tokens report the included file as their origin.
//!
//! # Security
//!
//! All resource use is bounded by [`Limits`]:
//!
//! - `max_file_size`: size of each input, top-level or included
//! - `max_block_depth`: `{ ... }` nesting
//! - `max_include_depth` and `max_include_files`: include fan-out
//! - `max_tokens`: size of the spliced token stream
//!
//! An include cycle is reported as a cycle error instead of being expanded
//! until a limit trips.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::directive::Directive;
use crate::error::{ConfError, ConfResult};
use crate::include::{ChainedToken, IncludeChain, IncludeResolver, ResolverConfig};
use crate::lex::{tokenize_named, Token, DEFAULT_SOURCE_NAME};
use crate::limits::Limits;

/// Options for configuring a parse.
///
/// # Examples
///
/// ```
/// use nginxconf::ParseOptions;
///
/// let opts = ParseOptions::builder()
///     .source_name("/etc/nginx/nginx.conf")
///     .root("/etc/nginx")
///     .max_block_depth(16)
///     .build();
///
/// assert_eq!(opts.limits.max_block_depth, 16);
/// ```
#[derive(Debug, Clone)]
pub struct ParseOptions {
    /// Name stamped on tokens of the top-level input.
    pub source_name: String,
    /// Security limits.
    pub limits: Limits,
    /// Where relative `include` arguments are looked up.
    pub resolver: ResolverConfig,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            source_name: DEFAULT_SOURCE_NAME.to_string(),
            limits: Limits::default(),
            resolver: ResolverConfig::platform_default(),
        }
    }
}

impl ParseOptions {
    /// Create a new builder for ParseOptions.
    pub fn builder() -> ParseOptionsBuilder {
        ParseOptionsBuilder::new()
    }
}

/// Builder for ergonomic construction of ParseOptions.
///
/// # Examples
///
/// ```
/// use nginxconf::ParseOptions;
///
/// // Search only conf.d under a custom root
/// let opts = ParseOptions::builder()
///     .root("/srv/nginx")
///     .subdirs(["conf.d"])
///     .max_include_depth(4)
///     .build();
///
/// assert_eq!(opts.resolver.subdirs, vec!["conf.d".to_string()]);
/// ```
#[derive(Debug, Clone)]
pub struct ParseOptionsBuilder {
    options: ParseOptions,
}

impl ParseOptionsBuilder {
    /// Create a new builder with default options.
    pub fn new() -> Self {
        Self {
            options: ParseOptions::default(),
        }
    }

    /// Set the name stamped on tokens of the top-level input.
    pub fn source_name(mut self, name: impl Into<String>) -> Self {
        self.options.source_name = name.into();
        self
    }

    /// Set the root directory for relative includes.
    pub fn root(mut self, root: impl Into<PathBuf>) -> Self {
        self.options.resolver.root = root.into();
        self
    }

    /// Set the subdirectories searched under the root, in order.
    pub fn subdirs<I, S>(mut self, subdirs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options.resolver.subdirs = subdirs.into_iter().map(Into::into).collect();
        self
    }

    /// Set the file names that resolve directly under the root.
    pub fn standard_files<I, S>(mut self, files: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options.resolver.standard_files = files.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the whole resolver configuration.
    pub fn resolver(mut self, resolver: ResolverConfig) -> Self {
        self.options.resolver = resolver;
        self
    }

    /// Replace all limits.
    pub fn limits(mut self, limits: Limits) -> Self {
        self.options.limits = limits;
        self
    }

    /// Set the maximum block nesting depth (default: 64).
    pub fn max_block_depth(mut self, depth: usize) -> Self {
        self.options.limits.max_block_depth = depth;
        self
    }

    /// Set the maximum include chain length (default: 32).
    pub fn max_include_depth(mut self, depth: usize) -> Self {
        self.options.limits.max_include_depth = depth;
        self
    }

    /// Set the maximum number of files one include may match (default: 1024).
    pub fn max_include_files(mut self, count: usize) -> Self {
        self.options.limits.max_include_files = count;
        self
    }

    /// Set the maximum size of each input file in bytes (default: 16MB).
    pub fn max_file_size(mut self, size: usize) -> Self {
        self.options.limits.max_file_size = size;
        self
    }

    /// Set the maximum number of tokens in the spliced stream (default: 10M).
    pub fn max_tokens(mut self, count: usize) -> Self {
        self.options.limits.max_tokens = count;
        self
    }

    /// Build the ParseOptions.
    pub fn build(self) -> ParseOptions {
        self.options
    }
}

impl Default for ParseOptionsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse configuration text with default options.
///
/// Tokens of the input are stamped with [`DEFAULT_SOURCE_NAME`].
///
/// # Examples
///
/// ```
/// let dirs = nginxconf::parse(b"worker_processes 4; events { worker_connections 512; }").unwrap();
///
/// assert_eq!(dirs[0].args(), ["4"]);
/// assert_eq!(dirs[1].block()[0].name(), "worker_connections");
/// ```
pub fn parse(input: &[u8]) -> ConfResult<Vec<Directive>> {
    parse_with_options(input, &ParseOptions::default())
}

/// Parse configuration text with custom options.
pub fn parse_with_options(input: &[u8], options: &ParseOptions) -> ConfResult<Vec<Directive>> {
    if input.len() > options.limits.max_file_size {
        return Err(ConfError::security(format!(
            "input size {} bytes exceeds maximum {} bytes",
            input.len(),
            options.limits.max_file_size
        ))
        .at(options.source_name.as_str(), 0));
    }

    let tokens = tokenize_named(&options.source_name, input);
    let chain = IncludeChain::root(&options.source_name);
    parse_chained(tokens, chain, options)
}

/// Read and parse a configuration file.
///
/// Tokens are stamped with `path` as given. A file that cannot be opened or
/// read is an import error.
pub fn parse_file(path: impl AsRef<Path>, options: &ParseOptions) -> ConfResult<Vec<Directive>> {
    let path = path.as_ref();
    let resolver = IncludeResolver::new(&options.resolver, &options.limits);
    let tokens = resolver.load(path)?;
    parse_chained(tokens, IncludeChain::root(path), options)
}

/// Parse an already-lexed token stream.
///
/// The stream is treated as the contents of `options.source_name` for cycle
/// detection.
pub fn parse_tokens(tokens: Vec<Token>, options: &ParseOptions) -> ConfResult<Vec<Directive>> {
    let chain = IncludeChain::root(&options.source_name);
    parse_chained(tokens, chain, options)
}

fn parse_chained(
    tokens: Vec<Token>,
    chain: IncludeChain,
    options: &ParseOptions,
) -> ConfResult<Vec<Directive>> {
    if tokens.len() > options.limits.max_tokens {
        return Err(ConfError::security(format!(
            "token count {} exceeds maximum {}",
            tokens.len(),
            options.limits.max_tokens
        )));
    }

    let tokens = tokens
        .into_iter()
        .map(|token| ChainedToken::new(token, chain.clone()))
        .collect();
    let mut parser = Parser::new(tokens, options);
    let dirs = parser.parse_main()?;

    debug!(
        source = %options.source_name,
        directives = dirs.len(),
        tokens = parser.total,
        "parsed configuration"
    );
    Ok(dirs)
}

struct Parser<'a> {
    /// Unconsumed tokens, last to be read first.
    pending: Vec<ChainedToken>,
    /// Length of the spliced stream, consumed tokens included.
    total: usize,
    resolver: IncludeResolver<'a>,
    limits: &'a Limits,
    depth: usize,
}

impl<'a> Parser<'a> {
    fn new(mut tokens: Vec<ChainedToken>, options: &'a ParseOptions) -> Self {
        tokens.reverse();
        Self {
            total: tokens.len(),
            pending: tokens,
            resolver: IncludeResolver::new(&options.resolver, &options.limits),
            limits: &options.limits,
            depth: 0,
        }
    }

    fn current(&self) -> Option<&Token> {
        self.pending.last().map(|t| &t.token)
    }

    /// The token after the current one.
    fn lookahead(&self) -> Option<&Token> {
        let idx = self.pending.len().checked_sub(2)?;
        Some(&self.pending[idx].token)
    }

    fn advance(&mut self) -> Option<ChainedToken> {
        self.pending.pop()
    }

    fn parse_main(&mut self) -> ConfResult<Vec<Directive>> {
        let dirs = self.parse_block()?;
        if let Some(token) = self.current() {
            return Err(ConfError::parse(format!("unexpected \"{}\"", token.text))
                .at(token.file.as_str(), token.line));
        }
        Ok(dirs)
    }

    /// Parse directives up to the end of input or a `}`, which is left unconsumed.
    fn parse_block(&mut self) -> ConfResult<Vec<Directive>> {
        let mut dirs = Vec::new();
        while let Some(token) = self.current() {
            if token.is_block_close() {
                break;
            }
            if let Some(dir) = self.parse_directive()? {
                dirs.push(dir);
            }
        }
        Ok(dirs)
    }

    /// Parse one statement. An empty statement (a lone `;`) yields `None`.
    fn parse_directive(&mut self) -> ConfResult<Option<Directive>> {
        let (mut file, mut line) = match self.current() {
            Some(token) => (token.file.clone(), token.line),
            None => return Err(ConfError::parse("unexpected end of input")),
        };
        let mut params: Vec<String> = Vec::new();

        while let Some(current) = self.pending.last() {
            let token = &current.token;

            if token.is_semicolon() {
                self.advance();
                if params.is_empty() {
                    return Ok(None);
                }
                return Ok(Some(Directive::new(params, file, line)));
            }

            if token.is_block_open() {
                if params.is_empty() {
                    return Err(ConfError::parse("block without a directive name").at(file, line));
                }
                self.advance();
                let block = self.parse_nested_block(&file, line)?;
                return Ok(Some(Directive::with_block(params, block, file, line)));
            }

            // Spliced tokens may close the enclosing block
            if params.is_empty() && token.is_block_close() {
                return Ok(None);
            }

            if params.is_empty() && token.text == "include" {
                let chain = current.chain.clone();
                self.expand_include(&file, line, &chain)?;
                if let Some(next) = self.current() {
                    file = next.file.clone();
                    line = next.line;
                }
                continue;
            }

            if let Some(consumed) = self.advance() {
                params.push(consumed.token.text);
            }
        }

        if params.is_empty() {
            return Ok(None);
        }
        Ok(Some(Directive::new(params, file, line)))
    }

    fn parse_nested_block(&mut self, file: &str, line: usize) -> ConfResult<Vec<Directive>> {
        if self.depth >= self.limits.max_block_depth {
            return Err(ConfError::security(format!(
                "block nesting exceeds maximum depth {}",
                self.limits.max_block_depth
            ))
            .at(file, line));
        }

        self.depth += 1;
        let block = self.parse_block();
        self.depth -= 1;
        let block = block?;

        if self.current().is_some_and(Token::is_block_close) {
            self.advance();
        }
        Ok(block)
    }

    /// Replace `include <pattern>` at the cursor with the included tokens.
    ///
    /// Costs time proportional to the number of included tokens only.
    fn expand_include(&mut self, file: &str, line: usize, chain: &IncludeChain) -> ConfResult<()> {
        let argument = match self.lookahead() {
            Some(arg) if !arg.is_semicolon() && !arg.is_block_open() && !arg.is_block_close() => {
                arg.text.clone()
            }
            _ => return Err(ConfError::parse("include without a file argument").at(file, line)),
        };

        let imported = self
            .resolver
            .import(&argument, chain)
            .map_err(|e| e.or_at(file, line).with_context(format!("while including {}", argument)))?;

        let total = self.total - 2 + imported.len();
        if total > self.limits.max_tokens {
            return Err(ConfError::security(format!(
                "token count {} exceeds maximum {}",
                total, self.limits.max_tokens
            ))
            .at(file, line));
        }

        debug!(
            include = %argument,
            file,
            line,
            tokens = imported.len(),
            "splicing include"
        );
        self.advance();
        self.advance();
        self.pending.extend(imported.into_iter().rev());
        self.total = total;
        Ok(())
    }
}
