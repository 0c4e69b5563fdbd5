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

//! Directive tree traversal for configuration consumers.
//!
//! Consumers translate the tree context by context (`main`, `http`,
//! `http/server`, ...). The visitor pattern separates that walking from what
//! each consumer does with a directive: implement [`DirectiveVisitor`] and
//! let [`traverse`] handle the recursion.
//!
//! # Example
//!
//! ```
//! use nginxconf::traverse::{traverse, DirectiveVisitor, VisitorContext};
//! use nginxconf::Directive;
//!
//! struct Listens(Vec<String>);
//!
//! impl DirectiveVisitor for Listens {
//!     type Error = std::convert::Infallible;
//!
//!     fn visit_directive(&mut self, dir: &Directive, ctx: &VisitorContext) -> Result<(), Self::Error> {
//!         if dir.name() == "listen" {
//!             self.0.push(format!("{}: {}", ctx.path_string(), dir.args().join(" ")));
//!         }
//!         Ok(())
//!     }
//! }
//!
//! let dirs = nginxconf::parse(b"http { server { listen 80; } }").unwrap();
//! let mut listens = Listens(Vec::new());
//! traverse(&dirs, &mut listens).unwrap();
//! assert_eq!(listens.0, ["http/server: 80"]);
//! ```

use std::collections::BTreeSet;

use crate::directive::Directive;

/// Context provided to visitors during traversal.
#[derive(Debug, Clone, Default)]
pub struct VisitorContext<'a> {
    /// Current nesting depth (0 = main context).
    pub depth: usize,
    /// Names of the enclosing block directives, outermost first.
    pub path: Vec<&'a str>,
}

impl<'a> VisitorContext<'a> {
    /// Create a new context for the main context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create the context for the block of directive `name`.
    pub fn child(&self, name: &'a str) -> Self {
        let mut path = self.path.clone();
        path.push(name);
        Self {
            depth: self.depth + 1,
            path,
        }
    }

    /// The context as a string, e.g. `http/server` (`main` at the top).
    pub fn path_string(&self) -> String {
        if self.path.is_empty() {
            "main".to_string()
        } else {
            self.path.join("/")
        }
    }
}

/// Trait for visiting the directives of a configuration tree.
///
/// Only [`visit_directive`](Self::visit_directive) is required. The other
/// methods default to doing nothing.
pub trait DirectiveVisitor {
    /// Error type returned by visitor methods.
    type Error;

    /// Called before the first top-level directive.
    fn begin_tree(&mut self, _dirs: &[Directive]) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Called after the whole tree has been visited.
    fn end_tree(&mut self, _dirs: &[Directive]) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Called for every directive, block or simple, in source order.
    fn visit_directive(&mut self, dir: &Directive, ctx: &VisitorContext) -> Result<(), Self::Error>;

    /// Called after `visit_directive` for a block directive, before its children.
    fn begin_block(&mut self, _dir: &Directive, _ctx: &VisitorContext) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Called after the children of a block directive.
    fn end_block(&mut self, _dir: &Directive, _ctx: &VisitorContext) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// Traverse a directive tree, calling visitor methods for each directive.
///
/// The first error returned by the visitor stops the walk.
pub fn traverse<V: DirectiveVisitor>(dirs: &[Directive], visitor: &mut V) -> Result<(), V::Error> {
    visitor.begin_tree(dirs)?;
    traverse_block(dirs, visitor, &VisitorContext::new())?;
    visitor.end_tree(dirs)
}

fn traverse_block<'a, V: DirectiveVisitor>(
    dirs: &'a [Directive],
    visitor: &mut V,
    ctx: &VisitorContext<'a>,
) -> Result<(), V::Error> {
    for dir in dirs {
        visitor.visit_directive(dir, ctx)?;

        if let Some(block) = &dir.block {
            visitor.begin_block(dir, ctx)?;
            traverse_block(block, visitor, &ctx.child(dir.name()))?;
            visitor.end_block(dir, ctx)?;
        }
    }
    Ok(())
}

/// Statistics collector visitor for testing and analysis.
#[derive(Debug, Default)]
pub struct StatsCollector {
    /// Number of directives visited.
    pub directive_count: usize,
    /// Number of block directives visited.
    pub block_count: usize,
    /// Maximum depth reached.
    pub max_depth: usize,
    /// Distinct files the directives came from.
    pub files: BTreeSet<String>,
}

impl DirectiveVisitor for StatsCollector {
    type Error = std::convert::Infallible;

    fn visit_directive(&mut self, dir: &Directive, ctx: &VisitorContext) -> Result<(), Self::Error> {
        self.directive_count += 1;
        self.max_depth = self.max_depth.max(ctx.depth);
        if !self.files.contains(&dir.file) {
            self.files.insert(dir.file.clone());
        }
        Ok(())
    }

    fn begin_block(&mut self, _dir: &Directive, _ctx: &VisitorContext) -> Result<(), Self::Error> {
        self.block_count += 1;
        Ok(())
    }
}
