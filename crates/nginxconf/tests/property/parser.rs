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

//! Property-based tests for the parser.

use nginxconf::{parse_with_options, ConfErrorKind, Directive, ParseOptions};
use proptest::prelude::*;

#[derive(Debug, Clone, PartialEq)]
struct Shape {
    params: Vec<String>,
    block: Option<Vec<Shape>>,
}

impl Shape {
    fn of(dir: &Directive) -> Self {
        Self {
            params: dir.params.clone(),
            block: dir.block.as_ref().map(|b| b.iter().map(Shape::of).collect()),
        }
    }

    fn render(&self, out: &mut String) {
        out.push_str(&self.params.join(" "));
        match &self.block {
            None => out.push_str(";\n"),
            Some(children) => {
                out.push_str(" {\n");
                for child in children {
                    child.render(out);
                }
                out.push_str("}\n");
            }
        }
    }
}

fn word() -> impl Strategy<Value = String> {
    "[a-z_$/][a-z0-9_.:/$=-]{0,12}".prop_filter("include is expanded", |w| w != "include")
}

fn shape() -> impl Strategy<Value = Shape> {
    let leaf = (word(), proptest::collection::vec(word(), 0..3)).prop_map(|(name, args)| Shape {
        params: std::iter::once(name).chain(args).collect(),
        block: None,
    });

    leaf.prop_recursive(4, 32, 4, |inner| {
        (
            word(),
            proptest::collection::vec(word(), 0..2),
            proptest::collection::vec(inner, 0..4),
        )
            .prop_map(|(name, args, children)| Shape {
                params: std::iter::once(name).chain(args).collect(),
                block: Some(children),
            })
    })
}

fn options() -> ParseOptions {
    ParseOptions::builder()
        .root("/nonexistent/nginxconf-proptest")
        .build()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    /// Property: a rendered tree parses back to the same shape.
    #[test]
    fn prop_tree_shape_preserved(tree in proptest::collection::vec(shape(), 0..6)) {
        let mut text = String::new();
        for node in &tree {
            node.render(&mut text);
        }

        let dirs = parse_with_options(text.as_bytes(), &options()).unwrap();
        let parsed: Vec<Shape> = dirs.iter().map(Shape::of).collect();
        prop_assert_eq!(parsed, tree);
    }

    /// Property: arbitrary text either parses or fails with an error, never panics.
    #[test]
    fn prop_arbitrary_input_does_not_panic(input in "[ -~\n\t]{0,300}") {
        let _ = parse_with_options(input.as_bytes(), &options());
    }

    /// Property: nesting is accepted exactly up to the configured depth.
    #[test]
    fn prop_block_depth_limit(depth in 0usize..40, limit in 0usize..40) {
        let text = format!("{}x;{}", "b { ".repeat(depth), " }".repeat(depth));
        let opts = ParseOptions::builder()
            .root("/nonexistent/nginxconf-proptest")
            .max_block_depth(limit)
            .build();

        match parse_with_options(text.as_bytes(), &opts) {
            Ok(_) => prop_assert!(depth <= limit),
            Err(e) => {
                prop_assert!(depth > limit);
                prop_assert_eq!(e.kind, ConfErrorKind::Security);
            }
        }
    }

    /// Property: no directive in a finished tree is empty.
    #[test]
    fn prop_no_empty_directives(input in "[a-z;{} \n]{0,200}") {
        if let Ok(dirs) = parse_with_options(input.as_bytes(), &options()) {
            fn check(dirs: &[Directive]) -> bool {
                dirs.iter().all(|d| !d.params.is_empty() && check(d.block()))
            }
            prop_assert!(check(&dirs));
        }
    }
}
