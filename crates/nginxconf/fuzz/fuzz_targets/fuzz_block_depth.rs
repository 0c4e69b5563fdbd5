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

#![no_main]

//! Fuzz target for block depth enforcement.
//!
//! Builds configurations whose nesting is driven by the input and checks that
//! the parser accepts exactly the nesting allowed by `max_block_depth`, without
//! overflowing the stack on unclosed or very deep blocks.
//!
//! # Running the Fuzzer
//!
//! ```bash
//! cargo fuzz run fuzz_block_depth
//!
//! # Monitor stack usage
//! cargo fuzz run fuzz_block_depth -- -rss_limit_mb=256
//! ```

use libfuzzer_sys::fuzz_target;
use nginxconf::{parse_with_options, ConfErrorKind, ParseOptions};

fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }

    let limit = (data[0] % 32) as usize;
    let opts = ParseOptions::builder()
        .root("/nonexistent/nginxconf-fuzz")
        .max_block_depth(limit)
        .build();

    // Each remaining byte opens a block (even) or closes one (odd)
    let mut text = String::new();
    let mut depth = 0usize;
    let mut deepest = 0usize;
    for &b in &data[1..] {
        if b % 2 == 0 {
            text.push_str("b { ");
            depth += 1;
            deepest = deepest.max(depth);
        } else if depth > 0 {
            text.push_str("x; } ");
            depth -= 1;
        }
    }

    match parse_with_options(text.as_bytes(), &opts) {
        Ok(_) => assert!(deepest <= limit),
        Err(e) => {
            assert_eq!(e.kind, ConfErrorKind::Security);
            assert!(deepest > limit);
        }
    }
});
