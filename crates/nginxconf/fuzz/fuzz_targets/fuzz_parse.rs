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

//! Fuzz target for the lexer and parser.
//!
//! Exercises the full pipeline on arbitrary bytes:
//!
//! - Lossy UTF-8 decoding
//! - Quote, escape and comment handling in the lexer
//! - Statement and block parsing
//! - Limit enforcement (max_file_size, max_tokens, max_block_depth)
//!
//! Includes are resolved under a root that does not exist, so the fuzzer
//! never reads the host's configuration.
//!
//! # Running the Fuzzer
//!
//! ```bash
//! # Run the fuzzer (from the nginxconf crate directory)
//! cargo fuzz run fuzz_parse
//!
//! # Run with specific options
//! cargo fuzz run fuzz_parse -- -max_len=100000 -max_total_time=300
//! ```
//!
//! # Expected Behavior
//!
//! - Neither the lexer nor the parser panics
//! - Every token line lies within the input's line count
//! - Limits are enforced as errors

use libfuzzer_sys::fuzz_target;
use nginxconf::{parse_tokens, parse_with_options, tokenize, Limits, ParseOptions};

fuzz_target!(|data: &[u8]| {
    let tokens = tokenize(data);
    let lines = data.iter().filter(|&&b| b == b'\n').count() + 1;
    for token in &tokens {
        assert!(token.line >= 1 && token.line <= lines);
    }

    // Default limits
    let opts = ParseOptions::builder()
        .root("/nonexistent/nginxconf-fuzz")
        .build();
    let _ = parse_with_options(data, &opts);
    let _ = parse_tokens(tokens, &opts);

    // Very restrictive limits
    let strict = ParseOptions::builder()
        .root("/nonexistent/nginxconf-fuzz")
        .limits(Limits {
            max_file_size: 1024,
            max_block_depth: 4,
            max_include_depth: 2,
            max_include_files: 4,
            max_tokens: 128,
        })
        .build();
    let _ = parse_with_options(data, &strict);
});
