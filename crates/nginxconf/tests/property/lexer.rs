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

//! Property-based tests for the lexer.

use nginxconf::lex::{tokenize, tokenize_named};
use proptest::prelude::*;

fn word() -> impl Strategy<Value = String> {
    "[a-z_$/][a-z0-9_.:/$=-]{0,12}"
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Property: arbitrary bytes never panic, and line numbers never go backwards.
    #[test]
    fn prop_lines_monotonic(input in proptest::collection::vec(any::<u8>(), 0..512)) {
        let tokens = tokenize(&input);
        let max_line = input.iter().filter(|&&b| b == b'\n').count() + 1;

        let mut last = 1;
        for token in &tokens {
            prop_assert!(token.line >= last, "line went from {} to {}", last, token.line);
            prop_assert!(token.line <= max_line);
            last = token.line;
        }
    }

    /// Property: whitespace-separated words lex to exactly those words.
    #[test]
    fn prop_words_round_trip(
        words in proptest::collection::vec(word(), 0..20),
        sep in prop::sample::select(vec![" ", "\t", "\n", "  \r\n"])
    ) {
        let input = words.join(sep);
        let texts: Vec<String> = tokenize(input.as_bytes()).into_iter().map(|t| t.text).collect();
        prop_assert_eq!(texts, words);
    }

    /// Property: a trailing comment never changes the tokens of a line.
    #[test]
    fn prop_comment_is_transparent(
        words in proptest::collection::vec(word(), 1..8),
        comment in "[ -~]{0,40}"
    ) {
        let plain = format!("{};\n", words.join(" "));
        let commented = format!("{}; #{}\n", words.join(" "), comment);

        let a: Vec<String> = tokenize(plain.as_bytes()).into_iter().map(|t| t.text).collect();
        let b: Vec<String> = tokenize(commented.as_bytes()).into_iter().map(|t| t.text).collect();
        prop_assert_eq!(a, b);
    }

    /// Property: a double-quoted value without quotes or backslashes comes back verbatim.
    #[test]
    fn prop_quoted_value_preserved(value in "[^\"\\\\]{0,40}") {
        let input = format!("k \"{}\";", value);
        let tokens = tokenize(input.as_bytes());

        prop_assert_eq!(tokens.len(), 3);
        prop_assert_eq!(&tokens[1].text, &value);
    }

    /// Property: every token carries the source name it was lexed under.
    #[test]
    fn prop_source_name_stamped(
        name in "[a-z]{1,8}\\.conf",
        input in "[ -~\n]{0,200}"
    ) {
        for token in tokenize_named(&name, input.as_bytes()) {
            prop_assert_eq!(&token.file, &name);
        }
    }
}
