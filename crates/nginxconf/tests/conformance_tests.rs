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

//! End-to-end behaviour of the lexer and parser on nginx configuration text.

use nginxconf::{
    get_all_directives, get_directive, parse, parse_with_options, tokenize, ConfErrorKind,
    ParseOptions,
};

const DEFAULT_CONF: &str = r#"user www-data;
worker_processes auto;
pid /run/nginx.pid;

events {
    worker_connections 768;
    # multi_accept on;
}

http {
    sendfile on;
    log_format main '$remote_addr - $remote_user [$time_local] "$request"';
    server {
        listen 80 default_server;
        listen [::]:80 default_server;
        server_name _;
        location / {
            try_files $uri $uri/ =404;
        }

        location ~ \.php$ {
            fastcgi_pass unix:/run/php/php-fpm.sock;
        }
    }
}
"#;

fn texts(input: &[u8]) -> Vec<String> {
    tokenize(input).into_iter().map(|t| t.text).collect()
}

// =============================================================================
// Lexical behaviour
// =============================================================================

#[test]
fn test_comment_is_transparent() {
    assert_eq!(
        texts(b"foo bar; # note\nbaz qux;"),
        texts(b"foo bar; baz qux;")
    );
}

#[test]
fn test_lone_semicolons_are_tokens() {
    assert_eq!(texts(b";;"), [";", ";"]);
}

#[test]
fn test_escaped_quote_in_param() {
    let dirs = parse(br#"foo "a\"b";"#).unwrap();
    assert_eq!(dirs[0].params, vec!["foo", "a\"b"]);
}

#[test]
fn test_unknown_escape_keeps_backslash() {
    let dirs = parse(br#"foo "a\nb";"#).unwrap();
    assert_eq!(dirs[0].params, vec!["foo", "a\\nb"]);
}

#[test]
fn test_single_quotes_keep_double_quotes() {
    let dirs = parse(br#"add_header X "say \"hi\"" 'it "works"';"#).unwrap();
    assert_eq!(dirs[0].args(), ["X", "say \"hi\"", "it \"works\""]);
}

#[test]
fn test_windows_line_endings() {
    let dirs = parse(b"a 1;\r\nb 2;\r\n").unwrap();
    assert_eq!(dirs[1].params, vec!["b", "2"]);
    assert_eq!(dirs[1].line, 2);
}

// =============================================================================
// A complete configuration
// =============================================================================

#[test]
fn test_default_config_structure() {
    let dirs = parse(DEFAULT_CONF.as_bytes()).unwrap();

    let top: Vec<&str> = dirs.iter().map(|d| d.name()).collect();
    assert_eq!(top, ["user", "worker_processes", "pid", "events", "http"]);

    let events = get_directive(&dirs, "events").unwrap();
    assert_eq!(events.line, 5);
    assert_eq!(events.block().len(), 1);
    assert_eq!(events.child("worker_connections").unwrap().args(), ["768"]);

    let http = get_directive(&dirs, "http").unwrap();
    let log_format = http.child("log_format").unwrap();
    assert_eq!(
        log_format.args(),
        ["main", "$remote_addr - $remote_user [$time_local] \"$request\""]
    );

    let server = http.child("server").unwrap();
    assert_eq!(server.line, 13);

    let listens = server.children("listen");
    assert_eq!(listens.len(), 2);
    assert_eq!(listens[1].args(), ["[::]:80", "default_server"]);
    assert_eq!(listens[1].line, 15);

    let locations = server.children("location");
    assert_eq!(locations[0].args(), ["/"]);
    assert_eq!(locations[0].child("try_files").unwrap().args(), ["$uri", "$uri/", "=404"]);
    assert_eq!(locations[1].args(), ["~", "\\.php$"]);
    assert_eq!(locations[1].line, 21);
    assert_eq!(locations[1].block()[0].line, 22);
}

#[test]
fn test_every_directive_is_stamped_with_source() {
    let opts = ParseOptions::builder()
        .source_name("/etc/nginx/nginx.conf")
        .build();
    let dirs = parse_with_options(DEFAULT_CONF.as_bytes(), &opts).unwrap();

    fn check(dirs: &[nginxconf::Directive]) {
        for dir in dirs {
            assert_eq!(dir.file, "/etc/nginx/nginx.conf");
            assert!(dir.line >= 1);
            assert!(!dir.params.is_empty());
            check(dir.block());
        }
    }
    check(&dirs);
}

#[test]
fn test_lookup_helpers_on_top_level() {
    let dirs = parse(b"env A; env B; user nobody;").unwrap();

    let envs = get_all_directives(&dirs, "env");
    assert_eq!(envs.len(), 2);
    assert_eq!(envs[1].param(1), Some("B"));
    assert!(get_directive(&dirs, "missing").is_none());
}

// =============================================================================
// Errors
// =============================================================================

#[test]
fn test_error_aborts_whole_parse() {
    let result = parse(b"a;\nb { c; }\n}\nd;");
    let err = result.unwrap_err();
    assert_eq!(err.kind, ConfErrorKind::Parse);
    assert_eq!(err.location.line, 3);
}

#[test]
fn test_error_display() {
    let err = parse(b"ok;\n{ }").unwrap_err();
    assert_eq!(
        err.to_string(),
        "ParseError at nginx.conf:2: block without a directive name"
    );
}

#[test]
fn test_block_depth_error_is_security() {
    let opts = ParseOptions::builder().max_block_depth(1).build();
    let err = parse_with_options(b"a { b { } }", &opts).unwrap_err();
    assert_eq!(err.kind, ConfErrorKind::Security);
}
