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

//! Parse an nginx configuration file and print its directive tree.
//!
//! ```bash
//! cargo run -p nginxconf --example dump_config -- /etc/nginx/nginx.conf [root]
//! ```
//!
//! Relative includes are resolved under `root`, which defaults to the
//! directory containing the file.

use std::path::Path;

use nginxconf::{parse_file, traverse, Directive, ParseOptions, StatsCollector};

fn print_tree(dirs: &[Directive], indent: usize) {
    for dir in dirs {
        let location = format!("{}:{}", dir.file, dir.line);
        match &dir.block {
            Some(block) => {
                println!("{:indent$}{} {{    # {}", "", dir.params.join(" "), location, indent = indent);
                print_tree(block, indent + 4);
                println!("{:indent$}}}", "", indent = indent);
            }
            None => println!("{:indent$}{};    # {}", "", dir.params.join(" "), location, indent = indent),
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = std::env::args().skip(1);
    let file = args.next().ok_or("usage: dump_config <file> [root]")?;
    let root = match args.next() {
        Some(root) => root.into(),
        None => Path::new(&file)
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default(),
    };

    let opts = ParseOptions::builder().root(root).build();
    let dirs = parse_file(&file, &opts)?;
    print_tree(&dirs, 0);

    let mut stats = StatsCollector::default();
    traverse(&dirs, &mut stats)?;
    println!();
    println!("directives: {}", stats.directive_count);
    println!("blocks:     {}", stats.block_count);
    println!("max depth:  {}", stats.max_depth);
    println!("files:      {}", stats.files.len());
    for file in &stats.files {
        println!("  {}", file);
    }
    Ok(())
}
