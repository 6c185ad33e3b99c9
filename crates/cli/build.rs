// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

// Build scripts are expected to panic on failure.
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::io::Write;

/// Variable name and the doc line attached to its constant.
const VARS: &[(&str, &str)] = &[
    ("WPM_CONFIG", "Path of the prefix store document."),
    ("WPM_DRAIN_GRACE_MS", "Milliseconds to wait after command output ends."),
    ("WPM_LOG", "tracing filter directives."),
    ("WINEPREFIX", "Exported to the child with the selected prefix path."),
];

fn main() {
    let out_dir = std::env::var("OUT_DIR").unwrap();
    let path = std::path::Path::new(&out_dir).join("env_names.rs");
    let mut f = std::io::BufWriter::new(std::fs::File::create(path).unwrap());

    for (name, doc) in VARS {
        writeln!(f, "/// {doc}").unwrap();
        writeln!(f, "pub const {name}: &str = {name:?};").unwrap();
    }
    f.flush().unwrap();
    println!("cargo:rerun-if-changed=build.rs");
}
