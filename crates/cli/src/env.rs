// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Environment variables wpm reads, and the one it exports to children.
//!
//! Names come from `build.rs`; reads go through the accessors below.

mod names {
    include!(concat!(env!("OUT_DIR"), "/env_names.rs"));
}

pub use names::*;

use std::path::PathBuf;

/// Variable handed to the child process, holding the prefix path.
pub const PREFIX_VAR: &str = names::WINEPREFIX;

/// `WPM_CONFIG`: store location. clap reads it for `--config`; shell
/// completion, which runs without parsed arguments, reads it here.
pub fn config_file() -> Option<PathBuf> {
    std::env::var_os(names::WPM_CONFIG)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}

/// `WPM_DRAIN_GRACE_MS`: Pause between end of command output and pty close.
pub fn drain_grace_ms() -> Option<u64> {
    var_u64(names::WPM_DRAIN_GRACE_MS)
}

/// `WPM_LOG`: tracing filter directives.
pub fn log_filter() -> Option<String> {
    std::env::var(names::WPM_LOG).ok().filter(|v| !v.is_empty())
}

fn var_u64(name: &str) -> Option<u64> {
    std::env::var(name).ok().and_then(|v| v.trim().parse().ok())
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
