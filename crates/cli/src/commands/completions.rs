// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shell completion: static scripts for `wpm completions <shell>` and
//! prefix names for `--prefix` when the shell asks at runtime
//! (`COMPLETE=<shell> wpm`).

use std::ffi::OsStr;
use std::io::Write;

use clap::CommandFactory;
use clap_complete::engine::CompletionCandidate;
use clap_complete::Shell;
use wpm_store::{JsonFileStore, PrefixStore};

use crate::cli::Cli;
use crate::{config, env};

/// Write the completion script for `shell`.
pub fn generate<W: Write>(shell: Shell, out: &mut W) {
    let mut command = Cli::command();
    let name = command.get_name().to_string();
    clap_complete::generate(shell, &mut command, name, out);
}

/// Prefix names starting with `current`, in store order, each listed once.
pub fn prefix_candidates(store: &dyn PrefixStore, current: &str) -> Vec<CompletionCandidate> {
    let Ok(prefixes) = store.list() else {
        return Vec::new();
    };
    let mut seen = Vec::new();
    let mut candidates = Vec::new();
    for prefix in prefixes {
        if !prefix.name.starts_with(current) || seen.contains(&prefix.name) {
            continue;
        }
        seen.push(prefix.name.clone());
        candidates.push(CompletionCandidate::new(prefix.name).help(Some(prefix.path.into())));
    }
    candidates
}

/// Value completer for `--prefix`. Reads the store named by `WPM_CONFIG` or
/// the default location and never creates it.
pub fn complete_prefix(current: &OsStr) -> Vec<CompletionCandidate> {
    let Some(current) = current.to_str() else {
        return Vec::new();
    };
    let Ok(path) = config::config_path(env::config_file().as_deref()) else {
        return Vec::new();
    };
    if !path.exists() {
        return Vec::new();
    }
    prefix_candidates(&JsonFileStore::new(path), current)
}

#[cfg(test)]
#[path = "completions_tests.rs"]
mod tests;
