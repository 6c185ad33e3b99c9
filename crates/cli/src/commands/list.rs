// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `wpm list`: one prefix per line, optionally with its path.

use std::io::Write;

use anyhow::Result;
use wpm_store::{Prefix, PrefixStore};

pub fn run<W: Write>(store: &dyn PrefixStore, show_path: bool, out: &mut W) -> Result<()> {
    write_list(out, &store.list()?, show_path)?;
    Ok(())
}

/// Write `name` or `name,path` lines.
pub fn write_list<W: Write>(out: &mut W, prefixes: &[Prefix], show_path: bool) -> std::io::Result<()> {
    for prefix in prefixes {
        if show_path {
            writeln!(out, "{},{}", prefix.name, prefix.path)?;
        } else {
            writeln!(out, "{}", prefix.name)?;
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "list_tests.rs"]
mod tests;
