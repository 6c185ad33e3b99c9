// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `wpm exec`: run a command line under a prefix.

use std::time::Duration;

use anyhow::{bail, Result};
use wpm_session::{Command, Config};
use wpm_store::{Prefix, PrefixStore};

use crate::command_line::{shell_line, SHELL};
use crate::env::PREFIX_VAR;

/// The `sh -c` command for `args`, with the prefix path exported.
pub fn build_command<S: AsRef<str>>(prefix: &Prefix, args: &[S]) -> Result<Command> {
    let line = shell_line(args);
    if line.trim().is_empty() {
        bail!("Please provide a command to run.");
    }
    Ok(Command::new(SHELL)
        .arg("-c")
        .arg(line)
        .env(PREFIX_VAR, prefix.path.as_str()))
}

/// Resolve `prefix_name`, run `args` in a pty session and return the exit code.
pub async fn run<S: AsRef<str>>(
    store: &dyn PrefixStore,
    prefix_name: &str,
    args: &[S],
    drain_grace: Duration,
) -> Result<i32> {
    let prefix = store.find(prefix_name)?;
    let command = build_command(&prefix, args)?;
    tracing::debug!(
        prefix = %prefix.name,
        path = %prefix.path,
        command = ?command.args,
        "executing command"
    );

    let code = wpm_session::run(Config::new(command).drain_grace(drain_grace)).await?;
    Ok(code)
}

#[cfg(test)]
#[path = "exec_tests.rs"]
mod tests;
