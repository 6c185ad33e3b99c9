// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Building the `sh -c` command line for `wpm exec`.

use std::borrow::Cow;

/// Shell used to interpret the command line.
pub const SHELL: &str = "sh";

/// Join `args` into one command line for [`SHELL`].
///
/// Arguments containing whitespace are wrapped in double quotes so they reach
/// the command as a single word; everything else is passed through verbatim,
/// so variables and globs are still expanded by the shell.
pub fn shell_line<S: AsRef<str>>(args: &[S]) -> String {
    args.iter()
        .map(|a| quote(a.as_ref()))
        .collect::<Vec<_>>()
        .join(" ")
}

fn quote(arg: &str) -> Cow<'_, str> {
    if arg.chars().any(char::is_whitespace) {
        Cow::Owned(format!("\"{arg}\""))
    } else {
        Cow::Borrowed(arg)
    }
}

#[cfg(test)]
#[path = "command_line_tests.rs"]
mod tests;
