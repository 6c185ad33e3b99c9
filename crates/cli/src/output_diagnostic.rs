// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! User-facing diagnostics on stderr.
//!
//! The label is colored when stderr is a terminal; the message itself is
//! always plain so it can be copied or grepped.

use std::fmt::Display;
use std::io::{self, IsTerminal, Write};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Level {
    Error,
    Warning,
}

impl Level {
    fn label(self) -> &'static str {
        match self {
            Level::Error => "Error",
            Level::Warning => "Warning",
        }
    }

    /// Bold SGR sequence for the label.
    fn color(self) -> &'static str {
        match self {
            Level::Error => "\x1b[1;31m",
            Level::Warning => "\x1b[1;33m",
        }
    }
}

/// Print a fatal problem to stderr.
pub fn print_error(msg: impl Display) {
    emit(Level::Error, msg);
}

/// Print a non-fatal problem to stderr.
pub fn print_warning(msg: impl Display) {
    emit(Level::Warning, msg);
}

fn emit(level: Level, msg: impl Display) {
    let stderr = io::stderr();
    let colored = stderr.is_terminal();
    let _ = write_diagnostic(&mut stderr.lock(), level, msg, colored);
}

fn write_diagnostic<W: Write>(
    out: &mut W,
    level: Level,
    msg: impl Display,
    colored: bool,
) -> io::Result<()> {
    if colored {
        writeln!(out, "{}{}:\x1b[0m {msg}", level.color(), level.label())
    } else {
        writeln!(out, "{}: {msg}", level.label())
    }
}

#[cfg(test)]
#[path = "output_diagnostic_tests.rs"]
mod tests;
