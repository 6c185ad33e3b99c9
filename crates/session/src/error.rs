// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;

/// Errors that abort an interactive session.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("invalid command: {0}")]
    InvalidCommand(String),

    #[error("failed to start command in a pty: {0}")]
    Spawn(#[source] nix::Error),

    #[error("failed to switch terminal to raw mode: {0}")]
    RawMode(#[source] nix::Error),

    #[error("failed to install signal handler: {0}")]
    Signal(#[source] std::io::Error),

    #[error("pty I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to wait for command: {0}")]
    Wait(#[source] nix::Error),
}

impl From<nix::Error> for SessionError {
    fn from(e: nix::Error) -> Self {
        SessionError::Io(e.into())
    }
}
