// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Interactive session.
//!
//! Runs one command in a PTY and relays the caller's terminal to it until the
//! command's output ends.

use std::sync::Arc;
use std::time::Duration;

use crate::command::{Command, Exec};
use crate::pty::{self, Pty};
use crate::signals::SignalRelay;
use crate::stdio::{Input, Output};
use crate::terminal::{self, RawMode};
use crate::SessionError;

/// Pause between the end of output and closing the PTY.
pub const DEFAULT_DRAIN_GRACE: Duration = Duration::from_secs(1);

pub struct Config {
    pub command: Command,
    pub drain_grace: Duration,
}

impl Config {
    pub fn new(command: Command) -> Self {
        Self {
            command,
            drain_grace: DEFAULT_DRAIN_GRACE,
        }
    }

    pub fn drain_grace(mut self, grace: Duration) -> Self {
        self.drain_grace = grace;
        self
    }
}

/// Run the command attached to a new PTY and return its exit code.
///
/// When stdin is a terminal it is put in raw mode for the length of the
/// session and its size is mirrored onto the PTY.
pub async fn run(config: Config) -> Result<i32, SessionError> {
    let exec = Exec::prepare(&config.command)?;
    let interactive = terminal::stdin_is_terminal();
    let initial_size = if interactive {
        terminal::window_size(&std::io::stdin()).ok()
    } else {
        None
    };

    let signals = SignalRelay::install()?;
    let raw_mode = if interactive {
        Some(RawMode::enable(std::io::stdin()).map_err(SessionError::RawMode)?)
    } else {
        None
    };

    let (pty, child) = pty::spawn(&exec, initial_size)?;
    let pty = Arc::new(pty);
    let size_source = interactive.then(std::io::stdin);
    let signal_task = tokio::spawn(signals.run(Arc::clone(&pty), child.clone(), size_source));

    let (input, non_blocking) = Input::stdin();
    let input_task = tokio::spawn(relay_input(input, Arc::clone(&pty)));

    let copied = copy_output(&pty, &mut Output::stdout()).await;
    if copied.is_ok() {
        tokio::time::sleep(config.drain_grace).await;
    }

    signal_task.abort();
    input_task.abort();
    let _ = signal_task.await;
    let _ = input_task.await;
    drop(pty);
    drop(non_blocking);
    drop(raw_mode);

    copied?;
    child.wait().await
}

/// Copy PTY output to `out` until the child side closes.
async fn copy_output(pty: &Pty, out: &mut Output) -> Result<(), SessionError> {
    let mut buf = [0u8; 4096];
    loop {
        let n = pty.read(&mut buf).await?;
        if n == 0 {
            tracing::debug!("pty output closed");
            return Ok(());
        }
        out.write_all(&buf[..n]).await?;
    }
}

/// Copy stdin to the PTY until stdin ends or the task is aborted.
async fn relay_input(mut input: Input, pty: Arc<Pty>) {
    let mut buf = [0u8; 4096];
    loop {
        let n = match input.read(&mut buf).await {
            Ok(0) => {
                tracing::debug!("stdin closed");
                return;
            }
            Ok(n) => n,
            Err(e) => {
                tracing::debug!(error = %e, "stdin read failed");
                return;
            }
        };
        if let Err(e) = pty.write(&buf[..n]).await {
            tracing::debug!(error = %e, "pty write failed");
            return;
        }
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;
