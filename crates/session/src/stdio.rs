// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The caller's stdin and stdout as seen by the session relays.
//!
//! Descriptors the reactor can poll (terminals, pipes, sockets) are driven
//! through [`AsyncFd`]. Anything else, such as a regular file or
//! `/dev/null`, never blocks and is read or written directly.

use std::io::{Stdin, Stdout, Write};

use tokio::io::unix::AsyncFd;
use tokio::io::AsyncReadExt;

use crate::nbio;
use crate::terminal::NonBlocking;

/// Byte source for the input relay.
pub enum Input {
    Polled(AsyncFd<Stdin>),
    Blocking(tokio::io::Stdin),
}

impl Input {
    /// Attach to stdin. A pollable stdin is switched to non-blocking mode for
    /// as long as the returned guard lives.
    pub fn stdin() -> (Self, Option<NonBlocking<Stdin>>) {
        match AsyncFd::new(std::io::stdin()) {
            Ok(fd) => match NonBlocking::enable(std::io::stdin()) {
                Ok(guard) => (Input::Polled(fd), Some(guard)),
                Err(e) => {
                    tracing::debug!(error = %e, "stdin stays blocking");
                    (Input::Blocking(tokio::io::stdin()), None)
                }
            },
            Err(e) => {
                tracing::debug!(error = %e, "stdin is not pollable");
                (Input::Blocking(tokio::io::stdin()), None)
            }
        }
    }

    pub async fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        match self {
            Input::Polled(fd) => loop {
                let mut guard = fd.readable().await?;
                match nbio::read(fd.get_ref(), buf)? {
                    Some(n) => return Ok(n),
                    None => guard.clear_ready(),
                }
            },
            Input::Blocking(stdin) => stdin.read(buf).await,
        }
    }
}

/// Byte sink for the output copy.
pub enum Output {
    Polled(AsyncFd<Stdout>),
    Blocking(Stdout),
}

impl Output {
    pub fn stdout() -> Self {
        match AsyncFd::new(std::io::stdout()) {
            Ok(fd) => Output::Polled(fd),
            Err(e) => {
                tracing::debug!(error = %e, "stdout is not pollable");
                Output::Blocking(std::io::stdout())
            }
        }
    }

    pub async fn write_all(&mut self, data: &[u8]) -> std::io::Result<()> {
        match self {
            Output::Polled(fd) => {
                let mut written = 0;
                while written < data.len() {
                    let mut guard = fd.writable().await?;
                    match nbio::write(fd.get_ref(), &data[written..])? {
                        Some(n) => written += n,
                        None => guard.clear_ready(),
                    }
                }
                Ok(())
            }
            Output::Blocking(stdout) => {
                let mut out = stdout.lock();
                out.write_all(data)?;
                out.flush()
            }
        }
    }
}
