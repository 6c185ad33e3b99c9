// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Signal relay for a running session.
//!
//! Window size changes are copied from the caller's terminal to the PTY.
//! Termination requests aimed at us are passed on to the child so the
//! session winds down through its normal exit path.

use std::os::fd::AsFd;
use std::sync::Arc;

use nix::sys::signal::Signal;
use tokio::signal::unix::{signal, Signal as SignalStream, SignalKind};

use crate::pty::{Child, Pty};
use crate::{terminal, SessionError};

pub struct SignalRelay {
    winch: SignalStream,
    term: SignalStream,
    hup: SignalStream,
}

impl SignalRelay {
    /// Register the signal handlers.
    pub fn install() -> Result<Self, SessionError> {
        let listen = |kind| signal(kind).map_err(SessionError::Signal);
        Ok(Self {
            winch: listen(SignalKind::window_change())?,
            term: listen(SignalKind::terminate())?,
            hup: listen(SignalKind::hangup())?,
        })
    }

    /// Relay signals until the task is aborted.
    ///
    /// With a `size_source` terminal, its size is pushed once right away so
    /// the child starts with the right geometry even if no SIGWINCH ever
    /// arrives, and again on every SIGWINCH.
    pub async fn run<S: AsFd>(mut self, pty: Arc<Pty>, child: Child, size_source: Option<S>) {
        if let Some(source) = &size_source {
            propagate_size(source, &pty);
        }
        loop {
            tokio::select! {
                Some(()) = self.winch.recv() => {
                    if let Some(source) = &size_source {
                        propagate_size(source, &pty);
                    }
                }
                Some(()) = self.term.recv() => forward(&child, Signal::SIGTERM),
                Some(()) = self.hup.recv() => forward(&child, Signal::SIGHUP),
                else => break,
            }
        }
    }
}

/// Copy the window size of the terminal behind `source` onto the PTY.
pub(crate) fn propagate_size<S: AsFd>(source: &S, pty: &Pty) {
    let result = terminal::window_size(&source.as_fd()).and_then(|size| {
        pty.resize(&size)?;
        Ok(size)
    });
    match result {
        Ok(size) => tracing::trace!(rows = size.ws_row, cols = size.ws_col, "resized pty"),
        Err(e) => tracing::warn!(error = %e, "error resizing pty"),
    }
}

fn forward(child: &Child, signal: Signal) {
    tracing::debug!(%signal, pid = child.pid().as_raw(), "forwarding signal");
    if let Err(e) = child.kill(signal) {
        tracing::debug!(error = %e, "failed to forward signal");
    }
}

#[cfg(test)]
#[path = "signals_tests.rs"]
mod tests;
