// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Raw descriptor I/O for the PTY master and registrable stdio.
//!
//! `Ok(None)` from [`read`] or [`write`] means the descriptor is not ready;
//! the caller clears readiness and waits on the reactor again.

use nix::errno::Errno;
use nix::fcntl::{fcntl, FcntlArg, OFlag};
use std::os::fd::{AsFd, AsRawFd};

fn status_flags<F: AsRawFd>(fd: &F) -> nix::Result<OFlag> {
    fcntl(fd.as_raw_fd(), FcntlArg::F_GETFL).map(OFlag::from_bits_truncate)
}

/// Set `O_NONBLOCK`, returning the flags that were in effect before.
pub fn set_non_blocking<F: AsRawFd>(fd: &F) -> nix::Result<OFlag> {
    let saved = status_flags(fd)?;
    restore_flags(fd, saved | OFlag::O_NONBLOCK)?;
    Ok(saved)
}

/// Replace the file status flags, e.g. with ones saved by [`set_non_blocking`].
pub fn restore_flags<F: AsRawFd>(fd: &F, flags: OFlag) -> nix::Result<()> {
    fcntl(fd.as_raw_fd(), FcntlArg::F_SETFL(flags)).map(drop)
}

fn ready<T>(result: nix::Result<T>) -> nix::Result<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(Errno::EAGAIN) => Ok(None),
        Err(e) => Err(e),
    }
}

/// Read into `buf`. A PTY master whose slave side is gone reports `EIO`,
/// which is folded into end of file.
pub fn read<F: AsRawFd>(fd: &F, buf: &mut [u8]) -> nix::Result<Option<usize>> {
    match nix::unistd::read(fd.as_raw_fd(), buf) {
        Err(Errno::EIO) => Ok(Some(0)),
        other => ready(other),
    }
}

pub fn write<F: AsFd>(fd: &F, buf: &[u8]) -> nix::Result<Option<usize>> {
    ready(nix::unistd::write(fd, buf))
}

#[cfg(test)]
#[path = "nbio_tests.rs"]
mod tests;
