// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Caller terminal state: raw mode, file status flags and window size.
//!
//! Each change is held by a guard that puts the previous state back when
//! dropped.

use std::io::IsTerminal;
use std::os::fd::{AsFd, AsRawFd};

use nix::fcntl::OFlag;
use nix::pty::Winsize;
use nix::sys::termios::{self, SetArg, Termios};

use crate::nbio;

nix::ioctl_read_bad!(tiocgwinsz, nix::libc::TIOCGWINSZ, Winsize);
nix::ioctl_write_ptr_bad!(tiocswinsz, nix::libc::TIOCSWINSZ, Winsize);

/// Whether the caller's stdin is an interactive terminal.
pub fn stdin_is_terminal() -> bool {
    std::io::stdin().is_terminal()
}

/// Current window size of the terminal behind `fd`.
pub fn window_size<F: AsRawFd>(fd: &F) -> nix::Result<Winsize> {
    let mut size = Winsize {
        ws_row: 0,
        ws_col: 0,
        ws_xpixel: 0,
        ws_ypixel: 0,
    };
    // SAFETY: TIOCGWINSZ writes a single winsize struct into `size`, which
    // lives for the duration of the call.
    unsafe { tiocgwinsz(fd.as_raw_fd(), &mut size) }?;
    Ok(size)
}

/// Apply `size` to the terminal behind `fd`.
pub fn set_window_size<F: AsRawFd>(fd: &F, size: &Winsize) -> nix::Result<()> {
    // SAFETY: TIOCSWINSZ only reads the winsize struct behind the pointer.
    unsafe { tiocswinsz(fd.as_raw_fd(), size) }?;
    Ok(())
}

/// Terminal switched to raw mode; the saved attributes come back on drop.
pub struct RawMode<F: AsFd> {
    fd: F,
    saved: Termios,
}

impl<F: AsFd> RawMode<F> {
    pub fn enable(fd: F) -> nix::Result<Self> {
        let saved = termios::tcgetattr(fd.as_fd())?;
        let mut raw = saved.clone();
        termios::cfmakeraw(&mut raw);
        termios::tcsetattr(fd.as_fd(), SetArg::TCSANOW, &raw)?;
        tracing::trace!("terminal in raw mode");
        Ok(Self { fd, saved })
    }
}

impl<F: AsFd> Drop for RawMode<F> {
    fn drop(&mut self) {
        match termios::tcsetattr(self.fd.as_fd(), SetArg::TCSANOW, &self.saved) {
            Ok(()) => tracing::trace!("terminal mode restored"),
            Err(e) => tracing::warn!(error = %e, "failed to restore terminal mode"),
        }
    }
}

/// Descriptor switched to non-blocking; the saved flags come back on drop.
pub struct NonBlocking<F: AsRawFd> {
    fd: F,
    saved: OFlag,
}

impl<F: AsRawFd> NonBlocking<F> {
    pub fn enable(fd: F) -> nix::Result<Self> {
        let saved = nbio::set_non_blocking(&fd)?;
        Ok(Self { fd, saved })
    }
}

impl<F: AsRawFd> Drop for NonBlocking<F> {
    fn drop(&mut self) {
        if let Err(e) = nbio::restore_flags(&self.fd, self.saved) {
            tracing::warn!(error = %e, "failed to restore descriptor flags");
        }
    }
}

#[cfg(test)]
#[path = "terminal_tests.rs"]
mod tests;
