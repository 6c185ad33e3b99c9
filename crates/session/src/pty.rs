// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! PTY (pseudo-terminal) handling.
//!
//! Creates a PTY pair, spawns the child process on the slave side, and
//! provides async read/write to the master side.

use std::os::fd::{AsRawFd, OwnedFd, RawFd};

use nix::pty::{forkpty, Winsize};
use nix::sys::signal::{signal, SigHandler, Signal};
use nix::sys::wait::{waitpid, WaitStatus};
use nix::unistd::{ForkResult, Pid};
use tokio::io::unix::AsyncFd;

use crate::command::Exec;
use crate::{terminal, SessionError};

/// Master side of the PTY.
pub struct Pty {
    master_fd: AsyncFd<OwnedFd>,
}

/// The process attached to the slave side. Copies are handles to the same
/// process; only one of them should be waited on.
#[derive(Clone, Debug)]
pub struct Child {
    pid: Pid,
}

/// Spawn a prepared command in a new PTY.
pub(crate) fn spawn(exec: &Exec, size: Option<Winsize>) -> Result<(Pty, Child), SessionError> {
    // SAFETY: forkpty creates a new PTY and forks. The child only resets a
    // signal disposition and calls execve or _exit with data allocated
    // before the fork.
    let result = unsafe { forkpty(size.as_ref(), None) }.map_err(SessionError::Spawn)?;

    match result.fork_result {
        ForkResult::Child => {
            // SAFETY: Restoring SIGPIPE to default is safe in the child process
            // before exec.
            unsafe { signal(Signal::SIGPIPE, SigHandler::SigDfl).ok() };
            let _ = nix::unistd::execve(&exec.path, exec.argv.as_slice(), exec.envp.as_slice());
            let _ = nix::unistd::write(std::io::stderr(), &exec.failure_message);
            // SAFETY: _exit skips atexit handlers and destructors inherited
            // from the parent, which must not run in the forked child.
            unsafe { nix::libc::_exit(127) }
        }
        ForkResult::Parent { child } => {
            let master = result.master;
            crate::nbio::set_non_blocking(&master)?;
            let master_fd = AsyncFd::new(master)?;
            tracing::debug!(pid = child.as_raw(), "spawned command in pty");

            Ok((Pty { master_fd }, Child { pid: child }))
        }
    }
}

impl Pty {
    /// Read output from the PTY (child's stdout/stderr). Returns 0 once the
    /// slave side is closed.
    pub async fn read(&self, buf: &mut [u8]) -> std::io::Result<usize> {
        loop {
            let mut guard = self.master_fd.readable().await?;
            match crate::nbio::read(self.master_fd.get_ref(), buf)? {
                Some(n) => return Ok(n),
                None => guard.clear_ready(),
            }
        }
    }

    /// Write input to the PTY (sends to child's stdin).
    pub async fn write(&self, data: &[u8]) -> std::io::Result<()> {
        let mut written = 0;
        while written < data.len() {
            let mut guard = self.master_fd.writable().await?;
            match crate::nbio::write(self.master_fd.get_ref(), &data[written..])? {
                Some(n) => written += n,
                None => guard.clear_ready(),
            }
        }
        Ok(())
    }

    /// Set the PTY window size. The kernel notifies the child with SIGWINCH.
    pub fn resize(&self, size: &Winsize) -> nix::Result<()> {
        terminal::set_window_size(self, size)
    }
}

impl AsRawFd for Pty {
    fn as_raw_fd(&self) -> RawFd {
        self.master_fd.as_raw_fd()
    }
}

impl Child {
    pub fn pid(&self) -> Pid {
        self.pid
    }

    /// Send a signal to the child process.
    pub fn kill(&self, signal: Signal) -> nix::Result<()> {
        nix::sys::signal::kill(self.pid, signal)
    }

    /// Reap the child process and return its exit code.
    pub async fn wait(self) -> Result<i32, SessionError> {
        let pid = self.pid;
        let status = tokio::task::spawn_blocking(move || waitpid(pid, None))
            .await
            .map_err(|e| SessionError::Io(e.into()))?
            .map_err(SessionError::Wait)?;
        let code = exit_code(status);
        tracing::debug!(pid = pid.as_raw(), code, "command exited");
        Ok(code)
    }
}

/// Shell-style exit code: the status for a normal exit, 128 + signal number
/// for a signal death.
pub(crate) fn exit_code(status: WaitStatus) -> i32 {
    match status {
        WaitStatus::Exited(_, code) => code,
        WaitStatus::Signaled(_, sig, _) => 128 + sig as i32,
        _ => 1,
    }
}

#[cfg(test)]
#[path = "pty_tests.rs"]
mod tests;
