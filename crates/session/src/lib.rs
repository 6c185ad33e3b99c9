// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Interactive pseudo-terminal sessions.
//!
//! [`run`] starts one command on a fresh PTY with an environment overlay,
//! relays the caller's terminal to it (raw mode, window size, input and
//! output) and returns the command's exit code once its output ends.

mod command;
mod error;
mod nbio;
mod pty;
mod session;
mod signals;
mod stdio;
mod terminal;

pub use command::Command;
pub use error::SessionError;
pub use session::{run, Config, DEFAULT_DRAIN_GRACE};
