// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

//! `wpm exec` attached to a terminal: size pass-through and mode restore.

mod support;

use std::io::Read;
use std::process::{Command, Stdio};

use nix::pty::{openpty, Winsize};
use nix::sys::termios::{tcgetattr, LocalFlags};
use support::Sandbox;

fn canonical<F: std::os::fd::AsFd>(fd: F) -> bool {
    tcgetattr(fd)
        .unwrap()
        .local_flags
        .contains(LocalFlags::ICANON)
}

#[test]
fn child_sees_outer_size_and_mode_is_restored() {
    let sandbox = Sandbox::new();
    sandbox.add("dev", "/opt/dev");

    let outer = openpty(
        Some(&Winsize {
            ws_row: 40,
            ws_col: 120,
            ws_xpixel: 0,
            ws_ypixel: 0,
        }),
        None,
    )
    .unwrap();
    assert!(canonical(&outer.slave));

    let status = Command::new(env!("CARGO_BIN_EXE_wpm"))
        .arg("--config")
        .arg(sandbox.config())
        .args(["exec", "-p", "dev", "--", "stty", "size;", "echo", "$WINEPREFIX"])
        .env_remove("WPM_LOG")
        .env("WPM_DRAIN_GRACE_MS", "0")
        .stdin(Stdio::from(outer.slave.try_clone().unwrap()))
        .stdout(Stdio::from(outer.slave.try_clone().unwrap()))
        .stderr(Stdio::from(outer.slave.try_clone().unwrap()))
        .status()
        .unwrap();

    assert!(status.success(), "wpm exited with {status}");
    assert!(canonical(&outer.slave), "terminal left in raw mode");

    drop(outer.slave);
    let mut output = Vec::new();
    let mut master = std::fs::File::from(outer.master);
    let mut buf = [0u8; 1024];
    // Once every slave descriptor is closed the master reports EIO.
    while let Ok(n) = master.read(&mut buf) {
        if n == 0 {
            break;
        }
        output.extend_from_slice(&buf[..n]);
    }
    let output = String::from_utf8_lossy(&output);
    assert!(output.contains("40 120"), "output was {output:?}");
    assert!(output.contains("/opt/dev"), "output was {output:?}");
}
