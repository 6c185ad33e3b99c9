// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(deprecated)] // Command::cargo_bin is deprecated but still functional
#![allow(dead_code)]

//! Shared helpers for binary-level tests.

use std::path::PathBuf;

use assert_cmd::Command;
use tempfile::TempDir;

/// A throwaway config location for one test.
pub struct Sandbox {
    dir: TempDir,
}

impl Sandbox {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    /// Store file; lives in a subdirectory so creation of parents is exercised.
    pub fn config(&self) -> PathBuf {
        self.dir.path().join("wpm").join("wpm.json")
    }

    /// `wpm --config <sandbox> <args>` with a quiet, fast environment.
    pub fn wpm(&self, args: &[&str]) -> Command {
        let mut cmd = Command::cargo_bin("wpm").unwrap();
        cmd.arg("--config")
            .arg(self.config())
            .args(args)
            .env_remove("WPM_CONFIG")
            .env_remove("WPM_LOG")
            .env("WPM_DRAIN_GRACE_MS", "0");
        cmd
    }

    pub fn add(&self, name: &str, path: &str) {
        self.wpm(&["manage", "add", "--name", name, "--path", path])
            .assert()
            .success();
    }

    pub fn listing(&self) -> String {
        let output = self.wpm(&["list", "-p"]).output().unwrap();
        assert!(output.status.success());
        String::from_utf8(output.stdout).unwrap()
    }
}
