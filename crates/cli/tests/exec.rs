// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

//! `wpm exec` end to end. Stdin is an empty pipe, so no raw mode or resize.

mod support;

use predicates::prelude::*;
use support::Sandbox;

#[test]
fn unknown_prefix_fails() {
    let sandbox = Sandbox::new();
    sandbox.add("dev", "/opt/dev");

    sandbox
        .wpm(&["exec", "-p", "ghost", "--", "true"])
        .write_stdin("")
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            "could not find prefix with name: ghost",
        ));
}

#[test]
fn exports_prefix_path() {
    let sandbox = Sandbox::new();
    sandbox.add("dev", "/opt/dev");

    sandbox
        .wpm(&["exec", "-p", "dev", "--", "echo", "prefix=$WINEPREFIX"])
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("prefix=/opt/dev"));
}

#[test]
fn propagates_exit_code() {
    let sandbox = Sandbox::new();
    sandbox.add("dev", "/opt/dev");

    sandbox
        .wpm(&["exec", "--prefix", "dev", "exit", "7"])
        .write_stdin("")
        .assert()
        .code(7);
}

#[test]
fn spaced_argument_stays_one_word() {
    let sandbox = Sandbox::new();
    sandbox.add("dev", "/opt/dev");

    sandbox
        .wpm(&["exec", "-p", "dev", "--", "echo", "a  b"])
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("a  b"));
}

#[test]
fn command_is_required() {
    let sandbox = Sandbox::new();
    sandbox.add("dev", "/opt/dev");

    sandbox.wpm(&["exec", "-p", "dev"]).assert().failure();
}
