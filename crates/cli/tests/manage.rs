// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

//! `wpm manage` and `wpm list` against a real store file.

mod support;

use predicates::prelude::*;
use serde_json::Value;
use support::Sandbox;

#[test]
fn add_then_list_with_paths() {
    let sandbox = Sandbox::new();
    sandbox.add("dev", "/opt/dev");

    sandbox
        .wpm(&["list", "-p"])
        .assert()
        .success()
        .stdout("dev,/opt/dev\n");
}

#[test]
fn list_aliases_print_names() {
    let sandbox = Sandbox::new();
    sandbox.add("steam", "/games/steam");
    sandbox.add("dev", "/opt/dev");

    for alias in ["list", "ls", "l"] {
        sandbox
            .wpm(&[alias])
            .assert()
            .success()
            .stdout("steam\ndev\n");
    }
}

#[test]
fn first_run_creates_empty_store() {
    let sandbox = Sandbox::new();

    sandbox.wpm(&["list"]).assert().success().stdout("");

    let doc: Value =
        serde_json::from_str(&std::fs::read_to_string(sandbox.config()).unwrap()).unwrap();
    assert_eq!(doc["prefixes"], Value::Array(vec![]));
}

#[test]
fn stored_record_has_uuid() {
    let sandbox = Sandbox::new();
    sandbox.add("dev", "/opt/dev");

    let doc: Value =
        serde_json::from_str(&std::fs::read_to_string(sandbox.config()).unwrap()).unwrap();
    let record = &doc["prefixes"][0];
    assert_eq!(record["name"], "dev");
    assert_eq!(record["path"], "/opt/dev");
    assert_eq!(record["uuid"].as_str().unwrap().len(), 36);
}

#[test]
fn add_alias_and_duplicate_warning() {
    let sandbox = Sandbox::new();
    sandbox
        .wpm(&["manage", "a", "-n", "dev", "-p", "/opt/dev"])
        .assert()
        .success()
        .stderr("");

    sandbox
        .wpm(&["manage", "a", "-n", "dev", "-p", "/other"])
        .assert()
        .success()
        .stderr(predicate::str::contains("already exists"));

    assert_eq!(sandbox.listing(), "dev,/opt/dev\ndev,/other\n");
}

#[test]
fn remove_drops_prefix() {
    let sandbox = Sandbox::new();
    sandbox.add("steam", "/games/steam");
    sandbox.add("dev", "/opt/dev");

    sandbox
        .wpm(&["manage", "remove", "--name", "steam"])
        .assert()
        .success();

    assert_eq!(sandbox.listing(), "dev,/opt/dev\n");
}

#[test]
fn remove_missing_warns_and_keeps_list() {
    let sandbox = Sandbox::new();
    sandbox.add("dev", "/opt/dev");

    sandbox
        .wpm(&["manage", "r", "-n", "ghost"])
        .assert()
        .success()
        .stderr(predicate::str::contains("no prefix named 'ghost'"));

    assert_eq!(sandbox.listing(), "dev,/opt/dev\n");
}

#[test]
fn rename_and_change_path() {
    let sandbox = Sandbox::new();
    sandbox.add("dev", "/opt/dev");

    sandbox
        .wpm(&["manage", "rename", "-n", "dev", "-t", "work"])
        .assert()
        .success();
    sandbox
        .wpm(&["manage", "path", "-n", "work", "-p", "/opt/work"])
        .assert()
        .success();

    assert_eq!(sandbox.listing(), "work,/opt/work\n");
}

#[test]
fn missing_required_flag_is_usage_error() {
    let sandbox = Sandbox::new();

    sandbox
        .wpm(&["manage", "add", "--name", "dev"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--path"));
}

#[test]
fn corrupt_store_is_reported() {
    let sandbox = Sandbox::new();
    std::fs::create_dir_all(sandbox.config().parent().unwrap()).unwrap();
    std::fs::write(sandbox.config(), "{ not json").unwrap();

    sandbox
        .wpm(&["list"])
        .assert()
        .code(1)
        .stderr(predicate::str::starts_with("Error:"));
}

#[test]
fn completions_script_needs_no_store() {
    let sandbox = Sandbox::new();

    sandbox
        .wpm(&["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("wpm"));

    assert!(!sandbox.config().exists());
}
