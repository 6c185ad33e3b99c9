// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use super::*;
use std::os::unix::fs::PermissionsExt;
use tempfile::TempDir;

fn os(pairs: &[(&str, &str)]) -> Vec<(OsString, OsString)> {
    pairs
        .iter()
        .map(|(k, v)| (OsString::from(k), OsString::from(v)))
        .collect()
}

#[test]
fn merge_env_overrides_in_place() {
    let merged = merge_env(
        os(&[("HOME", "/home/me"), ("WINEPREFIX", "/old"), ("TERM", "xterm")]),
        &[("WINEPREFIX".into(), "/opt/dev".into())],
    );
    assert_eq!(
        merged,
        os(&[("HOME", "/home/me"), ("WINEPREFIX", "/opt/dev"), ("TERM", "xterm")])
    );
}

#[test]
fn merge_env_appends_new_keys() {
    let merged = merge_env(
        os(&[("HOME", "/home/me")]),
        &[("WINEPREFIX".into(), "/opt/dev".into())],
    );
    assert_eq!(merged, os(&[("HOME", "/home/me"), ("WINEPREFIX", "/opt/dev")]));
}

#[test]
fn resolve_program_keeps_paths_with_slash() {
    assert_eq!(
        resolve_program("./run.sh", Some(OsStr::new("/usr/bin"))),
        PathBuf::from("./run.sh")
    );
}

#[test]
fn resolve_program_searches_path_in_order() {
    let first = TempDir::new().unwrap();
    let second = TempDir::new().unwrap();
    for dir in [&first, &second] {
        let tool = dir.path().join("tool");
        std::fs::write(&tool, "#!/bin/sh\n").unwrap();
        std::fs::set_permissions(&tool, std::fs::Permissions::from_mode(0o755)).unwrap();
    }
    let search = std::env::join_paths([first.path(), second.path()]).unwrap();

    assert_eq!(
        resolve_program("tool", Some(search.as_os_str())),
        first.path().join("tool")
    );
}

#[test]
fn resolve_program_skips_non_executables() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("tool"), "data").unwrap();
    std::fs::set_permissions(
        dir.path().join("tool"),
        std::fs::Permissions::from_mode(0o644),
    )
    .unwrap();

    assert_eq!(
        resolve_program("tool", Some(dir.path().as_os_str())),
        PathBuf::from("tool")
    );
}

#[test]
fn resolve_program_without_search_path_is_unchanged() {
    assert_eq!(resolve_program("sh", None), PathBuf::from("sh"));
}

#[test]
fn prepare_builds_argv_with_program_first() {
    let exec = Exec::prepare(&Command::new("sh").args(["-c", "echo hi"])).unwrap();
    let argv: Vec<_> = exec.argv.iter().map(|a| a.to_str().unwrap()).collect();
    assert_eq!(argv, ["sh", "-c", "echo hi"]);
}

#[test]
fn prepare_exports_overlay() {
    let exec = Exec::prepare(&Command::new("sh").env("WPM_TEST_OVERLAY", "/opt/dev")).unwrap();
    assert!(exec
        .envp
        .iter()
        .any(|e| e.to_bytes() == b"WPM_TEST_OVERLAY=/opt/dev"));
}

#[test]
fn prepare_rejects_nul_bytes() {
    let err = Exec::prepare(&Command::new("sh").arg("a\0b")).unwrap_err();
    assert!(matches!(err, SessionError::InvalidCommand(_)));
}

#[test]
fn prepare_rejects_empty_program() {
    let err = Exec::prepare(&Command::default()).unwrap_err();
    assert!(matches!(err, SessionError::InvalidCommand(_)));
}
