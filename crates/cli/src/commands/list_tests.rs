// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use super::*;
use rstest::rstest;
use wpm_store::MemoryStore;

fn listing(store: &MemoryStore, show_path: bool) -> String {
    let mut out = Vec::new();
    run(store, show_path, &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[rstest]
#[case::names(false, "steam\ndev\n")]
#[case::with_paths(true, "steam,/games/steam\ndev,/opt/dev\n")]
fn lists_in_storage_order(#[case] show_path: bool, #[case] expected: &str) {
    let store = MemoryStore::new();
    store.add("steam", "/games/steam").unwrap();
    store.add("dev", "/opt/dev").unwrap();

    assert_eq!(listing(&store, show_path), expected);
}

#[test]
fn empty_store_prints_nothing() {
    assert_eq!(listing(&MemoryStore::new(), true), "");
}

#[test]
fn duplicates_are_listed_each_time() {
    let prefixes = [Prefix::new("dev", "/a"), Prefix::new("dev", "/b")];
    let mut out = Vec::new();

    write_list(&mut out, &prefixes, true).unwrap();

    assert_eq!(String::from_utf8(out).unwrap(), "dev,/a\ndev,/b\n");
}
