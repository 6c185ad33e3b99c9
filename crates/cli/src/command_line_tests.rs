// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use yare::parameterized;

#[parameterized(
    single = { &["winecfg"], "winecfg" },
    plain_args = { &["wine", "setup.exe", "/silent"], "wine setup.exe /silent" },
    spaced_arg = { &["wine", "C:\\Program Files\\Game\\game.exe", "-window"], "wine \"C:\\Program Files\\Game\\game.exe\" -window" },
    tab = { &["echo", "a\tb"], "echo \"a\tb\"" },
    variables_untouched = { &["echo", "$WINEPREFIX"], "echo $WINEPREFIX" },
)]
fn builds_line(args: &[&str], expected: &str) {
    assert_eq!(shell_line(args), expected);
}

#[test]
fn empty_args_give_empty_line() {
    let args: [&str; 0] = [];
    assert_eq!(shell_line(&args), "");
}

#[test]
fn accepts_owned_strings() {
    let args = vec!["echo".to_string(), "two words".to_string()];
    assert_eq!(shell_line(&args), "echo \"two words\"");
}
