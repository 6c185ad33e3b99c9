// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Tracing setup.

use std::io::IsTerminal;

use tracing_subscriber::EnvFilter;

use crate::env;

/// Filter used when `WPM_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "warn";

/// Install the stderr subscriber. Safe to call more than once.
pub fn init() {
    let filter = env::log_filter()
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .try_init();
}
