// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Locating the prefix store and reading runtime settings.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use wpm_session::DEFAULT_DRAIN_GRACE;
use wpm_store::JsonFileStore;

use crate::env;

/// Directory under the user config directory holding the store.
pub const APP_DIR: &str = "wpm";

/// File name of the store document.
pub const CONFIG_FILE: &str = "wpm.json";

/// Default store location: `<user config dir>/wpm/wpm.json`.
pub fn default_config_path() -> Result<PathBuf> {
    let base = dirs::config_dir().context("could not determine the user config directory")?;
    Ok(store_path_in(&base))
}

fn store_path_in(config_dir: &Path) -> PathBuf {
    config_dir.join(APP_DIR).join(CONFIG_FILE)
}

/// The explicit path when given, the default location otherwise.
pub fn config_path(explicit: Option<&Path>) -> Result<PathBuf> {
    match explicit {
        Some(path) => Ok(path.to_path_buf()),
        None => default_config_path(),
    }
}

/// Open the prefix store, creating an empty one on first run.
pub fn open_store(explicit: Option<&Path>) -> Result<JsonFileStore> {
    let path = config_path(explicit)?;
    let store = JsonFileStore::open_or_create(&path)
        .with_context(|| format!("could not open prefix store at {}", path.display()))?;
    tracing::debug!(path = %path.display(), "using prefix store");
    Ok(store)
}

/// Pause between end of command output and closing the pty.
pub fn drain_grace() -> Duration {
    env::drain_grace_ms()
        .map(Duration::from_millis)
        .unwrap_or(DEFAULT_DRAIN_GRACE)
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
