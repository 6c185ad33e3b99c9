// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A named filesystem path exported to child processes as their prefix.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prefix {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub path: String,
    /// Opaque identifier assigned at creation, never changed afterwards.
    #[serde(rename = "uuid", default, skip_serializing_if = "String::is_empty")]
    pub id: String,
}

impl Prefix {
    /// Create a prefix with a freshly generated identifier.
    pub fn new(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            id: Uuid::new_v4().to_string(),
        }
    }
}

#[cfg(test)]
#[path = "prefix_tests.rs"]
mod tests;
