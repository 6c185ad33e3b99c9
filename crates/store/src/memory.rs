// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! In-memory prefix store.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::{Prefix, PrefixStore, Result};

/// Prefix store kept entirely in memory.
///
/// Clones share the same list.
#[derive(Clone, Default)]
pub struct MemoryStore {
    prefixes: Arc<Mutex<Vec<Prefix>>>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store seeded with `prefixes`
    pub fn with_prefixes(prefixes: Vec<Prefix>) -> Self {
        Self {
            prefixes: Arc::new(Mutex::new(prefixes)),
        }
    }

    /// Number of stored prefixes
    pub fn len(&self) -> usize {
        self.prefixes.lock().len()
    }

    /// Check if the store is empty
    pub fn is_empty(&self) -> bool {
        self.prefixes.lock().is_empty()
    }
}

impl PrefixStore for MemoryStore {
    fn load(&self) -> Result<Vec<Prefix>> {
        Ok(self.prefixes.lock().clone())
    }

    fn save(&self, prefixes: &[Prefix]) -> Result<()> {
        *self.prefixes.lock() = prefixes.to_vec();
        Ok(())
    }
}

#[cfg(test)]
#[path = "memory_tests.rs"]
mod tests;
