// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The prefix store interface.

use crate::{Prefix, Result, StoreError};

/// A persisted, ordered list of prefixes.
///
/// Implementors only provide whole-list [`load`](PrefixStore::load) and
/// [`save`](PrefixStore::save). Every other operation re-reads the list,
/// edits it and writes it back.
pub trait PrefixStore {
    /// Read the full list in storage order.
    fn load(&self) -> Result<Vec<Prefix>>;

    /// Replace the full list.
    fn save(&self, prefixes: &[Prefix]) -> Result<()>;

    /// All prefixes in storage order.
    fn list(&self) -> Result<Vec<Prefix>> {
        self.load()
    }

    /// First prefix named `name`.
    fn find(&self, name: &str) -> Result<Prefix> {
        self.load()?
            .into_iter()
            .find(|p| p.name == name)
            .ok_or_else(|| StoreError::NotFound(name.to_string()))
    }

    /// Append a new prefix with a fresh identifier.
    ///
    /// Existing prefixes with the same name are left alone; lookups keep
    /// returning whichever comes first.
    fn add(&self, name: &str, path: &str) -> Result<Prefix> {
        let prefix = Prefix::new(name, path);
        let mut prefixes = self.load()?;
        prefixes.push(prefix.clone());
        self.save(&prefixes)?;
        tracing::debug!(name, path, id = %prefix.id, "added prefix");
        Ok(prefix)
    }

    /// Drop every prefix named `name`.
    fn remove(&self, name: &str) -> Result<()> {
        let mut prefixes = self.load()?;
        prefixes.retain(|p| p.name != name);
        self.save(&prefixes)?;
        tracing::debug!(name, "removed prefix");
        Ok(())
    }

    /// Rename every prefix named `old_name`.
    fn rename(&self, old_name: &str, new_name: &str) -> Result<()> {
        update_matching(self, old_name, |p| p.name = new_name.to_string())?;
        tracing::debug!(old_name, new_name, "renamed prefix");
        Ok(())
    }

    /// Point every prefix named `name` at `new_path`.
    fn change_path(&self, name: &str, new_path: &str) -> Result<()> {
        update_matching(self, name, |p| p.path = new_path.to_string())?;
        tracing::debug!(name, new_path, "changed prefix path");
        Ok(())
    }
}

/// Apply `edit` to every prefix named `name` and persist the list.
fn update_matching<S, F>(store: &S, name: &str, edit: F) -> Result<()>
where
    S: PrefixStore + ?Sized,
    F: FnMut(&mut Prefix),
{
    let mut prefixes = store.load()?;
    prefixes.iter_mut().filter(|p| p.name == name).for_each(edit);
    store.save(&prefixes)
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;
