// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! JSON file backed prefix store.
//!
//! The file holds a single object whose `prefixes` key is the list. Other
//! top-level keys are carried through rewrites untouched.

use std::io::Write;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;

use crate::{Prefix, PrefixStore, Result, StoreError};

#[derive(Debug, Default, Serialize, Deserialize)]
struct Document {
    /// `null` is accepted and read as an empty list.
    #[serde(default)]
    prefixes: Option<Vec<Prefix>>,
    #[serde(flatten)]
    other: serde_json::Map<String, serde_json::Value>,
}

/// Prefix store persisted as a JSON document on disk.
#[derive(Clone, Debug)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Use the document at `path`. The file is not touched until the first
    /// read or write.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Use the document at `path`, creating it with an empty list (and any
    /// missing parent directories) when it does not exist yet.
    pub fn open_or_create(path: impl Into<PathBuf>) -> Result<Self> {
        let store = Self::new(path);
        if !store.path.exists() {
            create_parent(&store.path)?;
            store.write_document(&Document {
                prefixes: Some(Vec::new()),
                other: serde_json::Map::new(),
            })?;
            tracing::debug!(path = %store.path.display(), "created prefix store");
        }
        Ok(store)
    }

    fn read_document(&self) -> Result<Document> {
        let content = std::fs::read_to_string(&self.path).map_err(|source| StoreError::Read {
            path: self.path.clone(),
            source,
        })?;
        if content.trim().is_empty() {
            return Ok(Document::default());
        }
        serde_json::from_str(&content).map_err(|source| StoreError::Parse {
            path: self.path.clone(),
            source,
        })
    }

    /// Replace the document through a temporary file next to it so a failed
    /// write never leaves a truncated document behind.
    ///
    /// A symlinked document is written through the link: the temporary file
    /// goes next to the resolved target and replaces it, keeping its mode.
    fn write_document(&self, document: &Document) -> Result<()> {
        let mut json = serde_json::to_string_pretty(document)?;
        json.push('\n');

        let write_err = |source: std::io::Error| StoreError::Write {
            path: self.path.clone(),
            source,
        };
        let existing = match std::fs::canonicalize(&self.path) {
            Ok(target) => {
                let permissions = std::fs::metadata(&target).map_err(write_err)?.permissions();
                Some((target, permissions))
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => None,
            Err(e) => return Err(write_err(e)),
        };
        let target = existing
            .as_ref()
            .map_or(self.path.as_path(), |(target, _)| target.as_path());
        let dir = match target.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut tmp = NamedTempFile::new_in(dir).map_err(write_err)?;
        tmp.write_all(json.as_bytes()).map_err(write_err)?;
        if let Some((_, permissions)) = existing.as_ref() {
            tmp.as_file()
                .set_permissions(permissions.clone())
                .map_err(write_err)?;
        }
        tmp.persist(target).map_err(|e| write_err(e.error))?;
        if target != self.path.as_path() {
            tracing::trace!(target = %target.display(), "wrote through symlink");
        }
        Ok(())
    }
}

impl PrefixStore for JsonFileStore {
    fn load(&self) -> Result<Vec<Prefix>> {
        let prefixes = self.read_document()?.prefixes.unwrap_or_default();
        tracing::trace!(path = %self.path.display(), count = prefixes.len(), "loaded prefixes");
        Ok(prefixes)
    }

    fn save(&self, prefixes: &[Prefix]) -> Result<()> {
        let mut document = if self.path.exists() {
            self.read_document()?
        } else {
            Document::default()
        };
        document.prefixes = Some(prefixes.to_vec());
        self.write_document(&document)?;
        tracing::trace!(path = %self.path.display(), count = prefixes.len(), "saved prefixes");
        Ok(())
    }
}

fn create_parent(path: &Path) -> Result<()> {
    let Some(parent) = path.parent() else {
        return Ok(());
    };
    if parent.as_os_str().is_empty() || parent.exists() {
        return Ok(());
    }

    let mut builder = std::fs::DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(0o750);
    }
    builder.create(parent).map_err(|source| StoreError::Write {
        path: parent.to_path_buf(),
        source,
    })
}

#[cfg(test)]
#[path = "file_tests.rs"]
mod tests;
