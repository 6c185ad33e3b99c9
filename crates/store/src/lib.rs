// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Persisted list of named wine prefixes.
//!
//! Every operation reads the whole list, changes it in memory and writes the
//! whole list back. There is no indexing and no partial update; the store is
//! meant for a single user driving a single process.

mod error;
mod file;
mod memory;
mod prefix;
mod store;

pub use error::StoreError;
pub use file::JsonFileStore;
pub use memory::MemoryStore;
pub use prefix::Prefix;
pub use store::PrefixStore;

/// Result alias for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
