// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Subcommand implementations.
//!
//! Each command receives the prefix store explicitly and re-reads it before
//! acting.

pub mod completions;
pub mod exec;
pub mod list;
pub mod manage;
