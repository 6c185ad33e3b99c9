// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `wpm manage`: add, remove, rename and re-path prefixes.
//!
//! With a subcommand the change is applied directly. Without one, the user
//! picks a prefix and an action from menus until they back out.

use std::io::Write;

use anyhow::Result;
use wpm_store::PrefixStore;

use crate::cli::ManageCommand;
use crate::menu::Prompter;
use crate::output_diagnostic::print_warning;

/// Actions offered for a selected prefix.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Rename,
    Remove,
    ChangePath,
    Cancel,
}

impl Action {
    pub const ALL: [Action; 4] = [
        Action::Rename,
        Action::Remove,
        Action::ChangePath,
        Action::Cancel,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Action::Rename => "rename",
            Action::Remove => "remove",
            Action::ChangePath => "change path",
            Action::Cancel => "cancel",
        }
    }
}

const CONFIRM: [&str; 2] = ["no", "yes"];

/// Apply one non-interactive management command.
pub fn run_command(store: &dyn PrefixStore, command: &ManageCommand) -> Result<()> {
    match command {
        ManageCommand::Add { name, path } => {
            if has_prefix(store, name)? {
                print_warning(format_args!(
                    "a prefix named '{name}' already exists; lookups will keep using the first one"
                ));
            }
            store.add(name, path)?;
        }
        ManageCommand::Remove { name } => {
            warn_if_missing(store, name)?;
            store.remove(name)?;
        }
        ManageCommand::Rename { name, to } => {
            warn_if_missing(store, name)?;
            store.rename(name, to)?;
        }
        ManageCommand::Path { name, path } => {
            warn_if_missing(store, name)?;
            store.change_path(name, path)?;
        }
    }
    Ok(())
}

fn has_prefix(store: &dyn PrefixStore, name: &str) -> Result<bool> {
    Ok(store.list()?.iter().any(|p| p.name == name))
}

fn warn_if_missing(store: &dyn PrefixStore, name: &str) -> Result<()> {
    if !has_prefix(store, name)? {
        print_warning(format_args!("no prefix named '{name}'; nothing changed"));
    }
    Ok(())
}

/// Menu-driven management loop. Returns when the user backs out of a prompt
/// or the store is empty.
pub fn run_interactive<W: Write>(
    store: &dyn PrefixStore,
    prompter: &mut dyn Prompter,
    out: &mut W,
) -> Result<()> {
    let actions: Vec<String> = Action::ALL.iter().map(|a| a.label().to_string()).collect();
    let confirm: Vec<String> = CONFIRM.iter().map(|s| s.to_string()).collect();

    loop {
        let prefixes = store.list()?;
        if prefixes.is_empty() {
            writeln!(
                out,
                "No prefixes yet. Add one with: wpm manage add --name <name> --path <path>"
            )?;
            return Ok(());
        }

        let names: Vec<String> = prefixes.iter().map(|p| p.name.clone()).collect();
        let Some(selected) = prompter
            .select("Select prefix", &names)?
            .and_then(|i| prefixes.get(i))
        else {
            return Ok(());
        };

        let Some(action) = prompter
            .select("Select action", &actions)?
            .and_then(|i| Action::ALL.get(i).copied())
        else {
            return Ok(());
        };

        match action {
            Action::Rename => {
                let Some(new_name) = prompter.input("Prefix name:", "")? else {
                    return Ok(());
                };
                let new_name = new_name.trim();
                if !new_name.is_empty() {
                    store.rename(&selected.name, new_name)?;
                }
            }
            Action::ChangePath => {
                let placeholder = format!("Old path: {}", selected.path);
                let Some(new_path) = prompter.input("Enter desired new path", &placeholder)? else {
                    return Ok(());
                };
                let new_path = new_path.trim();
                if !new_path.is_empty() {
                    store.change_path(&selected.name, new_path)?;
                }
            }
            Action::Remove => {
                let question = format!("Are you sure you want to delete: {}?", selected.name);
                match prompter.select(&question, &confirm)? {
                    Some(1) => store.remove(&selected.name)?,
                    Some(_) => {}
                    None => return Ok(()),
                }
            }
            Action::Cancel => {}
        }
    }
}

#[cfg(test)]
#[path = "manage_tests.rs"]
mod tests;
