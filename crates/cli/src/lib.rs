// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Wine prefix manager
//!
//! Keeps a named set of wine prefixes in a JSON file and runs commands inside
//! a pseudo-terminal with `WINEPREFIX` pointing at the chosen one.

pub mod cli;
pub mod command_line;
pub mod commands;
pub mod config;
pub mod env;
pub mod logging;
pub mod menu;
pub mod output_diagnostic;

use std::io;

use anyhow::Result;

use crate::cli::{Cli, Commands};
use crate::menu::TerminalPrompter;

/// Dispatch a parsed command line. Returns the process exit code.
pub async fn run(cli: Cli) -> Result<i32> {
    let config_file = cli.config;
    let open_store = || config::open_store(config_file.as_deref());

    match cli.command {
        Commands::Exec(args) => {
            let store = open_store()?;
            commands::exec::run(&store, &args.prefix, &args.command, config::drain_grace()).await
        }
        Commands::List(args) => {
            commands::list::run(&open_store()?, args.show_path, &mut io::stdout().lock())?;
            Ok(0)
        }
        Commands::Manage(args) => {
            let store = open_store()?;
            match args.command {
                Some(command) => commands::manage::run_command(&store, &command)?,
                None => {
                    let mut prompter = TerminalPrompter::new(args.alt_screen);
                    commands::manage::run_interactive(&store, &mut prompter, &mut io::stdout())?;
                }
            }
            Ok(0)
        }
        Commands::Completions(args) => {
            commands::completions::generate(args.shell, &mut io::stdout());
            Ok(0)
        }
    }
}
