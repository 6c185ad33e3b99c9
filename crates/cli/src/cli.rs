// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_complete::engine::ArgValueCompleter;
use clap_complete::Shell;

use crate::commands::completions::complete_prefix;

/// Wine prefix management CLI
#[derive(Parser, Debug)]
#[command(name = "wpm", version, about = "Wine prefix management CLI")]
pub struct Cli {
    /// Config file (default is <user config dir>/wpm/wpm.json)
    #[arg(long, global = true, env = crate::env::WPM_CONFIG, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Execute a command with a prefix (--prefix <prefix>)
    Exec(ExecArgs),

    /// List all prefixes (-p to show paths)
    #[command(visible_aliases = ["ls", "l"])]
    List(ListArgs),

    /// Manage prefixes; interactive when no subcommand is given
    Manage(ManageArgs),

    /// Print a shell completion script
    Completions(CompletionsArgs),
}

#[derive(Args, Debug)]
pub struct ExecArgs {
    /// Prefix to use
    #[arg(short, long, add = ArgValueCompleter::new(complete_prefix))]
    pub prefix: String,

    /// Command line to run through `sh -c`
    #[arg(
        value_name = "COMMAND",
        required = true,
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub command: Vec<String>,
}

#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: Shell,
}

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Show path when listing prefixes
    #[arg(short = 'p', long = "path")]
    pub show_path: bool,
}

#[derive(Args, Debug)]
pub struct ManageArgs {
    /// Use alt screen for interactive menu
    #[arg(short, long)]
    pub alt_screen: bool,

    #[command(subcommand)]
    pub command: Option<ManageCommand>,
}

#[derive(Subcommand, Debug)]
pub enum ManageCommand {
    /// add --name <name> --path <path>
    #[command(visible_alias = "a")]
    Add {
        /// Name of prefix to add
        #[arg(short, long)]
        name: String,
        /// Path of prefix to add
        #[arg(short, long)]
        path: String,
    },

    /// remove --name <name>
    #[command(visible_alias = "r")]
    Remove {
        /// Name of prefix to remove
        #[arg(short, long)]
        name: String,
    },

    /// rename --name <name> --to <new name>
    Rename {
        /// Current name of the prefix
        #[arg(short, long)]
        name: String,
        /// New name for the prefix
        #[arg(short, long = "to")]
        to: String,
    },

    /// path --name <name> --path <new path>
    Path {
        /// Name of the prefix to move
        #[arg(short, long)]
        name: String,
        /// New path for the prefix
        #[arg(short, long)]
        path: String,
    },
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
