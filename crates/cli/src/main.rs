// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! wpm binary entry point.

use clap::{CommandFactory, Parser};
use clap_complete::CompleteEnv;

use wpm::cli::Cli;
use wpm::logging;
use wpm::output_diagnostic::print_error;

#[tokio::main]
async fn main() {
    // Answers `COMPLETE=<shell> wpm ...` requests and exits; otherwise a no-op.
    CompleteEnv::with_factory(Cli::command).complete();

    let cli = Cli::parse();
    logging::init();

    match wpm::run(cli).await {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            print_error(format_args!("{e:#}"));
            std::process::exit(1);
        }
    }
}
