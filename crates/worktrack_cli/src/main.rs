//! worktrack CLI entry point.
//!
//! Parses the command line, runs exactly one command, and maps any
//! propagated error to a message on stderr and a non-zero exit code.

mod commands;
mod handlers;
mod render;

use clap::Parser;
use commands::Cli;
use log::error;
use std::process;

fn main() {
    let cli = Cli::parse();

    if let Err(err) = handlers::run(cli) {
        error!("event=command module=cli status=error error={err}");
        eprintln!("Error: {err}");
        process::exit(1);
    }
}
