#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions, clippy::doc_markdown)]
//! pokedex — query the PokeAPI for pokemon, abilities, and moves.

mod api;
mod cli;
mod commands;
mod dex;

use clap::Parser;

use cli::{Cli, ReportCtx, write_error};

fn main() {
    let cli = Cli::parse();

    let ctx = ReportCtx::new(cli.expanded, cli.output, cli.debug);

    match commands::dispatch(&cli.command, &ctx) {
        Ok(()) => {}
        Err(err) => {
            write_error(&err);
            std::process::exit(err.exit_code());
        }
    }
}
