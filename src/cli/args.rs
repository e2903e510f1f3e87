/// CLI argument definitions via clap derive.
use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// pokedex — query the PokeAPI for pokemon, abilities, and moves.
#[derive(Debug, Parser)]
#[command(
    name = "pokedex",
    about = "Query the PokeAPI for pokemon, abilities, and moves from the CLI",
    version,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Include stats, abilities, and moves in pokemon reports.
    /// Has no effect for ability and move lookups.
    #[arg(long, global = true)]
    pub expanded: bool,

    /// Write the report to a file instead of stdout.
    #[arg(long, global = true, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Print request timing to stderr for debugging.
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// All subcommands, one per PokeAPI resource kind.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Look up one or more pokemon.
    Pokemon(TargetArgs),
    /// Look up one or more abilities.
    Ability(TargetArgs),
    /// Look up one or more moves.
    Move(TargetArgs),
}

/// Shared positional target for all lookup subcommands.
#[derive(Debug, Parser)]
pub struct TargetArgs {
    /// Name, numeric id, or path to a file with one name/id per line.
    #[arg(value_name = "NAME|ID|FILE")]
    pub target: String,
}
