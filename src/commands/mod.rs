/// Command dispatch: routes `Command` enum variants to their implementations.
pub mod ability;
pub mod moves;
pub mod pokemon;

use crate::cli::ReportCtx;
use crate::cli::args::Command;
use crate::dex::DexError;

/// Dispatch a parsed `Command` to its handler.
///
/// # Errors
///
/// Returns `DexError` on any command failure.
pub fn dispatch(command: &Command, ctx: &ReportCtx) -> Result<(), DexError> {
    match command {
        Command::Pokemon(args) => pokemon::run(args, ctx),
        Command::Ability(args) => ability::run(args, ctx),
        Command::Move(args) => moves::run(args, ctx),
    }
}
