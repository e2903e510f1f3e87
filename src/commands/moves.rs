/// `move` command: fetch and report one or more moves.
use crate::api::{ApiClient, Resource};
use crate::cli::ReportCtx;
use crate::cli::args::TargetArgs;
use crate::cli::output::write_report;
use crate::dex::DexError;
use crate::dex::batch::resolve_targets;
use crate::dex::model::Move;
use crate::dex::report::{assemble, failure_block, move_block};

/// Run `pokedex move`. `--expanded` has no effect here.
///
/// # Errors
///
/// Returns `DexError` on an unreadable batch file, an unwritable output
/// path, or when every lookup fails.
pub fn run(args: &TargetArgs, ctx: &ReportCtx) -> Result<(), DexError> {
    let targets = resolve_targets(&args.target)?;
    let client = ApiClient::new()?;

    let mut blocks = Vec::with_capacity(targets.len());
    let mut failed = 0usize;
    for target in &targets {
        let _t_fetch = ctx.timer("fetch_move");
        let fetched = client.fetch::<Move>(Resource::Move, target);
        drop(_t_fetch);

        match fetched {
            Ok(mv) => blocks.push(move_block(&mv)),
            Err(err) => {
                failed += 1;
                blocks.push(failure_block(target, &err));
            }
        }
    }

    let _t_write = ctx.timer("write_report");
    write_report(&assemble(&blocks), ctx)?;
    drop(_t_write);

    if failed > 0 && failed == targets.len() {
        return Err(DexError::AllLookupsFailed { count: failed });
    }
    Ok(())
}
