use anyhow::Result;

use super::super::args::CommonArgs;
use super::{
    CheckSummary, CommandResult, CommandSummary,
    helper::{CommandContext, sync_warning_count},
};
use crate::core::{SyncMode, Synchronizer, generate_types};

/// Dry-run of `sync` and `types`; every file that would change is an error.
pub fn check(args: &CommonArgs) -> Result<CommandResult> {
    let ctx = CommandContext::load(args)?;
    let sync = Synchronizer::new(&ctx.config, &ctx.layout).run(SyncMode::DryRun)?;
    let types = generate_types(&ctx.config, &ctx.layout, false)?;

    let summary = CheckSummary { sync, types };
    Ok(CommandResult {
        error_count: summary.drift_count(),
        warning_count: sync_warning_count(&summary.sync) + summary.types.missing.len(),
        summary: CommandSummary::Check(summary),
    })
}
