use anyhow::Result;

use super::super::args::CommonArgs;
use super::{
    CommandResult, CommandSummary,
    helper::{CommandContext, sync_warning_count},
};
use crate::core::{SyncMode, Synchronizer};

pub fn sync(args: &CommonArgs) -> Result<CommandResult> {
    let ctx = CommandContext::load(args)?;
    let report = Synchronizer::new(&ctx.config, &ctx.layout).run(SyncMode::Apply)?;

    Ok(CommandResult {
        error_count: 0,
        warning_count: sync_warning_count(&report),
        summary: CommandSummary::Sync(report),
    })
}
