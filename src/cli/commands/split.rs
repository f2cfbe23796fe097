use anyhow::Result;

use super::super::args::CommonArgs;
use super::{CommandResult, CommandSummary, helper::CommandContext};
use crate::core::split_locales;

pub fn split(args: &CommonArgs) -> Result<CommandResult> {
    let ctx = CommandContext::load(args)?;
    let report = split_locales(&ctx.config, &ctx.layout);

    Ok(CommandResult {
        error_count: report.failed_count(),
        warning_count: 0,
        summary: CommandSummary::Split(report),
    })
}
