use anyhow::Result;

use super::super::args::CommonArgs;
use super::{CommandResult, CommandSummary, helper::CommandContext};
use crate::core::generate_types;

pub fn types(args: &CommonArgs) -> Result<CommandResult> {
    let ctx = CommandContext::load(args)?;
    let report = generate_types(&ctx.config, &ctx.layout, true)?;

    Ok(CommandResult {
        error_count: 0,
        warning_count: report.missing.len(),
        summary: CommandSummary::Types(report),
    })
}
