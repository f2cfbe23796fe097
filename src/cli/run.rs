//! Dispatches to the appropriate command handler based on the parsed arguments.
//!
//! # Returns
//! - `Ok(CommandResult)` with the command summary and error count
//! - `Err` if the command fails (e.g., invalid config, malformed JSON)

use super::{
    args::{Arguments, Command},
    commands::{CommandResult, check::check, init::init, split::split, sync::sync, types::types},
};
use anyhow::Result;

pub fn run(Arguments { command }: Arguments) -> Result<CommandResult> {
    match command {
        Some(Command::Init) => init(),
        Some(Command::Split(args)) => split(&args),
        Some(Command::Sync(args)) => sync(&args),
        Some(Command::Types(args)) => types(&args),
        Some(Command::Check(args)) => check(&args),
        None => {
            anyhow::bail!("No command provided. Use --help to see available commands.")
        }
    }
}
