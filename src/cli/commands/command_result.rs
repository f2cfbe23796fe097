use std::path::PathBuf;

use crate::cli::ExitStatus;
use crate::core::{SplitReport, SyncReport, TypesReport};

#[derive(Debug)]
pub enum CommandSummary {
    Init(InitSummary),
    Split(SplitReport),
    Sync(SyncReport),
    Types(TypesReport),
    Check(CheckSummary),
}

#[derive(Debug)]
pub struct InitSummary {
    pub path: PathBuf,
}

#[derive(Debug)]
pub struct CheckSummary {
    pub sync: SyncReport,
    pub types: TypesReport,
}

impl CheckSummary {
    /// Number of files `sync` or `types` would write.
    pub fn drift_count(&self) -> usize {
        self.sync.changed_files() + usize::from(self.types.outcome.is_change())
    }
}

/// Result of running an nsync command
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
    /// Items that failed (locales that could not be split, files out of date in `check`).
    pub error_count: usize,
    /// Non-fatal diagnostics (skipped namespaces, count mismatches).
    pub warning_count: usize,
}

impl CommandResult {
    pub fn exit_status(&self) -> ExitStatus {
        if self.error_count > 0 {
            ExitStatus::Failure
        } else {
            ExitStatus::Success
        }
    }
}
