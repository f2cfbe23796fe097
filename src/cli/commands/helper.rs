use std::env;

use anyhow::{Context, Result};

use super::super::args::CommonArgs;
use crate::{
    config::{Config, load_config, load_config_file},
    core::{Layout, SyncReport},
};

/// Configuration and resolved paths for a single command run.
#[derive(Debug)]
pub struct CommandContext {
    pub config: Config,
    pub layout: Layout,
}

impl CommandContext {
    /// Load config (explicit path or nearest file), apply CLI overrides, validate.
    pub fn load(args: &CommonArgs) -> Result<Self> {
        let cwd = env::current_dir().context("Failed to get current directory")?;
        let loaded = match &args.config {
            Some(path) => load_config_file(&cwd.join(path))?,
            None => load_config(&cwd)?,
        };

        let mut config = loaded.config;
        if let Some(locales_root) = &args.locales_root {
            // Relative to where the command runs, not to the config file.
            config.locales_root = cwd.join(locales_root).to_string_lossy().into_owned();
        }
        if let Some(base_locale) = &args.base_locale {
            config.base_locale = base_locale.clone();
        }
        config.validate()?;

        let layout = Layout::new(&loaded.root, &config);
        tracing::debug!(
            root = %loaded.root.display(),
            locales_root = %layout.locales_root().display(),
            from_file = loaded.from_file,
            "resolved context"
        );

        Ok(Self { config, layout })
    }
}

pub fn sync_warning_count(report: &SyncReport) -> usize {
    report.skipped().count() + report.mismatches.len()
}
