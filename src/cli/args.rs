//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `init`: Create a default `.nsyncrc.json`
//! - `split`: Split legacy flat locale files into namespace files (one-time)
//! - `sync`: Synchronize every locale's keys with the base locale
//! - `types`: Generate TypeScript key types from the base locale
//! - `check`: Report what `sync` and `types` would change, without writing

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Split(args))
            | Some(Command::Sync(args))
            | Some(Command::Types(args))
            | Some(Command::Check(args)) => args.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

/// Common arguments shared by all pipeline commands.
#[derive(Debug, Clone, Default, Args)]
pub struct CommonArgs {
    /// Config file path (default: nearest .nsyncrc.json)
    #[arg(long, env = "NSYNC_CONFIG")]
    pub config: Option<PathBuf>,

    /// Locales directory (overrides config file)
    #[arg(long)]
    pub locales_root: Option<String>,

    /// Base locale (overrides config file)
    #[arg(long)]
    pub base_locale: Option<String>,

    /// List individual keys in the report
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Initialize a new .nsyncrc.json configuration file
    Init,
    /// Split legacy <locale>.json files into per-namespace files
    Split(CommonArgs),
    /// Add missing and remove orphaned keys so every locale matches the base locale
    Sync(CommonArgs),
    /// Generate TypeScript types for translation keys
    Types(CommonArgs),
    /// Check that locales are in sync and generated types are up to date
    Check(CommonArgs),
}
