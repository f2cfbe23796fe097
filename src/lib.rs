//! nsync - namespaced i18n JSON maintenance
//!
//! nsync is a CLI tool and library for keeping a tree of per-locale,
//! per-namespace translation files consistent. The base locale is the single
//! source of truth for which keys exist and in what order they are stored.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (commands and report printing)
//! - `config`: Namespace registry loading and validation
//! - `core`: Split, sync and type generation pipeline

pub mod cli;
pub mod config;
pub mod core;
