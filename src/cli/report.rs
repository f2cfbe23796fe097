//! Report formatting and printing utilities.
//!
//! Separate from core logic so nsync can be used as a library. Every printer
//! has a `Write`-generic variant used by tests.

use std::{
    env,
    io::{self, Write},
    path::Path,
};

use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use super::commands::{CheckSummary, CommandResult, CommandSummary, InitSummary};
use crate::core::{
    SplitReport, SyncMode, SyncReport, TypesReport, WriteOutcome,
    split::SplitOutcome,
    sync::{LocaleSync, NamespaceSync},
};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

pub fn print(result: &CommandResult, verbose: bool) {
    print_to(result, verbose, &mut io::stdout().lock());
}

pub fn print_to<W: Write>(result: &CommandResult, verbose: bool, writer: &mut W) {
    match &result.summary {
        CommandSummary::Init(summary) => print_init(summary, writer),
        CommandSummary::Split(report) => print_split(report, writer),
        CommandSummary::Sync(report) => print_sync(report, verbose, writer),
        CommandSummary::Types(report) => print_types(report, writer),
        CommandSummary::Check(summary) => print_check(summary, verbose, writer),
    }
}

fn print_init<W: Write>(summary: &InitSummary, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!("Created {}", display_path(&summary.path)).green()
    );
}

// ============================================================
// split
// ============================================================

fn print_split<W: Write>(report: &SplitReport, writer: &mut W) {
    let width = max_width(report.locales.iter().map(|l| l.locale.as_str()));

    for locale in &report.locales {
        match &locale.outcome {
            SplitOutcome::Written {
                source_key_count,
                namespaces,
            } => {
                let _ = writeln!(
                    writer,
                    "{} {}  {} {} -> {} {}",
                    SUCCESS_MARK.green(),
                    pad(&locale.locale, width).bold(),
                    source_key_count,
                    plural(*source_key_count, "key", "keys"),
                    namespaces.len(),
                    plural(namespaces.len(), "file", "files"),
                );
                let ns_width = max_width(namespaces.iter().map(|n| n.namespace.as_str()));
                for ns in namespaces {
                    let _ = writeln!(
                        writer,
                        "    {}  {} {}  {}",
                        pad(&ns.namespace, ns_width),
                        ns.key_count,
                        plural(ns.key_count, "key", "keys"),
                        display_path(&ns.path).dimmed()
                    );
                }
            }
            SplitOutcome::Failed { error } => {
                let _ = writeln!(
                    writer,
                    "{} {}  {}",
                    FAILURE_MARK.red(),
                    pad(&locale.locale, width).bold(),
                    error.red()
                );
            }
        }
    }

    let failed = report.failed_count();
    let succeeded = report.locales.len() - failed;
    let _ = writeln!(writer);
    if failed == 0 {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!(
                "Split {} {} into {} namespace {}",
                succeeded,
                plural(succeeded, "locale", "locales"),
                report.files_written(),
                plural(report.files_written(), "file", "files")
            )
            .green()
        );
    } else {
        let _ = writeln!(
            writer,
            "{} {} of {} {} failed",
            FAILURE_MARK.red(),
            failed,
            report.locales.len(),
            plural(report.locales.len(), "locale", "locales")
        );
    }
}

// ============================================================
// sync
// ============================================================

fn print_sync<W: Write>(report: &SyncReport, verbose: bool, writer: &mut W) {
    print_sync_details(report, verbose, writer);

    let added = report.added_count();
    let removed = report.removed_count();
    let files = report.changed_files();
    let _ = writeln!(writer);
    if files == 0 {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            "All locales are already in sync".green()
        );
    } else {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!(
                "Added {} {}, removed {} {} in {} {}",
                added,
                plural(added, "key", "keys"),
                removed,
                plural(removed, "key", "keys"),
                files,
                plural(files, "file", "files")
            )
            .green()
        );
    }
}

/// Per-namespace breakdown, skipped namespaces, totals and the consistency check.
fn print_sync_details<W: Write>(report: &SyncReport, verbose: bool, writer: &mut W) {
    let verb = match report.mode {
        SyncMode::Apply => "Synchronizing",
        SyncMode::DryRun => "Checking",
    };
    let _ = writeln!(
        writer,
        "{} locales against base locale '{}'",
        verb,
        report.base_locale.bold()
    );

    let locale_width = max_width(report.totals.iter().map(|t| t.locale.as_str()));

    for ns in &report.namespaces {
        let NamespaceSync::Synced {
            namespace,
            base_key_count,
            locales,
        } = ns
        else {
            continue;
        };
        let _ = writeln!(
            writer,
            "\n{} ({} {})",
            namespace.bold(),
            base_key_count,
            plural(*base_key_count, "key", "keys")
        );
        for locale in locales {
            print_locale_sync(locale, locale_width, report.mode, verbose, writer);
        }
    }

    let skipped: Vec<&NamespaceSync> = report.skipped().collect();
    if !skipped.is_empty() {
        let _ = writeln!(writer);
    }
    for ns in skipped {
        if let NamespaceSync::Skipped {
            namespace,
            base_path,
        } = ns
        {
            let _ = writeln!(
                writer,
                "{} base file for namespace '{}' not found, skipped ({})",
                "warning:".bold().yellow(),
                namespace,
                display_path(base_path)
            );
        }
    }

    let _ = writeln!(writer, "\nKey totals:");
    for total in &report.totals {
        let _ = writeln!(
            writer,
            "  {}  {}",
            pad(&total.locale, locale_width),
            total.key_count
        );
    }

    let _ = writeln!(writer);
    if report.mismatches.is_empty() {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            "All locales match the base key counts".green()
        );
    } else {
        let _ = writeln!(
            writer,
            "{} {} key count {}:",
            "warning:".bold().yellow(),
            report.mismatches.len(),
            plural(report.mismatches.len(), "mismatch", "mismatches")
        );
        for mismatch in &report.mismatches {
            let _ = writeln!(
                writer,
                "  {}/{}: {} {}, base has {} ({:+})",
                mismatch.locale,
                mismatch.namespace,
                mismatch.target_count,
                plural(mismatch.target_count, "key", "keys"),
                mismatch.base_count,
                mismatch.difference()
            );
        }
    }
}

fn print_locale_sync<W: Write>(
    locale: &LocaleSync,
    width: usize,
    mode: SyncMode,
    verbose: bool,
    writer: &mut W,
) {
    let mut parts: Vec<String> = Vec::new();
    if !locale.added.is_empty() {
        parts.push(
            format!(
                "+{} {}",
                locale.added.len(),
                plural(locale.added.len(), "key", "keys")
            )
            .green()
            .to_string(),
        );
    }
    if !locale.removed.is_empty() {
        parts.push(
            format!(
                "-{} {}",
                locale.removed.len(),
                plural(locale.removed.len(), "key", "keys")
            )
            .red()
            .to_string(),
        );
    }
    if locale.reordered() {
        parts.push("reordered".yellow().to_string());
    }
    if locale.outcome == WriteOutcome::Created {
        let label = match mode {
            SyncMode::Apply => "(created)",
            SyncMode::DryRun => "(missing)",
        };
        parts.push(label.dimmed().to_string());
    }
    if parts.is_empty() {
        parts.push("up to date".dimmed().to_string());
    }

    let _ = writeln!(writer, "  {}  {}", pad(&locale.locale, width), parts.join(" "));

    if verbose {
        for key in &locale.added {
            let _ = writeln!(writer, "      {} {}", "+".green(), key);
        }
        for key in &locale.removed {
            let _ = writeln!(writer, "      {} {}", "-".red(), key);
        }
    }
}

// ============================================================
// types
// ============================================================

fn print_types<W: Write>(report: &TypesReport, writer: &mut W) {
    print_types_warnings(report, writer);

    let summary = format!(
        "{} {}, {} {}",
        report.namespace_count,
        plural(report.namespace_count, "namespace", "namespaces"),
        report.key_count,
        plural(report.key_count, "key", "keys")
    );
    let message = match report.outcome {
        WriteOutcome::Unchanged => {
            format!("{} is up to date ({})", display_path(&report.output), summary)
        }
        _ => format!("Wrote {} ({})", display_path(&report.output), summary),
    };
    let _ = writeln!(writer, "{} {}", SUCCESS_MARK.green(), message.green());
}

fn print_types_warnings<W: Write>(report: &TypesReport, writer: &mut W) {
    for (namespace, path) in &report.missing {
        let _ = writeln!(
            writer,
            "{} base file for namespace '{}' not found, omitted from types ({})",
            "warning:".bold().yellow(),
            namespace,
            display_path(path)
        );
    }
}

// ============================================================
// check
// ============================================================

fn print_check<W: Write>(summary: &CheckSummary, verbose: bool, writer: &mut W) {
    print_sync_details(&summary.sync, verbose, writer);

    let _ = writeln!(writer);
    print_types_warnings(&summary.types, writer);
    let output = display_path(&summary.types.output);
    match summary.types.outcome {
        WriteOutcome::Unchanged => {
            let _ = writeln!(
                writer,
                "{} {}",
                SUCCESS_MARK.green(),
                format!("{} is up to date", output).green()
            );
        }
        WriteOutcome::Updated => {
            let _ = writeln!(writer, "{} {} is out of date", FAILURE_MARK.red(), output);
        }
        WriteOutcome::Created => {
            let _ = writeln!(writer, "{} {} does not exist", FAILURE_MARK.red(), output);
        }
    }

    let drift = summary.drift_count();
    let _ = writeln!(writer);
    if drift == 0 {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            "Everything is up to date".green()
        );
    } else {
        let _ = writeln!(
            writer,
            "{} {} {} out of date. Run {} and {} to fix.",
            FAILURE_MARK.red(),
            drift,
            plural(drift, "file", "files"),
            "nsync sync".cyan(),
            "nsync types".cyan()
        );
    }
}

// ============================================================
// helpers
// ============================================================

fn plural<'a>(count: usize, singular: &'a str, plural: &'a str) -> &'a str {
    if count == 1 { singular } else { plural }
}

/// Display width of the widest label; locale and namespace names may be CJK.
fn max_width<'a>(labels: impl Iterator<Item = &'a str>) -> usize {
    labels.map(UnicodeWidthStr::width).max().unwrap_or(0)
}

fn pad(label: &str, width: usize) -> String {
    let padding = width.saturating_sub(UnicodeWidthStr::width(label));
    format!("{}{}", label, " ".repeat(padding))
}

/// Paths relative to the working directory when possible.
fn display_path(path: &Path) -> String {
    env::current_dir()
        .ok()
        .and_then(|cwd| path.strip_prefix(&cwd).ok().map(Path::to_path_buf))
        .unwrap_or_else(|| path.to_path_buf())
        .display()
        .to_string()
}
