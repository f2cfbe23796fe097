//! One-time migration from flat per-locale files to namespace files.
//!
//! Each legacy `<locale>.json` is partitioned by [`Classifier`] into one table
//! per namespace. Keys inside every partition are sorted lexicographically;
//! that sorted order becomes the base order the synchronizer preserves from
//! then on.

use std::{collections::HashMap, fs, path::PathBuf};

use anyhow::{Context, Result};

use super::{
    classify::Classifier,
    layout::Layout,
    table::{TranslationTable, WriteOutcome, flatten_table, read_table, write_table},
};
use crate::config::Config;

/// A single namespace partition of a locale's table.
#[derive(Debug, Clone, PartialEq)]
pub struct Partition {
    pub namespace: String,
    pub table: TranslationTable,
}

/// Partition a flat table by namespace.
///
/// Only non-empty partitions are returned, in declared namespace order with
/// the fallback bucket last.
pub fn partition_table(
    config: &Config,
    classifier: &Classifier,
    table: &TranslationTable,
) -> Vec<Partition> {
    let mut buckets: HashMap<&str, Vec<(&String, &serde_json::Value)>> = HashMap::new();
    for (key, value) in table {
        buckets
            .entry(classifier.classify(key))
            .or_default()
            .push((key, value));
    }

    let order = config
        .namespaces
        .iter()
        .map(String::as_str)
        .chain(std::iter::once(classifier.fallback()))
        .collect::<Vec<_>>();

    let mut partitions = Vec::new();
    for namespace in order {
        let Some(mut entries) = buckets.remove(namespace) else {
            continue;
        };
        entries.sort_by(|a, b| a.0.cmp(b.0));
        partitions.push(Partition {
            namespace: namespace.to_string(),
            table: entries
                .into_iter()
                .map(|(key, value)| (key.clone(), value.clone()))
                .collect(),
        });
    }
    partitions
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamespaceWrite {
    pub namespace: String,
    pub key_count: usize,
    pub path: PathBuf,
    pub outcome: WriteOutcome,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SplitOutcome {
    Written {
        source_key_count: usize,
        namespaces: Vec<NamespaceWrite>,
    },
    Failed {
        error: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleSplit {
    pub locale: String,
    pub source: PathBuf,
    pub outcome: SplitOutcome,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SplitReport {
    pub locales: Vec<LocaleSplit>,
}

impl SplitReport {
    pub fn failed_count(&self) -> usize {
        self.locales
            .iter()
            .filter(|l| matches!(l.outcome, SplitOutcome::Failed { .. }))
            .count()
    }

    pub fn files_written(&self) -> usize {
        self.locales
            .iter()
            .filter_map(|l| match &l.outcome {
                SplitOutcome::Written { namespaces, .. } => Some(namespaces.len()),
                SplitOutcome::Failed { .. } => None,
            })
            .sum()
    }
}

/// Split every declared locale's legacy file.
///
/// Locales are independent: a missing or malformed legacy file fails that
/// locale only.
pub fn split_locales(config: &Config, layout: &Layout) -> SplitReport {
    let classifier = Classifier::new(config);
    let locales = config
        .locales
        .iter()
        .map(|locale| {
            let source = layout.legacy_file(locale);
            let outcome = match split_locale(config, layout, &classifier, locale) {
                Ok(outcome) => outcome,
                Err(e) => {
                    tracing::debug!(locale = %locale, error = %e, "split failed");
                    SplitOutcome::Failed {
                        error: format!("{:#}", e),
                    }
                }
            };
            LocaleSplit {
                locale: locale.clone(),
                source,
                outcome,
            }
        })
        .collect();

    SplitReport { locales }
}

fn split_locale(
    config: &Config,
    layout: &Layout,
    classifier: &Classifier,
    locale: &str,
) -> Result<SplitOutcome> {
    let source = layout.legacy_file(locale);
    if !source.exists() {
        anyhow::bail!("Legacy translation file not found: {}", source.display());
    }
    let table = flatten_table(read_table(&source)?)
        .with_context(|| format!("Failed to flatten legacy file: {}", source.display()))?;

    let dir = layout.locale_dir(locale);
    fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create directory: {}", dir.display()))?;

    let mut namespaces = Vec::new();
    for partition in partition_table(config, classifier, &table) {
        let path = layout.namespace_file(locale, &partition.namespace);
        let outcome = write_table(&path, &partition.table)?;
        namespaces.push(NamespaceWrite {
            namespace: partition.namespace,
            key_count: partition.table.len(),
            path,
            outcome,
        });
    }

    Ok(SplitOutcome::Written {
        source_key_count: table.len(),
        namespaces,
    })
}
