//! Key synchronization against the base locale.
//!
//! For every declared namespace the base locale's table decides which keys
//! exist and in what order they are persisted. Every other locale gets
//! missing keys filled with the base value as a placeholder and orphaned
//! keys dropped. The base table itself is only ever read.

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::Result;

use super::{
    layout::Layout,
    table::{TranslationTable, WriteOutcome, read_table_if_exists, render_table, write_table},
};
use crate::config::Config;

/// Result of reconciling one target table against its base.
#[derive(Debug, Clone, PartialEq)]
pub struct Reconciled {
    /// Target table with exactly the base key set, in base key order.
    pub table: TranslationTable,
    /// Keys filled from the base, in base order.
    pub added: Vec<String>,
    /// Orphaned keys dropped from the target, in target order.
    pub removed: Vec<String>,
}

/// Reconcile `target` against `base`.
///
/// Existing target values are kept; missing keys take the base value. The
/// output is rebuilt by walking the base keys, so its order always matches
/// the base regardless of how the target was ordered.
pub fn reconcile(base: &TranslationTable, mut target: TranslationTable) -> Reconciled {
    let added: Vec<String> = base
        .keys()
        .filter(|key| !target.contains_key(*key))
        .cloned()
        .collect();
    let removed: Vec<String> = target
        .keys()
        .filter(|key| !base.contains_key(*key))
        .cloned()
        .collect();

    for key in &added {
        if let Some(value) = base.get(key) {
            target.insert(key.clone(), value.clone());
        }
    }
    for key in &removed {
        target.remove(key);
    }

    let table = base
        .keys()
        .filter_map(|key| target.remove_entry(key))
        .collect();

    Reconciled {
        table,
        added,
        removed,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncMode {
    /// Persist reconciled tables.
    Apply,
    /// Compute everything, write nothing.
    DryRun,
}

/// Outcome for one (namespace, locale) pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleSync {
    pub locale: String,
    pub path: PathBuf,
    pub added: Vec<String>,
    pub removed: Vec<String>,
    /// Created, updated or unchanged on disk (or what would be, in dry-run).
    pub outcome: WriteOutcome,
}

impl LocaleSync {
    /// Bytes changed without any key being added or removed.
    pub fn reordered(&self) -> bool {
        self.outcome == WriteOutcome::Updated && self.added.is_empty() && self.removed.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NamespaceSync {
    Synced {
        namespace: String,
        base_key_count: usize,
        locales: Vec<LocaleSync>,
    },
    /// Base file missing; the namespace was left untouched.
    Skipped { namespace: String, base_path: PathBuf },
}

impl NamespaceSync {
    pub fn namespace(&self) -> &str {
        match self {
            NamespaceSync::Synced { namespace, .. } | NamespaceSync::Skipped { namespace, .. } => {
                namespace
            }
        }
    }
}

/// Persisted key count of a locale differs from the base.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountMismatch {
    pub locale: String,
    pub namespace: String,
    pub base_count: usize,
    pub target_count: usize,
}

impl CountMismatch {
    /// `target - base`; positive means the locale has extra keys.
    pub fn difference(&self) -> isize {
        self.target_count as isize - self.base_count as isize
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleTotal {
    pub locale: String,
    pub key_count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncReport {
    pub mode: SyncMode,
    pub base_locale: String,
    pub namespaces: Vec<NamespaceSync>,
    pub mismatches: Vec<CountMismatch>,
    pub totals: Vec<LocaleTotal>,
}

impl SyncReport {
    pub fn locale_syncs(&self) -> impl Iterator<Item = (&str, &LocaleSync)> {
        self.namespaces.iter().flat_map(|ns| match ns {
            NamespaceSync::Synced {
                namespace, locales, ..
            } => locales
                .iter()
                .map(|l| (namespace.as_str(), l))
                .collect::<Vec<_>>(),
            NamespaceSync::Skipped { .. } => Vec::new(),
        })
    }

    pub fn added_count(&self) -> usize {
        self.locale_syncs().map(|(_, l)| l.added.len()).sum()
    }

    pub fn removed_count(&self) -> usize {
        self.locale_syncs().map(|(_, l)| l.removed.len()).sum()
    }

    pub fn changed_files(&self) -> usize {
        self.locale_syncs()
            .filter(|(_, l)| l.outcome.is_change())
            .count()
    }

    pub fn skipped(&self) -> impl Iterator<Item = &NamespaceSync> {
        self.namespaces
            .iter()
            .filter(|ns| matches!(ns, NamespaceSync::Skipped { .. }))
    }
}

/// Runs the synchronization pass over a translation tree.
#[derive(Debug)]
pub struct Synchronizer<'a> {
    config: &'a Config,
    layout: &'a Layout,
}

impl<'a> Synchronizer<'a> {
    pub fn new(config: &'a Config, layout: &'a Layout) -> Self {
        Self { config, layout }
    }

    /// Reconcile every declared namespace for every non-base locale.
    ///
    /// Unreadable or malformed files abort the run.
    pub fn run(&self, mode: SyncMode) -> Result<SyncReport> {
        let base_locale = self.config.base_locale.as_str();
        let mut namespaces = Vec::with_capacity(self.config.namespaces.len());

        for namespace in &self.config.namespaces {
            let base_path = self.layout.namespace_file(base_locale, namespace);
            let Some(base) = read_table_if_exists(&base_path)? else {
                tracing::debug!(namespace = %namespace, "base file missing, skipping");
                namespaces.push(NamespaceSync::Skipped {
                    namespace: namespace.clone(),
                    base_path,
                });
                continue;
            };

            let mut locales = Vec::new();
            for locale in self.config.non_base_locales() {
                locales.push(self.sync_locale(&base, namespace, locale, mode)?);
            }

            namespaces.push(NamespaceSync::Synced {
                namespace: namespace.clone(),
                base_key_count: base.len(),
                locales,
            });
        }

        let (mismatches, totals) = self.consistency_check()?;

        Ok(SyncReport {
            mode,
            base_locale: base_locale.to_string(),
            namespaces,
            mismatches,
            totals,
        })
    }

    fn sync_locale(
        &self,
        base: &TranslationTable,
        namespace: &str,
        locale: &str,
        mode: SyncMode,
    ) -> Result<LocaleSync> {
        let path = self.layout.namespace_file(locale, namespace);
        let existing = read_table_if_exists(&path)?;
        let existed = existing.is_some();

        let Reconciled {
            table,
            added,
            removed,
        } = reconcile(base, existing.unwrap_or_default());

        let outcome = match mode {
            SyncMode::Apply => write_table(&path, &table)?,
            SyncMode::DryRun => preview_write(&path, &table, existed)?,
        };
        tracing::debug!(
            namespace,
            locale,
            added = added.len(),
            removed = removed.len(),
            outcome = outcome.as_str(),
            "synchronized"
        );

        Ok(LocaleSync {
            locale: locale.to_string(),
            path,
            added,
            removed,
            outcome,
        })
    }

    /// Compare persisted key counts of every locale with the base.
    ///
    /// Reads files back from disk, so in dry-run mode this reflects the tree
    /// as it currently is.
    fn consistency_check(&self) -> Result<(Vec<CountMismatch>, Vec<LocaleTotal>)> {
        let base_locale = self.config.base_locale.as_str();
        let mut mismatches = Vec::new();
        let mut totals: Vec<LocaleTotal> = self
            .config
            .locales
            .iter()
            .map(|locale| LocaleTotal {
                locale: locale.clone(),
                key_count: 0,
            })
            .collect();

        for namespace in &self.config.namespaces {
            let Some(base_count) = self.persisted_count(base_locale, namespace)? else {
                continue;
            };

            for total in &mut totals {
                let count = if total.locale == base_locale {
                    base_count
                } else {
                    self.persisted_count(&total.locale, namespace)?
                        .unwrap_or(0)
                };
                total.key_count += count;

                if total.locale != base_locale && count != base_count {
                    mismatches.push(CountMismatch {
                        locale: total.locale.clone(),
                        namespace: namespace.clone(),
                        base_count,
                        target_count: count,
                    });
                }
            }
        }

        Ok((mismatches, totals))
    }

    fn persisted_count(&self, locale: &str, namespace: &str) -> Result<Option<usize>> {
        let path = self.layout.namespace_file(locale, namespace);
        Ok(read_table_if_exists(&path)?.map(|table| table.len()))
    }
}

/// What [`write_table`] would report, without touching the file.
fn preview_write(path: &Path, table: &TranslationTable, existed: bool) -> Result<WriteOutcome> {
    if !existed {
        return Ok(WriteOutcome::Created);
    }
    let rendered = render_table(table)?;
    let current = fs::read_to_string(path).unwrap_or_default();
    Ok(if current == rendered {
        WriteOutcome::Unchanged
    } else {
        WriteOutcome::Updated
    })
}
