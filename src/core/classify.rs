//! Prefix classification of translation keys.

use std::collections::BTreeMap;

use crate::config::Config;

/// Returns the first dot-separated segment of a key.
///
/// A key without a `.` is its own prefix.
pub fn key_prefix(key: &str) -> &str {
    key.split_once('.').map_or(key, |(prefix, _)| prefix)
}

/// Maps a translation key to the namespace that owns it.
#[derive(Debug, Clone)]
pub struct Classifier {
    table: BTreeMap<String, String>,
    fallback: String,
}

impl Classifier {
    pub fn new(config: &Config) -> Self {
        Self {
            table: config.prefix_table(),
            fallback: config.fallback_namespace.clone(),
        }
    }

    /// Total over all strings; unknown prefixes go to the fallback namespace.
    pub fn classify(&self, key: &str) -> &str {
        self.table
            .get(key_prefix(key))
            .map_or(self.fallback.as_str(), String::as_str)
    }

    pub fn fallback(&self) -> &str {
        &self.fallback
    }

    #[cfg(test)]
    fn is_fallback(&self, key: &str) -> bool {
        !self.table.contains_key(key_prefix(key))
    }
}
