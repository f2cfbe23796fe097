//! On-disk layout of the translation tree.

use std::path::{Path, PathBuf};

use crate::config::Config;

/// Resolves translation file paths for a project.
///
/// ```text
/// <localesRoot>/<locale>.json              legacy flat file (split input)
/// <localesRoot>/<locale>/<namespace>.json  namespace file
/// ```
#[derive(Debug, Clone)]
pub struct Layout {
    locales_root: PathBuf,
    types_output: PathBuf,
}

impl Layout {
    pub fn new(root: &Path, config: &Config) -> Self {
        Self {
            locales_root: root.join(&config.locales_root),
            types_output: root.join(&config.types_output),
        }
    }

    pub fn locales_root(&self) -> &Path {
        &self.locales_root
    }

    pub fn legacy_file(&self, locale: &str) -> PathBuf {
        self.locales_root.join(format!("{}.json", locale))
    }

    pub fn locale_dir(&self, locale: &str) -> PathBuf {
        self.locales_root.join(locale)
    }

    pub fn namespace_file(&self, locale: &str, namespace: &str) -> PathBuf {
        self.locale_dir(locale).join(format!("{}.json", namespace))
    }

    pub fn types_output(&self) -> &Path {
        &self.types_output
    }
}
