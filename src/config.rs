use std::{
    collections::{BTreeMap, HashSet},
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::core::typegen::keys_type_name;

pub const CONFIG_FILE_NAME: &str = ".nsyncrc.json";

/// Namespace registry and layout settings.
///
/// Loaded once per run and passed by reference to every component; nothing
/// in the pipeline reads configuration from anywhere else.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_locales_root")]
    pub locales_root: String,
    #[serde(default = "default_base_locale")]
    pub base_locale: String,
    #[serde(default = "default_locales")]
    pub locales: Vec<String>,
    #[serde(default = "default_namespaces")]
    pub namespaces: Vec<String>,
    /// Extra prefix aliases. Every declared namespace also matches its own name.
    #[serde(default = "default_prefixes")]
    pub prefixes: BTreeMap<String, String>,
    #[serde(default = "default_fallback_namespace")]
    pub fallback_namespace: String,
    #[serde(default = "default_types_output")]
    pub types_output: String,
}

fn default_locales_root() -> String {
    "src/i18n/locales".to_string()
}

fn default_base_locale() -> String {
    "en".to_string()
}

fn default_locales() -> Vec<String> {
    ["en", "ko", "ja", "zh-CN", "zh-TW"]
        .map(String::from)
        .to_vec()
}

fn default_namespaces() -> Vec<String> {
    [
        "common",
        "analytics",
        "session",
        "settings",
        "tools",
        "error",
        "message",
        "renderers",
        "update",
        "feedback",
        "recentEdits",
    ]
    .map(String::from)
    .to_vec()
}

fn default_prefixes() -> BTreeMap<String, String> {
    [
        ("app", "common"),
        ("header", "common"),
        ("time", "common"),
        ("copyButton", "common"),
        ("analyticsDashboard", "analytics"),
        ("tokenStats", "analytics"),
        ("sessionList", "session"),
        ("project", "session"),
        ("projectTree", "session"),
        ("settingsManager", "settings"),
        ("folderPicker", "settings"),
        ("errors", "error"),
        ("messages", "message"),
        ("messageViewer", "message"),
        ("toolUseRenderer", "renderers"),
        ("toolResult", "renderers"),
        ("updateModal", "update"),
        ("updateSettings", "update"),
        ("feedbackModal", "feedback"),
        ("recentEditsViewer", "recentEdits"),
    ]
    .into_iter()
    .map(|(prefix, namespace)| (prefix.to_string(), namespace.to_string()))
    .collect()
}

fn default_fallback_namespace() -> String {
    "misc".to_string()
}

fn default_types_output() -> String {
    "src/i18n/types.generated.ts".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locales_root: default_locales_root(),
            base_locale: default_base_locale(),
            locales: default_locales(),
            namespaces: default_namespaces(),
            prefixes: default_prefixes(),
            fallback_namespace: default_fallback_namespace(),
            types_output: default_types_output(),
        }
    }
}

const IDENTIFIER_PATTERN: &str = r"^[A-Za-z][A-Za-z0-9_]*$";
const LOCALE_PATTERN: &str = r"^[A-Za-z]{2,3}(?:[-_][A-Za-z0-9]{2,8})*$";

impl Config {
    /// Validate configuration values.
    ///
    /// Namespace names end up as file names and TypeScript type names, so
    /// they must be plain identifiers.
    pub fn validate(&self) -> Result<()> {
        let identifier = Regex::new(IDENTIFIER_PATTERN).context("Invalid identifier pattern")?;
        let locale_tag = Regex::new(LOCALE_PATTERN).context("Invalid locale pattern")?;

        if self.locales.is_empty() {
            bail!("'locales' must list at least one locale");
        }
        let mut seen = HashSet::new();
        for locale in &self.locales {
            if !locale_tag.is_match(locale) {
                bail!("Invalid locale in 'locales': \"{}\"", locale);
            }
            if !seen.insert(locale.as_str()) {
                bail!("Duplicate locale in 'locales': \"{}\"", locale);
            }
        }
        if !seen.contains(self.base_locale.as_str()) {
            bail!(
                "'baseLocale' \"{}\" is not listed in 'locales'",
                self.base_locale
            );
        }

        if self.namespaces.is_empty() {
            bail!("'namespaces' must list at least one namespace");
        }
        let mut seen = HashSet::new();
        let mut type_names: BTreeMap<String, &str> = BTreeMap::new();
        for namespace in &self.namespaces {
            if !identifier.is_match(namespace) {
                bail!("Invalid namespace in 'namespaces': \"{}\"", namespace);
            }
            if !seen.insert(namespace.as_str()) {
                bail!("Duplicate namespace in 'namespaces': \"{}\"", namespace);
            }
            let type_name = keys_type_name(namespace);
            if let Some(other) = type_names.insert(type_name.clone(), namespace) {
                bail!(
                    "Namespaces \"{}\" and \"{}\" both generate the type name {}",
                    other,
                    namespace,
                    type_name
                );
            }
        }

        if !identifier.is_match(&self.fallback_namespace) {
            bail!(
                "Invalid 'fallbackNamespace': \"{}\"",
                self.fallback_namespace
            );
        }
        // Unknown prefixes must land in a bucket of their own.
        if seen.contains(self.fallback_namespace.as_str()) {
            bail!(
                "'fallbackNamespace' \"{}\" must not be listed in 'namespaces'",
                self.fallback_namespace
            );
        }

        for (prefix, namespace) in &self.prefixes {
            if !seen.contains(namespace.as_str()) {
                bail!(
                    "Prefix \"{}\" in 'prefixes' maps to undeclared namespace \"{}\"",
                    prefix,
                    namespace
                );
            }
        }

        Ok(())
    }

    /// Full prefix lookup table: each namespace maps from its own name,
    /// explicit aliases are layered on top.
    pub fn prefix_table(&self) -> BTreeMap<String, String> {
        let mut table: BTreeMap<String, String> = self
            .namespaces
            .iter()
            .map(|namespace| (namespace.clone(), namespace.clone()))
            .collect();
        table.extend(
            self.prefixes
                .iter()
                .map(|(prefix, namespace)| (prefix.clone(), namespace.clone())),
        );
        table
    }

    pub fn non_base_locales(&self) -> impl Iterator<Item = &str> {
        self.locales
            .iter()
            .map(String::as_str)
            .filter(move |locale| *locale != self.base_locale)
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
#[derive(Debug)]
pub struct ConfigLoadResult {
    pub config: Config,
    /// Directory that relative paths in the config resolve against.
    pub root: PathBuf,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config_file(path: &Path) -> Result<ConfigLoadResult> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    let config: Config = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
    config.validate()?;

    let root = path
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."));
    tracing::debug!(path = %path.display(), "loaded config");

    Ok(ConfigLoadResult {
        config,
        root,
        from_file: true,
    })
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => load_config_file(&path),
        None => {
            tracing::debug!(dir = %start_dir.display(), "no config file found, using defaults");
            Ok(ConfigLoadResult {
                config: Config::default(),
                root: start_dir.to_path_buf(),
                from_file: false,
            })
        }
    }
}
