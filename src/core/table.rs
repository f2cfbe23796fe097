//! Reading and writing translation tables.
//!
//! A translation table is a flat JSON object mapping full dotted keys to
//! values. Insertion order is preserved (`serde_json` with `preserve_order`),
//! which is what lets the synchronizer persist keys in base order.

use std::{fs, path::Path};

use anyhow::{Context, Result, bail};
use serde_json::{Map, Value};

pub type TranslationTable = Map<String, Value>;

/// What happened when a table was persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    Created,
    Updated,
    /// File already had identical content; nothing was written.
    Unchanged,
}

impl WriteOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            WriteOutcome::Created => "created",
            WriteOutcome::Updated => "updated",
            WriteOutcome::Unchanged => "unchanged",
        }
    }

    pub fn is_change(&self) -> bool {
        !matches!(self, WriteOutcome::Unchanged)
    }
}

/// Read a translation table. The root must be a JSON object.
pub fn read_table(path: &Path) -> Result<TranslationTable> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read JSON file: {}", path.display()))?;
    parse_table(&content, path)
}

pub fn read_table_if_exists(path: &Path) -> Result<Option<TranslationTable>> {
    if !path.exists() {
        return Ok(None);
    }
    read_table(path).map(Some)
}

fn parse_table(content: &str, path: &Path) -> Result<TranslationTable> {
    let value: Value = serde_json::from_str(content)
        .with_context(|| format!("Failed to parse JSON file: {}", path.display()))?;
    match value {
        Value::Object(map) => {
            tracing::debug!(path = %path.display(), keys = map.len(), "read table");
            Ok(map)
        }
        _ => bail!("Root of JSON file must be an object: {}", path.display()),
    }
}

/// Flatten nested objects into dotted keys.
///
/// Legacy files are usually flat already, in which case this is the identity.
/// Arrays and scalars are kept as leaf values. Fails when a flat key and a
/// nested path resolve to the same dotted key.
pub fn flatten_table(table: TranslationTable) -> Result<TranslationTable> {
    let mut result = TranslationTable::new();
    flatten_into(Value::Object(table), String::new(), &mut result)?;
    Ok(result)
}

fn flatten_into(value: Value, prefix: String, result: &mut TranslationTable) -> Result<()> {
    match value {
        Value::Object(map) if prefix.is_empty() || !map.is_empty() => {
            for (key, val) in map {
                let new_prefix = if prefix.is_empty() {
                    key
                } else {
                    format!("{}.{}", prefix, key)
                };
                flatten_into(val, new_prefix, result)?;
            }
        }
        leaf => {
            if result.contains_key(&prefix) {
                bail!("Key \"{}\" is defined more than once after flattening", prefix);
            }
            result.insert(prefix, leaf);
        }
    }
    Ok(())
}

/// Serialize with 2-space indentation and a trailing newline.
pub fn render_table(table: &TranslationTable) -> Result<String> {
    let content = serde_json::to_string_pretty(table).context("Failed to serialize JSON")?;
    Ok(format!("{}\n", content))
}

/// Persist a table as a complete replacement file.
///
/// Parent directories are created as needed. When the file already holds
/// exactly the rendered bytes it is left untouched.
pub fn write_table(path: &Path, table: &TranslationTable) -> Result<WriteOutcome> {
    let content = render_table(table)?;
    write_if_changed(path, &content)
}

/// Write `content` to `path` unless the file already contains it.
pub fn write_if_changed(path: &Path, content: &str) -> Result<WriteOutcome> {
    let outcome = match fs::read_to_string(path) {
        Ok(existing) if existing == content => return Ok(WriteOutcome::Unchanged),
        Ok(_) => WriteOutcome::Updated,
        Err(_) if path.exists() => WriteOutcome::Updated,
        Err(_) => WriteOutcome::Created,
    };

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    fs::write(path, content)
        .with_context(|| format!("Failed to write file: {}", path.display()))?;
    tracing::debug!(path = %path.display(), outcome = outcome.as_str(), "wrote file");

    Ok(outcome)
}
