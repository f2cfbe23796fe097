//! TypeScript key declarations derived from the base locale.
//!
//! The generated file lets the frontend reject unknown translation keys at
//! build time. It is a pure function of the base locale's namespace files.

use std::{collections::BTreeSet, fs, path::PathBuf};

use anyhow::Result;

use super::{
    classify::key_prefix,
    layout::Layout,
    table::{WriteOutcome, read_table_if_exists, write_if_changed},
};
use crate::config::Config;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamespaceKeys {
    pub namespace: String,
    /// Sorted lexicographically.
    pub keys: Vec<String>,
}

/// Everything the generated file enumerates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyIndex {
    /// Namespaces with a base file, in declared order.
    pub namespaces: Vec<NamespaceKeys>,
    /// Declared namespaces whose base file is missing.
    pub missing: Vec<(String, PathBuf)>,
}

impl KeyIndex {
    /// Sorted, de-duplicated union of every namespace's keys.
    pub fn all_keys(&self) -> Vec<&str> {
        self.namespaces
            .iter()
            .flat_map(|ns| ns.keys.iter().map(String::as_str))
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Sorted distinct first segments of all keys.
    pub fn prefixes(&self) -> Vec<&str> {
        self.namespaces
            .iter()
            .flat_map(|ns| ns.keys.iter().map(|key| key_prefix(key)))
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}

/// Collect base-locale keys per declared namespace.
pub fn collect_keys(config: &Config, layout: &Layout) -> Result<KeyIndex> {
    let mut index = KeyIndex::default();

    for namespace in &config.namespaces {
        let path = layout.namespace_file(&config.base_locale, namespace);
        match read_table_if_exists(&path)? {
            Some(table) => {
                let mut keys: Vec<String> = table.into_iter().map(|(key, _)| key).collect();
                keys.sort();
                index.namespaces.push(NamespaceKeys {
                    namespace: namespace.clone(),
                    keys,
                });
            }
            None => {
                tracing::debug!(namespace = %namespace, "base file missing, omitted from types");
                index.missing.push((namespace.clone(), path));
            }
        }
    }

    Ok(index)
}

/// `recentEdits` -> `RecentEditsKeys`, `tool_use` -> `ToolUseKeys`.
pub fn keys_type_name(namespace: &str) -> String {
    let mut name: String = namespace
        .split('_')
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect();
    name.push_str("Keys");
    name
}

fn ts_string(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('\'');
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            c => out.push(c),
        }
    }
    out.push('\'');
    out
}

fn push_union<'a>(out: &mut String, name: &str, members: impl IntoIterator<Item = &'a str>) {
    let members: Vec<&str> = members.into_iter().collect();
    out.push_str(&format!("export type {} =", name));
    if members.is_empty() {
        out.push_str(" never;\n\n");
        return;
    }
    for member in &members {
        out.push_str("\n  | ");
        out.push_str(member);
    }
    out.push_str(";\n\n");
}

/// Render the generated TypeScript source.
pub fn render_types(index: &KeyIndex) -> String {
    let mut out = String::new();
    out.push_str("// This file is generated by `nsync types`. Do not edit it by hand.\n\n");

    let namespaces: Vec<String> = index
        .namespaces
        .iter()
        .map(|ns| ts_string(&ns.namespace))
        .collect();
    out.push_str(&format!(
        "export const TRANSLATION_NAMESPACES = [{}] as const;\n\n",
        namespaces.join(", ")
    ));
    push_union(
        &mut out,
        "TranslationNamespace",
        namespaces.iter().map(String::as_str),
    );

    for ns in &index.namespaces {
        let keys: Vec<String> = ns.keys.iter().map(|key| ts_string(key)).collect();
        push_union(
            &mut out,
            &keys_type_name(&ns.namespace),
            keys.iter().map(String::as_str),
        );
    }

    let all_keys: Vec<String> = index.all_keys().into_iter().map(ts_string).collect();
    push_union(&mut out, "TranslationKey", all_keys.iter().map(String::as_str));

    let prefixes: Vec<String> = index.prefixes().into_iter().map(ts_string).collect();
    out.push_str("/** Key prefixes, kept for code that still resolves keys by prefix. */\n");
    push_union(
        &mut out,
        "TranslationPrefix",
        prefixes.iter().map(String::as_str),
    );

    // Single trailing newline.
    out.truncate(out.trim_end().len());
    out.push('\n');
    out
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypesReport {
    pub output: PathBuf,
    pub namespace_count: usize,
    pub key_count: usize,
    pub missing: Vec<(String, PathBuf)>,
    pub outcome: WriteOutcome,
}

/// Generate the types file. With `apply == false` only reports whether the
/// file is stale.
pub fn generate_types(config: &Config, layout: &Layout, apply: bool) -> Result<TypesReport> {
    let index = collect_keys(config, layout)?;
    let content = render_types(&index);
    let output = layout.types_output().to_path_buf();

    let outcome = if apply {
        write_if_changed(&output, &content)?
    } else {
        match fs::read_to_string(&output) {
            Ok(existing) if existing == content => WriteOutcome::Unchanged,
            Ok(_) => WriteOutcome::Updated,
            Err(_) => WriteOutcome::Created,
        }
    };

    Ok(TypesReport {
        output,
        namespace_count: index.namespaces.len(),
        key_count: index.all_keys().len(),
        missing: index.missing,
        outcome,
    })
}
