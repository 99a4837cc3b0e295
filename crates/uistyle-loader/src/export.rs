//! Schema-driven export of a [`Style`] back to a TOML style document.
//!
//! The inverse of loading: every registered schema path is read back from
//! the store through its typed accessor and emitted in the same nested
//! `{path: {value = …}}` shape the binder consumes, so an exported document
//! re-loads to an identical style.

use std::path::Path;

use toml::{Table, Value};
use tracing::info;

use uistyle_core::{FieldBinding, SchemaRegistry, Style, VALUE_KEY};

use crate::loader::LoadError;

/// Builds the TOML document describing every configurable field of `style`.
///
/// # Errors
///
/// Returns [`LoadError::Serialize`] if a field value cannot be represented
/// as a TOML value.
pub fn style_document(style: &Style) -> Result<Table, LoadError> {
    let mut root = Table::new();

    for path in SchemaRegistry::paths() {
        let Some(binding) = SchemaRegistry::lookup(path) else {
            continue;
        };

        let value = match binding {
            FieldBinding::Color(slot) => Value::try_from(style.color(slot))?,
            FieldBinding::Scalar(var) => Value::try_from(style.scalar(var))?,
            FieldBinding::Pair(var) => Value::try_from(style.pair(var))?,
        };
        insert_at_path(&mut root, path, value);
    }

    Ok(root)
}

/// Writes the full style document for `style` to the file at `path`.
///
/// Creates parent directories as needed.
///
/// # Errors
///
/// Returns [`LoadError::Serialize`] if the document cannot be rendered and
/// [`LoadError::Io`] for file-system failures.
pub fn save_style(path: impl AsRef<Path>, style: &Style) -> Result<(), LoadError> {
    let path = path.as_ref();
    let document = style_document(style)?;
    let text = toml::to_string_pretty(&document)?;

    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir).map_err(|source| LoadError::Io {
            path: dir.to_path_buf(),
            source,
        })?;
    }

    std::fs::write(path, text).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    info!("style saved to {}", path.display());
    Ok(())
}

/// Inserts `value` under the reserved value key of the table at `path`,
/// creating intermediate tables along the way.
fn insert_at_path(table: &mut Table, path: &str, value: Value) {
    match path.split_once('.') {
        None => {
            let node = table
                .entry(path.to_string())
                .or_insert_with(|| Value::Table(Table::new()));
            if let Value::Table(leaf) = node {
                leaf.insert(VALUE_KEY.to_string(), value);
            }
        }
        Some((head, rest)) => {
            let node = table
                .entry(head.to_string())
                .or_insert_with(|| Value::Table(Table::new()));
            if let Value::Table(inner) = node {
                insert_at_path(inner, rest, value);
            }
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
