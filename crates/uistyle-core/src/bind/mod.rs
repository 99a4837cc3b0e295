//! Recursive, schema-driven binding of parsed style documents.
//!
//! The binder walks a parsed TOML tree depth-first, flattens each table's
//! position into a fully-qualified dotted name, consults the
//! [`SchemaRegistry`], and writes type-checked leaf values through a
//! [`StyleSink`].
//!
//! Two absences are deliberate non-errors:
//!
//! - a table whose path has **no schema entry** is an organizational
//!   grouping; its descendants are still traversed, so authors can nest
//!   freely without every level being configurable;
//! - a schema-bearing table **without a `value` key** simply sets nothing at
//!   that level; the path may exist purely as a namespace for deeper
//!   children, or the author may have omitted it.
//!
//! Everything else – a non-table where a table is required, a wrong arity, a
//! non-numeric element – aborts the whole load on first occurrence. A
//! malformed style file is an authoring defect, not something to recover
//! from halfway.

use thiserror::Error;
use toml::Value;
use tracing::{debug, trace};

use crate::schema::{FieldBinding, SchemaRegistry, Shape};
use crate::style::{Rgba, StyleSink, Vec2};

/// The one reserved key a schema-bearing table may carry its value under.
///
/// `value` is consumed by the binding step and is never treated as a nested
/// path segment.
pub const VALUE_KEY: &str = "value";

/// Errors produced while binding a parsed style document.
#[derive(Debug, Error, PartialEq)]
pub enum BindError {
    /// A traversed path holds a scalar or array where a table is required.
    #[error("style node is not a table: `{fqn}`")]
    NotATable { fqn: String },

    /// A `value` entry does not match the shape the schema declares for its path.
    #[error("value for `{fqn}` is not {expected}")]
    ValueTypeMismatch { fqn: String, expected: Shape },
}

/// Binds one node of a parsed style document, then its descendants.
///
/// `fqn` is the node's fully-qualified dotted name; for a root-level table
/// that is just its key. Traversal is depth-first, parent before children,
/// aborting on the first error; siblings after a failing node are left
/// unprocessed, and writes already made are not rolled back.
///
/// # Errors
///
/// Returns [`BindError::NotATable`] when `node` is not a table, and
/// [`BindError::ValueTypeMismatch`] when a `value` entry does not match the
/// schema's declared shape.
pub fn bind_node<S: StyleSink>(fqn: &str, node: &Value, sink: &mut S) -> Result<(), BindError> {
    trace!("visiting style node `{fqn}`");

    let Some(table) = node.as_table() else {
        return Err(BindError::NotATable {
            fqn: fqn.to_string(),
        });
    };

    // A path with a schema entry may set its value directly here; a path
    // without one is an organizational grouping whose descendants may still
    // be configurable.
    if let Some(binding) = SchemaRegistry::lookup(fqn) {
        match table.get(VALUE_KEY) {
            Some(value) => apply_value(fqn, binding, value, sink)?,
            None => trace!("style node `{fqn}` sets no value at this level"),
        }
    }

    for (name, child) in table.iter() {
        // The reserved value key is consumed above, never a nested path.
        // Non-table children cannot hold further schema paths.
        if name == VALUE_KEY || !child.is_table() {
            continue;
        }
        let child_fqn = format!("{fqn}.{name}");
        bind_node(&child_fqn, child, sink)?;
    }

    Ok(())
}

/// Extracts a `value` entry per its schema binding and writes it through.
fn apply_value<S: StyleSink>(
    fqn: &str,
    binding: FieldBinding,
    value: &Value,
    sink: &mut S,
) -> Result<(), BindError> {
    match binding {
        FieldBinding::Scalar(var) => {
            let n = number(value).ok_or_else(|| mismatch(fqn, Shape::Scalar))?;
            debug!("style `{fqn}` sets {var:?} = {n}");
            sink.set_scalar(var, n);
        }
        FieldBinding::Pair(var) => {
            let [x, y] = numbers(value).ok_or_else(|| mismatch(fqn, Shape::Pair))?;
            debug!("style `{fqn}` sets {var:?} = [{x}, {y}]");
            sink.set_pair(var, Vec2::new(x, y));
        }
        FieldBinding::Color(slot) => {
            let [r, g, b, a] = numbers(value).ok_or_else(|| mismatch(fqn, Shape::Quad))?;
            debug!("style `{fqn}` sets color {slot:?} = [{r}, {g}, {b}, {a}]");
            sink.set_color(slot, Rgba::new(r, g, b, a));
        }
    }
    Ok(())
}

fn mismatch(fqn: &str, expected: Shape) -> BindError {
    BindError::ValueTypeMismatch {
        fqn: fqn.to_string(),
        expected,
    }
}

/// Extracts a single number. Style files write floats and bare integers
/// interchangeably (`value = 1` and `value = 1.0` are both accepted).
fn number(value: &Value) -> Option<f32> {
    match value {
        Value::Float(f) => Some(*f as f32),
        Value::Integer(i) => Some(*i as f32),
        _ => None,
    }
}

/// Extracts an array of exactly `N` numbers.
fn numbers<const N: usize>(value: &Value) -> Option<[f32; N]> {
    let array = value.as_array()?;
    if array.len() != N {
        return None;
    }
    let mut out = [0.0; N];
    for (slot, element) in out.iter_mut().zip(array) {
        *slot = number(element)?;
    }
    Some(out)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
