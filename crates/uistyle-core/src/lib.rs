//! # uistyle-core
//!
//! Shared library for the UIStyle theme loader containing the destination
//! style store, the static schema table, and the recursive tree binder.
//!
//! This crate is pure: no file I/O, no OS APIs, no rendering. The loader
//! crate parses style files and feeds the resulting tree in; the host
//! toolkit owns the [`Style`] instance the binder writes into.
//!
//! # How a style file becomes a styled toolkit (for beginners)
//!
//! A style file is a nested TOML document. Each table's position in the
//! nesting forms a dotted path (`window.bg`, `frame.padding`, …), and a
//! fixed schema maps every recognized path to one typed destination field:
//! either an entry in the color table or a named scalar/pair variable.
//! A table sets its field by carrying the reserved `value` key:
//!
//! ```toml
//! [text]
//!     value = [1.00, 1.00, 1.00, 1.00]
//!
//!     [text.disabled]
//!         value = [0.50, 0.50, 0.50, 1.00]
//!
//! [alpha]
//!     value = 1
//!
//! [window.padding]
//!     value = [8, 8]
//! ```
//!
//! The three modules mirror that pipeline:
//!
//! - **`style`** – the destination store: the [`Style`] struct, its color
//!   table and named variables, and the [`StyleSink`] write interface.
//!
//! - **`schema`** – the static registry: an immutable, compile-time table
//!   from dotted path to destination field.
//!
//! - **`bind`** – the recursive binder that walks a parsed tree, resolves
//!   each table's fully-qualified name against the schema, type-checks leaf
//!   values, and writes them through.

pub mod bind;
pub mod schema;
pub mod style;

// Re-export the most-used types at the crate root so callers can write
// `uistyle_core::Style` instead of `uistyle_core::style::Style`.
pub use bind::{bind_node, BindError, VALUE_KEY};
pub use schema::{FieldBinding, FieldKind, SchemaRegistry, Shape, ALL_PATHS};
pub use style::{ColorSlot, PairVar, Rgba, ScalarVar, Style, StyleSink, Vec2};
