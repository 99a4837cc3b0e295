//! The static schema: which dotted paths a style file may configure, and
//! where each one lands in the destination store.
//!
//! # What is a fully-qualified name? (for beginners)
//!
//! Style files are nested TOML tables. The position of a table in that
//! nesting is flattened into a dotted string called its *fully-qualified
//! name* (FQN): a table `[window.bg]` has the FQN `window.bg`, and a table
//! `[disabled]` nested inside `[text]` has the FQN `text.disabled`. The FQN
//! is the one and only lookup key into the schema – there is no parallel
//! tree of schema nodes mirroring the document.
//!
//! Lookups are exact-match and case-sensitive (`Text` is not a schema path;
//! `text` is). The table itself lives in [`paths`] and is fixed at compile
//! time: the set of configurable paths is part of the toolkit's contract,
//! not user data, so there is no insertion or removal API.

pub mod paths;

use std::fmt;

use crate::style::{ColorSlot, PairVar, ScalarVar};

pub use paths::ALL_PATHS;

/// The expected arity of a leaf value in a style file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// A single number.
    Scalar,
    /// An array of exactly 2 numbers.
    Pair,
    /// An array of exactly 4 numbers.
    Quad,
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scalar => write!(f, "a single floating-point number"),
            Self::Pair => write!(f, "an array of 2 floating-point numbers"),
            Self::Quad => write!(f, "an array of 4 floating-point numbers"),
        }
    }
}

/// Whether a schema entry targets the color table or a named style variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    ColorSlot,
    StyleVariable,
}

/// Destination of one schema entry: which field a bound value is written to.
///
/// The variant fixes both the target and the value shape, so an
/// impossible combination – a color fed anything but 4 components – cannot
/// be constructed in the first place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldBinding {
    /// An entry in the color table. Colors always take 4 components.
    Color(ColorSlot),
    /// A named single-`f32` style field.
    Scalar(ScalarVar),
    /// A named 2-component style field.
    Pair(PairVar),
}

impl FieldBinding {
    /// Returns whether this entry targets the color table or a style variable.
    pub fn kind(self) -> FieldKind {
        match self {
            Self::Color(_) => FieldKind::ColorSlot,
            Self::Scalar(_) | Self::Pair(_) => FieldKind::StyleVariable,
        }
    }

    /// Returns the value shape this entry requires.
    pub fn shape(self) -> Shape {
        match self {
            Self::Color(_) => Shape::Quad,
            Self::Scalar(_) => Shape::Scalar,
            Self::Pair(_) => Shape::Pair,
        }
    }
}

/// Facade over the static path table.
pub struct SchemaRegistry;

impl SchemaRegistry {
    /// Looks up the schema entry for a fully-qualified path.
    ///
    /// Returns `None` for paths that carry no schema entry of their own;
    /// such paths are purely organizational and never an error.
    pub fn lookup(fqn: &str) -> Option<FieldBinding> {
        paths::descriptor(fqn)
    }

    /// Returns every path registered in the schema.
    pub fn paths() -> &'static [&'static str] {
        paths::ALL_PATHS
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_registered_path_resolves_to_a_binding() {
        for path in SchemaRegistry::paths() {
            assert!(
                SchemaRegistry::lookup(path).is_some(),
                "path {path:?} is listed but does not resolve"
            );
        }
    }

    #[test]
    fn test_color_entries_are_always_quad_shaped() {
        for path in SchemaRegistry::paths() {
            let binding = SchemaRegistry::lookup(path).unwrap();
            if binding.kind() == FieldKind::ColorSlot {
                assert_eq!(
                    binding.shape(),
                    Shape::Quad,
                    "color path {path:?} must take 4 components"
                );
            }
        }
    }

    #[test]
    fn test_registered_paths_are_unique() {
        let mut seen = std::collections::HashSet::new();
        for path in SchemaRegistry::paths() {
            assert!(seen.insert(path), "path {path:?} is registered twice");
        }
    }

    #[test]
    fn test_catalogue_has_expected_sizes() {
        let colors = SchemaRegistry::paths()
            .iter()
            .filter(|p| SchemaRegistry::lookup(p).unwrap().kind() == FieldKind::ColorSlot)
            .count();
        let vars = SchemaRegistry::paths().len() - colors;

        assert_eq!(colors, crate::style::ColorSlot::COUNT);
        assert_eq!(vars, 23);
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        assert!(SchemaRegistry::lookup("text").is_some());
        assert!(SchemaRegistry::lookup("Text").is_none());
        assert!(SchemaRegistry::lookup("TEXT").is_none());
    }

    #[test]
    fn test_lookup_matches_whole_path_only() {
        assert!(SchemaRegistry::lookup("window.bg").is_some());
        assert!(SchemaRegistry::lookup("window.bg.").is_none());
        assert!(SchemaRegistry::lookup(".window.bg").is_none());
        assert!(SchemaRegistry::lookup("window .bg").is_none());
    }

    #[test]
    fn test_lookup_returns_none_for_unknown_path() {
        assert!(SchemaRegistry::lookup("window.unknown.option").is_none());
        assert!(SchemaRegistry::lookup("").is_none());
    }

    #[test]
    fn test_known_bindings_resolve_to_expected_targets() {
        use crate::style::{ColorSlot, PairVar, ScalarVar};

        assert_eq!(
            SchemaRegistry::lookup("window.bg"),
            Some(FieldBinding::Color(ColorSlot::WindowBg))
        );
        assert_eq!(
            SchemaRegistry::lookup("alpha"),
            Some(FieldBinding::Scalar(ScalarVar::Alpha))
        );
        assert_eq!(
            SchemaRegistry::lookup("window.padding"),
            Some(FieldBinding::Pair(PairVar::WindowPadding))
        );
    }

    #[test]
    fn test_shape_display_names_the_expected_arity() {
        assert_eq!(Shape::Scalar.to_string(), "a single floating-point number");
        assert_eq!(Shape::Pair.to_string(), "an array of 2 floating-point numbers");
        assert_eq!(Shape::Quad.to_string(), "an array of 4 floating-point numbers");
    }
}
