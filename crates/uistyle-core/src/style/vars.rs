//! Named scalar and pair style variables.
//!
//! Unlike colors, style variables live in individual named fields on
//! [`Style`](super::Style) rather than a uniform table. They are addressed by
//! the [`ScalarVar`] and [`PairVar`] enums; the split by arity makes a
//! mismatched write (a pair into a scalar field, or vice versa)
//! unrepresentable.

use serde::{Deserialize, Serialize};

/// A 2-component vector used for paddings, spacings, and alignments.
///
/// Serializes as a plain 2-element array (`[x, y]`), matching the literal
/// form authors write in style files.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(into = "[f32; 2]", from = "[f32; 2]")]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    /// Creates a vector from its two components.
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl From<[f32; 2]> for Vec2 {
    fn from([x, y]: [f32; 2]) -> Self {
        Self { x, y }
    }
}

impl From<Vec2> for [f32; 2] {
    fn from(v: Vec2) -> Self {
        [v.x, v.y]
    }
}

/// Identifies a single-`f32` style field on [`Style`](super::Style).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarVar {
    Alpha,
    WindowRounding,
    WindowBorderSize,
    ChildRounding,
    ChildBorderSize,
    PopupRounding,
    PopupBorderSize,
    FrameRounding,
    FrameBorderSize,
    IndentSpacing,
    ScrollbarSize,
    ScrollbarRounding,
    GrabMinSize,
    GrabRounding,
    TabRounding,
}

/// Identifies a [`Vec2`] style field on [`Style`](super::Style).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PairVar {
    WindowPadding,
    WindowMinSize,
    WindowTitleAlign,
    FramePadding,
    ItemSpacing,
    ItemInnerSpacing,
    ButtonTextAlign,
    SelectableTextAlign,
}
