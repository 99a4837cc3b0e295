//! Color primitives and the fixed color-slot table of the style store.
//!
//! Every themeable color in the toolkit has a dedicated slot in a fixed-size
//! table on [`Style`](super::Style). Slots are addressed by [`ColorSlot`],
//! whose numeric value is the direct index into that table.

use serde::{Deserialize, Serialize};

/// An RGBA color with `f32` components, each in the 0.0–1.0 range.
///
/// Serializes as a plain 4-element array (`[r, g, b, a]`), matching the
/// literal form authors write in style files.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(into = "[f32; 4]", from = "[f32; 4]")]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    /// Fully transparent black – the neutral value every slot holds until a
    /// host palette or a style file fills it in.
    pub const TRANSPARENT: Self = Self {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 0.0,
    };

    /// Creates a color from its four components.
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }
}

impl From<[f32; 4]> for Rgba {
    fn from([r, g, b, a]: [f32; 4]) -> Self {
        Self { r, g, b, a }
    }
}

impl From<Rgba> for [f32; 4] {
    fn from(c: Rgba) -> Self {
        [c.r, c.g, c.b, c.a]
    }
}

/// Identifies one entry in the fixed color table of [`Style`](super::Style).
///
/// The numeric value of each variant is its index into the table. The set of
/// slots is part of the toolkit's contract with its widgets and never changes
/// at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(usize)]
pub enum ColorSlot {
    Text = 0,
    TextDisabled = 1,
    WindowBg = 2,
    ChildBg = 3,
    PopupBg = 4,
    Border = 5,
    BorderShadow = 6,
    FrameBg = 7,
    FrameBgHovered = 8,
    FrameBgActive = 9,
    TitleBg = 10,
    TitleBgActive = 11,
    TitleBgCollapsed = 12,
    MenuBarBg = 13,
    ScrollbarBg = 14,
    ScrollbarGrab = 15,
    ScrollbarGrabHovered = 16,
    ScrollbarGrabActive = 17,
    CheckMark = 18,
    SliderGrab = 19,
    SliderGrabActive = 20,
    Button = 21,
    ButtonHovered = 22,
    ButtonActive = 23,
    Header = 24,
    HeaderHovered = 25,
    HeaderActive = 26,
    Separator = 27,
    SeparatorHovered = 28,
    SeparatorActive = 29,
    ResizeGrip = 30,
    ResizeGripHovered = 31,
    ResizeGripActive = 32,
    Tab = 33,
    TabHovered = 34,
    TabActive = 35,
    TabUnfocused = 36,
    TabUnfocusedActive = 37,
    PlotLines = 38,
    PlotLinesHovered = 39,
    PlotHistogram = 40,
    PlotHistogramHovered = 41,
    TextSelectedBg = 42,
    DragDropTarget = 43,
    NavHighlight = 44,
    NavWindowingHighlight = 45,
    NavWindowingDimBg = 46,
    ModalWindowDimBg = 47,
}

impl ColorSlot {
    /// Number of color slots in the table.
    pub const COUNT: usize = 48;

    /// Returns the slot's index into the color table.
    pub const fn index(self) -> usize {
        self as usize
    }
}
