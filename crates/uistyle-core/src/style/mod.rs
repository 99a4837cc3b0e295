//! The destination style store.
//!
//! [`Style`] is the single live struct instance all themeable values are
//! written into: a fixed table of [`ColorSlot::COUNT`] colors plus a flat set
//! of named scalar/pair variables. The host toolkit owns it; the binder only
//! writes through the [`StyleSink`] trait, never allocating or resizing.
//!
//! Writes are dispatched by enumerated identifier ([`ColorSlot`],
//! [`ScalarVar`], [`PairVar`]) through an O(1) `match`, so there is no raw
//! offset arithmetic anywhere in the store.

pub mod color;
pub mod vars;

pub use color::{ColorSlot, Rgba};
pub use vars::{PairVar, ScalarVar, Vec2};

/// The typed write interface the tree binder targets.
///
/// [`Style`] is the production implementation. Tests substitute a recording
/// sink to observe the exact sequence of writes without a full store.
pub trait StyleSink {
    /// Writes `color` into the color table entry for `slot`.
    fn set_color(&mut self, slot: ColorSlot, color: Rgba);

    /// Writes `value` into the named scalar field for `var`.
    fn set_scalar(&mut self, var: ScalarVar, value: f32);

    /// Writes `value` into the named pair field for `var`.
    fn set_pair(&mut self, var: PairVar, value: Vec2);
}

/// The complete visual style of the toolkit.
///
/// Field defaults are the toolkit's built-in metrics; colors start
/// [`Rgba::TRANSPARENT`] until the host palette or a style file fills
/// them in.
#[derive(Debug, Clone, PartialEq)]
pub struct Style {
    /// Global alpha applied to all rendering, 0.0–1.0.
    pub alpha: f32,
    /// Padding between a window's border and its content.
    pub window_padding: Vec2,
    /// Corner rounding radius of windows, in pixels.
    pub window_rounding: f32,
    /// Border thickness of windows, in pixels.
    pub window_border_size: f32,
    /// Minimum window size.
    pub window_min_size: Vec2,
    /// Title text alignment; (0, 0.5) is left-centered.
    pub window_title_align: Vec2,
    /// Corner rounding radius of child regions.
    pub child_rounding: f32,
    /// Border thickness of child regions.
    pub child_border_size: f32,
    /// Corner rounding radius of popups.
    pub popup_rounding: f32,
    /// Border thickness of popups.
    pub popup_border_size: f32,
    /// Padding between a framed widget's border and its content.
    pub frame_padding: Vec2,
    /// Corner rounding radius of framed widgets.
    pub frame_rounding: f32,
    /// Border thickness of framed widgets.
    pub frame_border_size: f32,
    /// Spacing between consecutive widgets.
    pub item_spacing: Vec2,
    /// Spacing within a composite widget (e.g. label and checkbox).
    pub item_inner_spacing: Vec2,
    /// Horizontal indentation of tree nodes and such.
    pub indent_spacing: f32,
    /// Width of the vertical scrollbar, height of the horizontal one.
    pub scrollbar_size: f32,
    /// Corner rounding radius of scrollbar grabs.
    pub scrollbar_rounding: f32,
    /// Minimum size of a slider/scrollbar grab box.
    pub grab_min_size: f32,
    /// Corner rounding radius of grab boxes.
    pub grab_rounding: f32,
    /// Corner rounding radius of tabs.
    pub tab_rounding: f32,
    /// Button label alignment; (0.5, 0.5) is centered.
    pub button_text_align: Vec2,
    /// Selectable label alignment.
    pub selectable_text_align: Vec2,
    /// The color table, indexed by [`ColorSlot`].
    pub colors: [Rgba; ColorSlot::COUNT],
}

impl Default for Style {
    fn default() -> Self {
        Self {
            alpha: 1.0,
            window_padding: Vec2::new(8.0, 8.0),
            window_rounding: 7.0,
            window_border_size: 1.0,
            window_min_size: Vec2::new(32.0, 32.0),
            window_title_align: Vec2::new(0.0, 0.5),
            child_rounding: 0.0,
            child_border_size: 1.0,
            popup_rounding: 0.0,
            popup_border_size: 1.0,
            frame_padding: Vec2::new(4.0, 3.0),
            frame_rounding: 0.0,
            frame_border_size: 0.0,
            item_spacing: Vec2::new(8.0, 4.0),
            item_inner_spacing: Vec2::new(4.0, 4.0),
            indent_spacing: 21.0,
            scrollbar_size: 14.0,
            scrollbar_rounding: 9.0,
            grab_min_size: 10.0,
            grab_rounding: 0.0,
            tab_rounding: 4.0,
            button_text_align: Vec2::new(0.5, 0.5),
            selectable_text_align: Vec2::new(0.0, 0.0),
            colors: [Rgba::TRANSPARENT; ColorSlot::COUNT],
        }
    }
}

impl Style {
    /// Returns the color stored in the table entry for `slot`.
    pub fn color(&self, slot: ColorSlot) -> Rgba {
        self.colors[slot.index()]
    }

    /// Returns the value of the named scalar field for `var`.
    pub fn scalar(&self, var: ScalarVar) -> f32 {
        match var {
            ScalarVar::Alpha => self.alpha,
            ScalarVar::WindowRounding => self.window_rounding,
            ScalarVar::WindowBorderSize => self.window_border_size,
            ScalarVar::ChildRounding => self.child_rounding,
            ScalarVar::ChildBorderSize => self.child_border_size,
            ScalarVar::PopupRounding => self.popup_rounding,
            ScalarVar::PopupBorderSize => self.popup_border_size,
            ScalarVar::FrameRounding => self.frame_rounding,
            ScalarVar::FrameBorderSize => self.frame_border_size,
            ScalarVar::IndentSpacing => self.indent_spacing,
            ScalarVar::ScrollbarSize => self.scrollbar_size,
            ScalarVar::ScrollbarRounding => self.scrollbar_rounding,
            ScalarVar::GrabMinSize => self.grab_min_size,
            ScalarVar::GrabRounding => self.grab_rounding,
            ScalarVar::TabRounding => self.tab_rounding,
        }
    }

    /// Returns the value of the named pair field for `var`.
    pub fn pair(&self, var: PairVar) -> Vec2 {
        match var {
            PairVar::WindowPadding => self.window_padding,
            PairVar::WindowMinSize => self.window_min_size,
            PairVar::WindowTitleAlign => self.window_title_align,
            PairVar::FramePadding => self.frame_padding,
            PairVar::ItemSpacing => self.item_spacing,
            PairVar::ItemInnerSpacing => self.item_inner_spacing,
            PairVar::ButtonTextAlign => self.button_text_align,
            PairVar::SelectableTextAlign => self.selectable_text_align,
        }
    }
}

impl StyleSink for Style {
    fn set_color(&mut self, slot: ColorSlot, color: Rgba) {
        self.colors[slot.index()] = color;
    }

    fn set_scalar(&mut self, var: ScalarVar, value: f32) {
        match var {
            ScalarVar::Alpha => self.alpha = value,
            ScalarVar::WindowRounding => self.window_rounding = value,
            ScalarVar::WindowBorderSize => self.window_border_size = value,
            ScalarVar::ChildRounding => self.child_rounding = value,
            ScalarVar::ChildBorderSize => self.child_border_size = value,
            ScalarVar::PopupRounding => self.popup_rounding = value,
            ScalarVar::PopupBorderSize => self.popup_border_size = value,
            ScalarVar::FrameRounding => self.frame_rounding = value,
            ScalarVar::FrameBorderSize => self.frame_border_size = value,
            ScalarVar::IndentSpacing => self.indent_spacing = value,
            ScalarVar::ScrollbarSize => self.scrollbar_size = value,
            ScalarVar::ScrollbarRounding => self.scrollbar_rounding = value,
            ScalarVar::GrabMinSize => self.grab_min_size = value,
            ScalarVar::GrabRounding => self.grab_rounding = value,
            ScalarVar::TabRounding => self.tab_rounding = value,
        }
    }

    fn set_pair(&mut self, var: PairVar, value: Vec2) {
        match var {
            PairVar::WindowPadding => self.window_padding = value,
            PairVar::WindowMinSize => self.window_min_size = value,
            PairVar::WindowTitleAlign => self.window_title_align = value,
            PairVar::FramePadding => self.frame_padding = value,
            PairVar::ItemSpacing => self.item_spacing = value,
            PairVar::ItemInnerSpacing => self.item_inner_spacing = value,
            PairVar::ButtonTextAlign => self.button_text_align = value,
            PairVar::SelectableTextAlign => self.selectable_text_align = value,
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_style_has_unit_alpha() {
        let style = Style::default();
        assert_eq!(style.alpha, 1.0);
    }

    #[test]
    fn test_default_style_colors_are_all_transparent() {
        let style = Style::default();
        assert!(style.colors.iter().all(|c| *c == Rgba::TRANSPARENT));
    }

    #[test]
    fn test_default_style_has_expected_metrics() {
        let style = Style::default();
        assert_eq!(style.window_padding, Vec2::new(8.0, 8.0));
        assert_eq!(style.frame_padding, Vec2::new(4.0, 3.0));
        assert_eq!(style.scrollbar_size, 14.0);
    }

    #[test]
    fn test_set_color_writes_only_the_addressed_slot() {
        let mut style = Style::default();
        let red = Rgba::new(1.0, 0.0, 0.0, 1.0);

        style.set_color(ColorSlot::Button, red);

        assert_eq!(style.color(ColorSlot::Button), red);
        assert_eq!(style.color(ColorSlot::ButtonHovered), Rgba::TRANSPARENT);
        assert_eq!(style.color(ColorSlot::Text), Rgba::TRANSPARENT);
    }

    #[test]
    fn test_set_scalar_dispatches_to_the_named_field() {
        let mut style = Style::default();

        style.set_scalar(ScalarVar::WindowRounding, 2.5);

        assert_eq!(style.window_rounding, 2.5);
        assert_eq!(style.scalar(ScalarVar::WindowRounding), 2.5);
        // Neighbouring fields stay untouched
        assert_eq!(style.window_border_size, 1.0);
    }

    #[test]
    fn test_set_pair_dispatches_to_the_named_field() {
        let mut style = Style::default();

        style.set_pair(PairVar::ItemSpacing, Vec2::new(12.0, 6.0));

        assert_eq!(style.item_spacing, Vec2::new(12.0, 6.0));
        assert_eq!(style.pair(PairVar::ItemSpacing), Vec2::new(12.0, 6.0));
    }

    #[test]
    fn test_scalar_accessor_round_trips_every_variable() {
        let mut style = Style::default();
        let vars = [
            ScalarVar::Alpha,
            ScalarVar::WindowRounding,
            ScalarVar::WindowBorderSize,
            ScalarVar::ChildRounding,
            ScalarVar::ChildBorderSize,
            ScalarVar::PopupRounding,
            ScalarVar::PopupBorderSize,
            ScalarVar::FrameRounding,
            ScalarVar::FrameBorderSize,
            ScalarVar::IndentSpacing,
            ScalarVar::ScrollbarSize,
            ScalarVar::ScrollbarRounding,
            ScalarVar::GrabMinSize,
            ScalarVar::GrabRounding,
            ScalarVar::TabRounding,
        ];

        for (i, var) in vars.into_iter().enumerate() {
            let value = 100.0 + i as f32;
            style.set_scalar(var, value);
            assert_eq!(style.scalar(var), value, "{var:?} must round-trip");
        }
    }

    #[test]
    fn test_pair_accessor_round_trips_every_variable() {
        let mut style = Style::default();
        let vars = [
            PairVar::WindowPadding,
            PairVar::WindowMinSize,
            PairVar::WindowTitleAlign,
            PairVar::FramePadding,
            PairVar::ItemSpacing,
            PairVar::ItemInnerSpacing,
            PairVar::ButtonTextAlign,
            PairVar::SelectableTextAlign,
        ];

        for (i, var) in vars.into_iter().enumerate() {
            let value = Vec2::new(i as f32, i as f32 + 0.5);
            style.set_pair(var, value);
            assert_eq!(style.pair(var), value, "{var:?} must round-trip");
        }
    }

    #[test]
    fn test_rgba_converts_to_and_from_component_array() {
        let c = Rgba::new(0.1, 0.2, 0.3, 0.4);
        let arr: [f32; 4] = c.into();
        assert_eq!(arr, [0.1, 0.2, 0.3, 0.4]);
        assert_eq!(Rgba::from(arr), c);
    }

    #[test]
    fn test_color_slot_index_matches_discriminant() {
        assert_eq!(ColorSlot::Text.index(), 0);
        assert_eq!(ColorSlot::ModalWindowDimBg.index(), ColorSlot::COUNT - 1);
    }
}
