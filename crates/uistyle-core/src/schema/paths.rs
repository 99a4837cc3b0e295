//! The full path table: every configurable dotted path and its destination.
//!
//! Built at compile time as a `match`, the same way the key translation
//! tables map platform key codes. Adding a themeable field means adding the
//! destination enum variant, one match arm here, and the path's entry in
//! [`ALL_PATHS`].

use super::FieldBinding;
use crate::style::{ColorSlot, PairVar, ScalarVar};

/// Resolves a fully-qualified path to its schema entry.
///
/// Exact-match and case-sensitive; returns `None` for anything not in the
/// table.
pub fn descriptor(fqn: &str) -> Option<FieldBinding> {
    use ColorSlot::*;
    use FieldBinding::{Color, Pair, Scalar};

    Some(match fqn {
        // Color slots
        "text" => Color(Text),
        "text.disabled" => Color(TextDisabled),
        "window.bg" => Color(WindowBg),
        "child.bg" => Color(ChildBg),
        "popup.bg" => Color(PopupBg),
        "border" => Color(Border),
        "border.shadow" => Color(BorderShadow),
        "frame.bg" => Color(FrameBg),
        "frame.bg.hovered" => Color(FrameBgHovered),
        "frame.bg.active" => Color(FrameBgActive),
        "title.bg" => Color(TitleBg),
        "title.bg.active" => Color(TitleBgActive),
        "title.bg.collapsed" => Color(TitleBgCollapsed),
        "menu.bar.bg" => Color(MenuBarBg),
        "scrollbar.bg" => Color(ScrollbarBg),
        "scrollbar.grab" => Color(ScrollbarGrab),
        "scrollbar.grab.hovered" => Color(ScrollbarGrabHovered),
        "scrollbar.grab.active" => Color(ScrollbarGrabActive),
        "check.mark" => Color(CheckMark),
        "slider.grab" => Color(SliderGrab),
        "slider.grab.active" => Color(SliderGrabActive),
        "button" => Color(Button),
        "button.hovered" => Color(ButtonHovered),
        "button.active" => Color(ButtonActive),
        "header" => Color(Header),
        "header.hovered" => Color(HeaderHovered),
        "header.active" => Color(HeaderActive),
        "separator" => Color(Separator),
        "separator.hovered" => Color(SeparatorHovered),
        "separator.active" => Color(SeparatorActive),
        "resize.grip" => Color(ResizeGrip),
        "resize.grip.hovered" => Color(ResizeGripHovered),
        "resize.grip.active" => Color(ResizeGripActive),
        "tab" => Color(Tab),
        "tab.hovered" => Color(TabHovered),
        "tab.active" => Color(TabActive),
        "tab.unfocused" => Color(TabUnfocused),
        "tab.unfocused.active" => Color(TabUnfocusedActive),
        "plot.lines" => Color(PlotLines),
        "plot.lines.hovered" => Color(PlotLinesHovered),
        "plot.histogram" => Color(PlotHistogram),
        "plot.histogram.hovered" => Color(PlotHistogramHovered),
        "text.selected.bg" => Color(TextSelectedBg),
        "drag.drop.target" => Color(DragDropTarget),
        "nav.highlight" => Color(NavHighlight),
        "nav.windowing.highlight" => Color(NavWindowingHighlight),
        "nav.windowing.dim.bg" => Color(NavWindowingDimBg),
        "modal.window.dim.bg" => Color(ModalWindowDimBg),

        // Style variables
        "alpha" => Scalar(ScalarVar::Alpha),
        "window.padding" => Pair(PairVar::WindowPadding),
        "window.rounding" => Scalar(ScalarVar::WindowRounding),
        "window.border.size" => Scalar(ScalarVar::WindowBorderSize),
        "window.min.size" => Pair(PairVar::WindowMinSize),
        "window.title.align" => Pair(PairVar::WindowTitleAlign),
        "child.rounding" => Scalar(ScalarVar::ChildRounding),
        "child.border.size" => Scalar(ScalarVar::ChildBorderSize),
        "popup.rounding" => Scalar(ScalarVar::PopupRounding),
        "popup.border.size" => Scalar(ScalarVar::PopupBorderSize),
        "frame.padding" => Pair(PairVar::FramePadding),
        "frame.rounding" => Scalar(ScalarVar::FrameRounding),
        "frame.border.size" => Scalar(ScalarVar::FrameBorderSize),
        "item.spacing" => Pair(PairVar::ItemSpacing),
        "item.inner.spacing" => Pair(PairVar::ItemInnerSpacing),
        "indent.spacing" => Scalar(ScalarVar::IndentSpacing),
        "scrollbar.size" => Scalar(ScalarVar::ScrollbarSize),
        "scrollbar.rounding" => Scalar(ScalarVar::ScrollbarRounding),
        "grab.min.size" => Scalar(ScalarVar::GrabMinSize),
        "grab.rounding" => Scalar(ScalarVar::GrabRounding),
        "tab.rounding" => Scalar(ScalarVar::TabRounding),
        "button.text.align" => Pair(PairVar::ButtonTextAlign),
        "selectable.text.align" => Pair(PairVar::SelectableTextAlign),

        _ => return None,
    })
}

/// Every path registered in the schema, in catalogue order.
///
/// Kept in lockstep with [`descriptor`]; the schema tests assert that every
/// listed path resolves and that the counts match the destination enums.
pub const ALL_PATHS: &[&str] = &[
    // Color slots
    "text",
    "text.disabled",
    "window.bg",
    "child.bg",
    "popup.bg",
    "border",
    "border.shadow",
    "frame.bg",
    "frame.bg.hovered",
    "frame.bg.active",
    "title.bg",
    "title.bg.active",
    "title.bg.collapsed",
    "menu.bar.bg",
    "scrollbar.bg",
    "scrollbar.grab",
    "scrollbar.grab.hovered",
    "scrollbar.grab.active",
    "check.mark",
    "slider.grab",
    "slider.grab.active",
    "button",
    "button.hovered",
    "button.active",
    "header",
    "header.hovered",
    "header.active",
    "separator",
    "separator.hovered",
    "separator.active",
    "resize.grip",
    "resize.grip.hovered",
    "resize.grip.active",
    "tab",
    "tab.hovered",
    "tab.active",
    "tab.unfocused",
    "tab.unfocused.active",
    "plot.lines",
    "plot.lines.hovered",
    "plot.histogram",
    "plot.histogram.hovered",
    "text.selected.bg",
    "drag.drop.target",
    "nav.highlight",
    "nav.windowing.highlight",
    "nav.windowing.dim.bg",
    "modal.window.dim.bg",
    // Style variables
    "alpha",
    "window.padding",
    "window.rounding",
    "window.border.size",
    "window.min.size",
    "window.title.align",
    "child.rounding",
    "child.border.size",
    "popup.rounding",
    "popup.border.size",
    "frame.padding",
    "frame.rounding",
    "frame.border.size",
    "item.spacing",
    "item.inner.spacing",
    "indent.spacing",
    "scrollbar.size",
    "scrollbar.rounding",
    "grab.min.size",
    "grab.rounding",
    "tab.rounding",
    "button.text.align",
    "selectable.text.align",
];
