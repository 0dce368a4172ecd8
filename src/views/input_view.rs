//! What a frontend paints for one fake input.

use crate::kernel::FakeInput;
use crate::metrics::TextMetrics;
use crate::models::grapheme_prefix;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CaretGeometry {
    /// Relative to the box's left inner edge.
    pub x: f32,
    pub height: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SelectionHighlight {
    pub left: f32,
    pub width: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RenderState {
    pub text: String,
    pub is_placeholder: bool,
    /// Horizontal translation applied to the text node (≤ 0).
    pub translate_x: f32,
    pub caret: Option<CaretGeometry>,
    pub selection: Option<SelectionHighlight>,
    pub box_width: f32,
    pub box_height: f32,
}

pub fn render_state(input: &FakeInput, metrics: &dyn TextMetrics) -> RenderState {
    let geometry = input.geometry();
    let placeholder = if input.is_empty() && !input.is_focused() {
        input.placeholder()
    } else {
        None
    };

    let (text, is_placeholder, translate_x) = match placeholder {
        Some(placeholder) => (placeholder.to_string(), true, 0.0),
        None => (input.value().to_string(), false, input.scroll_offset()),
    };

    RenderState {
        text,
        is_placeholder,
        translate_x,
        caret: caret_geometry(input, metrics),
        selection: selection_highlight(input, metrics),
        box_width: geometry.width,
        box_height: geometry.height,
    }
}

/// `max(0, min(caret + caretAdjustment, box - rightEdgeAdjustment))`, shown only
/// while focused with a collapsed selection.
pub fn caret_geometry(input: &FakeInput, metrics: &dyn TextMetrics) -> Option<CaretGeometry> {
    if !input.caret_visible() {
        return None;
    }
    let geometry = input.geometry();
    let options = input.options();
    let x = input.caret_pixel_offset(metrics) + options.caret_adjustment;
    let right = geometry.width - options.right_edge_adjustment.max(0.0);
    Some(CaretGeometry {
        x: x.min(right).max(0.0),
        height: geometry.height,
    })
}

fn selection_highlight(input: &FakeInput, metrics: &dyn TextMetrics) -> Option<SelectionHighlight> {
    let caret = input.caret();
    if !input.is_focused() || !caret.has_selection() {
        return None;
    }

    let text = input.value();
    let font = input.font();
    let scroll = input.scroll_offset();
    let start_x = metrics.measure_width(grapheme_prefix(text, caret.start()), font) + scroll;
    let end_x = metrics.measure_width(grapheme_prefix(text, caret.end()), font) + scroll;

    let box_width = input.geometry().width;
    let left = start_x.clamp(0.0, box_width);
    let right = end_x.clamp(0.0, box_width);
    Some(SelectionHighlight {
        left,
        width: (right - left).max(0.0),
    })
}

#[cfg(test)]
#[path = "../../tests/unit/views/input_view.rs"]
mod tests;
