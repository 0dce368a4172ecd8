//! 单个 fake input 实例的状态
//!
//! The caret's rendered position is always derived from
//! `(text, selection end, scroll offset, metrics)` and never stored.

use crate::metrics::{FontDescriptor, TextMetrics};
use crate::models::{Caret, ScrollModel, TextBuffer};

use super::effect::{Effect, NotificationKind};
use super::services::ports::{
    ElementSnapshot, FakeInputOptions, ValidationBackend, Validity,
};

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BoxGeometry {
    /// Inner width of the visible box, in pixels.
    pub width: f32,
    pub height: f32,
}

impl BoxGeometry {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractionState {
    Blurred,
    Focused { has_selection: bool },
}

#[derive(Debug, Clone)]
pub struct FakeInput {
    pub(super) original: ElementSnapshot,
    pub(super) buffer: TextBuffer,
    pub(super) caret: Caret,
    pub(super) scroll: ScrollModel,
    pub(super) focused: bool,
    pub(super) has_changed: bool,
    pub(super) options: FakeInputOptions,
    pub(super) font: FontDescriptor,
    pub(super) geometry: BoxGeometry,
    pub(super) custom_validity: String,
}

impl FakeInput {
    /// Seeds the text from the element's `value` attribute, caret at the end.
    pub fn new(original: ElementSnapshot, options: FakeInputOptions, font: FontDescriptor) -> Self {
        let max_length = options.max_length.or_else(|| original.usize_attr("maxlength"));
        let buffer = TextBuffer::with_max_length(original.attr("value").unwrap_or(""), max_length);
        let caret = Caret::new(buffer.len());
        Self {
            original,
            buffer,
            caret,
            scroll: ScrollModel::new(),
            focused: false,
            has_changed: false,
            options,
            font,
            geometry: BoxGeometry::default(),
            custom_validity: String::new(),
        }
    }

    pub fn original(&self) -> &ElementSnapshot {
        &self.original
    }

    pub fn value(&self) -> &str {
        self.buffer.text()
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn selection_start(&self) -> usize {
        self.caret.start()
    }

    pub fn selection_end(&self) -> usize {
        self.caret.end()
    }

    pub fn caret(&self) -> Caret {
        self.caret
    }

    pub fn scroll_offset(&self) -> f32 {
        self.scroll.offset()
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn has_changed(&self) -> bool {
        self.has_changed
    }

    pub fn options(&self) -> &FakeInputOptions {
        &self.options
    }

    pub fn font(&self) -> &FontDescriptor {
        &self.font
    }

    pub fn geometry(&self) -> BoxGeometry {
        self.geometry
    }

    pub fn max_length(&self) -> Option<usize> {
        self.buffer.max_length()
    }

    pub fn placeholder(&self) -> Option<&str> {
        self.original.attr("placeholder")
    }

    pub fn state(&self) -> InteractionState {
        if self.focused {
            InteractionState::Focused {
                has_selection: self.caret.has_selection(),
            }
        } else {
            InteractionState::Blurred
        }
    }

    /// Native inputs hide the caret while a range is selected.
    pub fn caret_visible(&self) -> bool {
        self.focused && self.caret.is_collapsed()
    }

    pub fn content_width(&self, metrics: &dyn TextMetrics) -> f32 {
        metrics.measure_width(self.buffer.text(), &self.font)
    }

    /// Caret x relative to the box's left inner edge.
    pub fn caret_pixel_offset(&self, metrics: &dyn TextMetrics) -> f32 {
        self.caret
            .pixel_offset(self.buffer.text(), self.scroll.offset(), metrics, &self.font)
    }

    /// `value` setter: truncates to `maxLength`, re-clamps the selection.
    pub fn set_value(&mut self, value: &str, metrics: &dyn TextMetrics) -> bool {
        let changed = self.buffer.set_value(value);
        if changed {
            self.has_changed = true;
        }
        if self.buffer.is_empty() {
            self.caret.move_to(0, 0);
            self.scroll.reset();
        } else {
            self.caret.clamp(self.buffer.len());
        }
        self.follow_caret(metrics);
        changed
    }

    pub fn set_selection_start(&mut self, offset: usize, metrics: &dyn TextMetrics) {
        self.caret.set_start(offset, self.buffer.len());
        self.follow_caret(metrics);
    }

    pub fn set_selection_end(&mut self, offset: usize, metrics: &dyn TextMetrics) {
        self.caret.set_end(offset, self.buffer.len());
        self.follow_caret(metrics);
    }

    pub fn set_selection_range(&mut self, start: usize, end: usize, metrics: &dyn TextMetrics) {
        self.caret.select(start, end, self.buffer.len());
        self.follow_caret(metrics);
    }

    pub fn set_geometry(&mut self, geometry: BoxGeometry, metrics: &dyn TextMetrics) -> bool {
        if self.geometry == geometry {
            return false;
        }
        self.geometry = geometry;
        self.follow_caret(metrics);
        true
    }

    pub fn set_font(&mut self, font: FontDescriptor, metrics: &dyn TextMetrics) {
        self.font = font;
        self.follow_caret(metrics);
    }

    /// Applies new options; a changed `maxLength` truncates the value.
    pub fn set_options(&mut self, options: FakeInputOptions, metrics: &dyn TextMetrics) {
        let max_length = options
            .max_length
            .or_else(|| self.original.usize_attr("maxlength"));
        if self.buffer.set_max_length(max_length) {
            self.has_changed = true;
            self.caret.clamp(self.buffer.len());
        }
        self.options = options;
        self.follow_caret(metrics);
    }

    /// Re-derives the scroll offset so the caret sits inside the edge margins.
    pub(super) fn follow_caret(&mut self, metrics: &dyn TextMetrics) -> bool {
        let caret_x = self.caret.text_x(self.buffer.text(), metrics, &self.font);
        let content_width = self.content_width(metrics);
        self.scroll.follow(
            caret_x,
            self.geometry.width,
            self.options.edge_margins(),
            content_width,
        )
    }

    /// Attributes a doppelganger input would carry.
    pub fn validation_element(&self) -> ElementSnapshot {
        let mut element = self.original.clone();
        element.set_attr("value", self.buffer.text());
        if let Some(max) = self.buffer.max_length() {
            element.set_attr("maxlength", &max.to_string());
        }
        element
    }

    pub fn validity(&self, backend: &dyn ValidationBackend) -> Validity {
        backend.validate(
            &self.validation_element(),
            self.buffer.text(),
            &self.custom_validity,
        )
    }

    pub fn will_validate(&self, backend: &dyn ValidationBackend) -> bool {
        backend.will_validate(&self.original)
    }

    pub fn set_custom_validity(&mut self, message: &str) {
        self.custom_validity = message.to_string();
    }

    /// `checkValidity()`: the `invalid` event is only raised with validation integration on.
    pub fn check_validity(&self, backend: &dyn ValidationBackend) -> (bool, Option<Effect>) {
        let valid = self.validity(backend).state.valid();
        let effect = (!valid && self.options.integrate_validations)
            .then_some(Effect::Notify(NotificationKind::Invalid));
        (valid, effect)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/state.rs"]
mod tests;
