//! 光标 / 选区模型
//!
//! `start <= end <= len` holds after every operation; out-of-range input is
//! clamped, never rejected.

use crate::metrics::{FontDescriptor, TextMetrics};

use super::text_buffer::grapheme_prefix;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Caret {
    start: usize,
    end: usize,
}

impl Caret {
    pub fn new(offset: usize) -> Self {
        Self {
            start: offset,
            end: offset,
        }
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn end(&self) -> usize {
        self.end
    }

    pub fn range(&self) -> (usize, usize) {
        (self.start, self.end)
    }

    pub fn is_collapsed(&self) -> bool {
        self.start == self.end
    }

    pub fn has_selection(&self) -> bool {
        !self.is_collapsed()
    }

    /// Collapses the selection at `offset`.
    pub fn move_to(&mut self, offset: usize, len: usize) {
        let offset = offset.min(len);
        self.start = offset;
        self.end = offset;
    }

    pub fn move_left(&mut self, len: usize) {
        let end = self.end.min(len).saturating_sub(1);
        self.move_to(end, len);
    }

    pub fn move_right(&mut self, len: usize) {
        let end = self.end.saturating_add(1);
        self.move_to(end, len);
    }

    /// Sets both ends; reversed input is ordered and both ends clamped.
    pub fn select(&mut self, start: usize, end: usize, len: usize) {
        let (a, b) = if start <= end { (start, end) } else { (end, start) };
        self.start = a.min(len);
        self.end = b.min(len);
    }

    /// `selectionStart` setter: pushes `end` forward when needed.
    pub fn set_start(&mut self, start: usize, len: usize) {
        self.start = start.min(len);
        self.end = self.end.min(len).max(self.start);
    }

    /// `selectionEnd` setter: pulls `start` back when needed.
    pub fn set_end(&mut self, end: usize, len: usize) {
        self.end = end.min(len);
        self.start = self.start.min(self.end);
    }

    /// Re-clamps after the text length changed.
    pub fn clamp(&mut self, len: usize) {
        self.end = self.end.min(len);
        self.start = self.start.min(self.end);
    }

    /// Unscrolled x of the caret: width of the text before `end`.
    pub fn text_x(&self, text: &str, metrics: &dyn TextMetrics, font: &FontDescriptor) -> f32 {
        metrics.measure_width(grapheme_prefix(text, self.end), font)
    }

    /// Caret x relative to the box's left inner edge once `scroll_offset` is applied.
    pub fn pixel_offset(
        &self,
        text: &str,
        scroll_offset: f32,
        metrics: &dyn TextMetrics,
        font: &FontDescriptor,
    ) -> f32 {
        self.text_x(text, metrics, font) - scroll_offset.abs()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/models/caret.rs"]
mod tests;
