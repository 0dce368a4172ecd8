//! 水平滚动模型
//!
//! The offset is the horizontal translation applied to the text run: `0` keeps
//! the first character flush with the box's left inner edge, negative values
//! scroll text past that edge. Shifts are exact ("reveal the caret, no more"),
//! never re-centred.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct EdgeMargins {
    pub left: f32,
    pub right: f32,
}

impl EdgeMargins {
    pub fn new(left: f32, right: f32) -> Self {
        Self {
            left: left.max(0.0),
            right: right.max(0.0),
        }
    }
}

/// Largest distance the run may be scrolled left.
///
/// The rendered run is the text plus the right margin reserved for the caret, so
/// a caret at the end of the text can rest at `box_width - right`.
pub fn max_scroll(content_width: f32, box_width: f32, margins: EdgeMargins) -> f32 {
    (content_width + margins.right - box_width).max(0.0)
}

/// Offset that keeps a caret at unscrolled `caret_x` inside the margins.
pub fn adjust(
    offset: f32,
    caret_x: f32,
    box_width: f32,
    margins: EdgeMargins,
    content_width: f32,
) -> f32 {
    if box_width <= 0.0 {
        return 0.0;
    }

    let offset = offset.min(0.0);
    let visible_x = caret_x + offset;
    let right_limit = box_width - margins.right;

    let shifted = if visible_x > right_limit {
        offset - (visible_x - right_limit)
    } else if visible_x < margins.left {
        (offset + (margins.left - visible_x)).min(0.0)
    } else {
        offset
    };

    shifted.max(-max_scroll(content_width, box_width, margins))
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollModel {
    offset: f32,
}

impl ScrollModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn offset(&self) -> f32 {
        self.offset
    }

    pub fn reset(&mut self) {
        self.offset = 0.0;
    }

    /// Re-derives the offset for the current caret; returns whether it moved.
    pub fn follow(
        &mut self,
        caret_x: f32,
        box_width: f32,
        margins: EdgeMargins,
        content_width: f32,
    ) -> bool {
        let next = adjust(self.offset, caret_x, box_width, margins, content_width);
        if next == self.offset {
            return false;
        }
        tracing::trace!(from = self.offset, to = next, caret_x, "scroll offset adjusted");
        self.offset = next;
        true
    }
}

#[cfg(test)]
#[path = "../../tests/unit/models/scroll.rs"]
mod tests;
