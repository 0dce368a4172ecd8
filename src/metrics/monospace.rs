use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

use super::{FontDescriptor, TextMetrics};

/// Cell-grid metrics: every terminal cell is `cell_width` pixels wide.
///
/// Wide (CJK) clusters take two cells, zero-width marks take none.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonospaceMetrics {
    cell_width: f32,
}

impl MonospaceMetrics {
    pub fn new(cell_width: f32) -> Self {
        Self {
            cell_width: cell_width.max(0.0),
        }
    }

    /// One pixel per cell, for hosts that lay out in cells.
    pub fn cells() -> Self {
        Self::new(1.0)
    }

    pub fn cell_width(&self) -> f32 {
        self.cell_width
    }
}

impl TextMetrics for MonospaceMetrics {
    fn measure_width(&self, text: &str, font: &FontDescriptor) -> f32 {
        if text.is_empty() {
            return 0.0;
        }
        let cells = text.width() as f32;
        let spacing = font.letter_spacing * text.graphemes(true).count() as f32;
        cells * self.cell_width + spacing
    }
}
