use rustc_hash::FxHashMap;
use unicode_segmentation::UnicodeSegmentation;

use super::{FontDescriptor, TextMetrics};

/// Proportional metrics from an explicit advance table, scaled by font size.
///
/// Advances are expressed for a 1px font; unknown characters use `fallback`.
#[derive(Debug, Clone, Default)]
pub struct TableMetrics {
    advances: FxHashMap<char, f32>,
    fallback: f32,
}

impl TableMetrics {
    pub fn new(fallback: f32) -> Self {
        Self {
            advances: FxHashMap::default(),
            fallback,
        }
    }

    pub fn with_advance(mut self, ch: char, advance: f32) -> Self {
        self.advances.insert(ch, advance);
        self
    }

    fn cluster_advance(&self, cluster: &str) -> f32 {
        // Only the base character advances; combining marks stack on it.
        cluster
            .chars()
            .next()
            .map(|ch| self.advances.get(&ch).copied().unwrap_or(self.fallback))
            .unwrap_or(0.0)
    }
}

impl TextMetrics for TableMetrics {
    fn measure_width(&self, text: &str, font: &FontDescriptor) -> f32 {
        text.graphemes(true)
            .map(|g| self.cluster_advance(g) * font.size_px + font.letter_spacing)
            .sum()
    }
}
