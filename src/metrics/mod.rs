//! Text measurement.
//!
//! Widths are the single source for every pixel decision (caret x, scroll shift,
//! hit testing), so implementations must agree with whatever actually renders the
//! text run.

pub mod cache;
pub mod monospace;
pub mod table;

pub use cache::CachedMetrics;
pub use monospace::MonospaceMetrics;
pub use table::TableMetrics;

use compact_str::CompactString;
use serde::{Deserialize, Serialize};
use unicode_segmentation::UnicodeSegmentation;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FontDescriptor {
    pub family: CompactString,
    pub size_px: f32,
    #[serde(default)]
    pub letter_spacing: f32,
}

impl FontDescriptor {
    pub fn new(family: &str, size_px: f32) -> Self {
        Self {
            family: CompactString::from(family),
            size_px,
            letter_spacing: 0.0,
        }
    }

    /// CSS `font` shorthand, e.g. `13.33px monospace`.
    pub fn css(&self) -> String {
        format!("{}px {}", self.size_px, self.family)
    }
}

impl Default for FontDescriptor {
    fn default() -> Self {
        Self::new("monospace", 13.33)
    }
}

pub trait TextMetrics {
    /// Rendered width of `text` in pixels. The empty string is always 0.
    fn measure_width(&self, text: &str, font: &FontDescriptor) -> f32;
}

impl<T: TextMetrics + ?Sized> TextMetrics for &T {
    fn measure_width(&self, text: &str, font: &FontDescriptor) -> f32 {
        (**self).measure_width(text, font)
    }
}

impl<T: TextMetrics + ?Sized> TextMetrics for Box<T> {
    fn measure_width(&self, text: &str, font: &FontDescriptor) -> f32 {
        (**self).measure_width(text, font)
    }
}

/// Grapheme index whose boundary is nearest to `x` (unscrolled text coordinates).
///
/// Width-accumulation fallback for hosts without a caret-from-point primitive: a
/// click past the middle of a cluster lands after it.
pub fn offset_at_x(text: &str, x: f32, metrics: &dyn TextMetrics, font: &FontDescriptor) -> usize {
    if x <= 0.0 {
        return 0;
    }

    let mut accumulated = 0.0f32;
    let mut count = 0usize;
    for (i, g) in text.graphemes(true).enumerate() {
        let w = metrics.measure_width(g, font);
        if accumulated + w / 2.0 >= x {
            return i;
        }
        accumulated += w;
        count = i + 1;
    }

    count
}

#[cfg(test)]
#[path = "../../tests/unit/metrics/mod.rs"]
mod tests;
