use std::cell::RefCell;

use rustc_hash::FxHashMap;

use super::{FontDescriptor, TextMetrics};

const DEFAULT_CAPACITY: usize = 1024;

/// Memoises another measurer; measuring a real text run is the expensive part.
///
/// The cache is flushed wholesale once it reaches capacity.
pub struct CachedMetrics<M> {
    inner: M,
    capacity: usize,
    cache: RefCell<FxHashMap<(String, u32, String), f32>>,
}

impl<M: TextMetrics> CachedMetrics<M> {
    pub fn new(inner: M) -> Self {
        Self::with_capacity(inner, DEFAULT_CAPACITY)
    }

    pub fn with_capacity(inner: M, capacity: usize) -> Self {
        Self {
            inner,
            capacity: capacity.max(1),
            cache: RefCell::new(FxHashMap::default()),
        }
    }

    pub fn inner(&self) -> &M {
        &self.inner
    }

    pub fn cached_len(&self) -> usize {
        self.cache.borrow().len()
    }

    pub fn clear(&self) {
        self.cache.borrow_mut().clear();
    }
}

impl<M: TextMetrics> TextMetrics for CachedMetrics<M> {
    fn measure_width(&self, text: &str, font: &FontDescriptor) -> f32 {
        if text.is_empty() {
            return 0.0;
        }

        let key = (font.css(), font.letter_spacing.to_bits(), text.to_string());
        if let Some(width) = self.cache.borrow().get(&key) {
            return *width;
        }

        let width = self.inner.measure_width(text, font);
        let mut cache = self.cache.borrow_mut();
        if cache.len() >= self.capacity {
            tracing::trace!(entries = cache.len(), "text metrics cache flushed");
            cache.clear();
        }
        cache.insert(key, width);
        width
    }
}
