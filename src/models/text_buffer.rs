//! 文本缓冲区模型
//!
//! 职责：
//! - 单行文本存储（唯一的内容来源）
//! - 插入 / 删除，并返回新的光标位置
//! - maxlength 截断
//!
//! All offsets are grapheme-cluster indices, never byte offsets.

use unicode_segmentation::UnicodeSegmentation;

/// Number of grapheme clusters in `text`.
pub fn grapheme_len(text: &str) -> usize {
    text.graphemes(true).count()
}

/// Byte offset of grapheme `index`, clamped to `text.len()`.
pub fn grapheme_to_byte(text: &str, index: usize) -> usize {
    text.grapheme_indices(true)
        .nth(index)
        .map(|(byte, _)| byte)
        .unwrap_or(text.len())
}

/// Number of clusters that start before `byte`, i.e. the index just past the
/// cluster containing `byte - 1`.
pub fn byte_to_grapheme_ceil(text: &str, byte: usize) -> usize {
    text.grapheme_indices(true)
        .take_while(|(start, _)| *start < byte)
        .count()
}

/// Prefix made of the first `index` graphemes.
pub fn grapheme_prefix(text: &str, index: usize) -> &str {
    &text[..grapheme_to_byte(text, index)]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteDirection {
    /// Backspace: removes the cluster before the caret.
    Backward,
    /// Delete key: removes the cluster after the caret.
    Forward,
}

/// Outcome of a buffer mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edit {
    pub caret: usize,
    pub changed: bool,
}

impl Edit {
    fn unchanged(caret: usize) -> Self {
        Self {
            caret,
            changed: false,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct TextBuffer {
    text: String,
    len: usize,
    max_length: Option<usize>,
}

impl TextBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_text(text: &str) -> Self {
        let mut buffer = Self::new();
        buffer.set_value(text);
        buffer
    }

    pub fn with_max_length(text: &str, max_length: Option<usize>) -> Self {
        let mut buffer = Self {
            max_length,
            ..Self::default()
        };
        buffer.set_value(text);
        buffer
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn max_length(&self) -> Option<usize> {
        self.max_length
    }

    /// Changes the cap; an existing longer value is truncated.
    pub fn set_max_length(&mut self, max_length: Option<usize>) -> bool {
        self.max_length = max_length;
        self.truncate_to_max()
    }

    pub fn is_full(&self) -> bool {
        self.max_length.is_some_and(|max| self.len >= max)
    }

    pub fn prefix(&self, index: usize) -> &str {
        grapheme_prefix(&self.text, index)
    }

    pub fn slice(&self, start: usize, end: usize) -> &str {
        let start = grapheme_to_byte(&self.text, start);
        let end = grapheme_to_byte(&self.text, end).max(start);
        &self.text[start..end]
    }

    /// Replaces the whole value; returns whether the stored text differs.
    pub fn set_value(&mut self, value: &str) -> bool {
        let value = match self.max_length {
            Some(max) => grapheme_prefix(value, max),
            None => value,
        };
        if self.text == value {
            return false;
        }
        self.text.clear();
        self.text.push_str(value);
        self.len = grapheme_len(&self.text);
        true
    }

    /// Splices `s` at grapheme `offset`. Rejected silently when the buffer is full.
    pub fn insert_at(&mut self, offset: usize, s: &str) -> Edit {
        let offset = offset.min(self.len);
        if s.is_empty() || self.is_full() {
            return Edit::unchanged(offset);
        }

        let s = match self.max_length {
            Some(max) => grapheme_prefix(s, max - self.len),
            None => s,
        };

        let byte = grapheme_to_byte(&self.text, offset);
        self.text.insert_str(byte, s);
        self.len = grapheme_len(&self.text);

        // Inserted text may merge with either neighbour; land after the cluster
        // holding the last inserted byte.
        let caret = byte_to_grapheme_ceil(&self.text, byte + s.len());
        Edit {
            caret,
            changed: true,
        }
    }

    /// Deletes `[start, end)`; a collapsed range removes one cluster in `direction`.
    pub fn delete_range(&mut self, start: usize, end: usize, direction: DeleteDirection) -> Edit {
        let end = end.min(self.len);
        let start = start.min(end);

        let (from, to) = if start < end {
            (start, end)
        } else {
            match direction {
                DeleteDirection::Backward if start > 0 => (start - 1, start),
                DeleteDirection::Forward if start < self.len => (start, start + 1),
                _ => return Edit::unchanged(start),
            }
        };

        let from_byte = grapheme_to_byte(&self.text, from);
        let to_byte = grapheme_to_byte(&self.text, to);
        self.text.drain(from_byte..to_byte);
        self.len = grapheme_len(&self.text);

        Edit {
            caret: from.min(self.len),
            changed: true,
        }
    }

    fn truncate_to_max(&mut self) -> bool {
        let Some(max) = self.max_length else {
            return false;
        };
        if self.len <= max {
            return false;
        }
        let byte = grapheme_to_byte(&self.text, max);
        self.text.truncate(byte);
        self.len = max;
        true
    }
}

#[cfg(test)]
#[path = "../../tests/unit/models/text_buffer.rs"]
mod tests;
