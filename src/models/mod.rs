//! 数据模型层

pub mod caret;
pub mod scroll;
pub mod text_buffer;

pub use caret::Caret;
pub use scroll::{EdgeMargins, ScrollModel};
pub use text_buffer::{grapheme_len, grapheme_prefix, DeleteDirection, Edit, TextBuffer};
