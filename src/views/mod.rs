//! 视图层模块
//!
//! 纯渲染数据：由实例状态推导出文本平移、光标与选区几何、占位符。

pub mod input_view;

pub use input_view::{caret_geometry, render_state, CaretGeometry, RenderState, SelectionHighlight};
