//! 核心框架模块
//!
//! - Event: 合成事件记录（焦点、指针、按键）
//! - Method: 按名称调用的插件方法
//! - Error: 错误类型

pub mod error;
pub mod event;
pub mod method;

pub use error::{FakeInputError, Result};
pub use event::{
    InputEvent, KeyCode, KeyEvent, KeyModifiers, PointerEvent, SelectionSnapshot,
};
pub use method::Method;
