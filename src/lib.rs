//! fakeinput - 无头文本输入框模拟库
//!
//! 模块结构：
//! - core: 事件记录、方法名、错误类型
//! - metrics: 文本宽度测量（TextMetrics）
//! - models: 数据模型（TextBuffer, Caret, ScrollModel）
//! - kernel: 实例状态机、宿主（attach/detach、焦点管理）、服务端口与适配器
//! - views: 渲染数据推导
//! - tui: 终端前端（crossterm + ratatui）

pub mod core;
pub mod kernel;
pub mod metrics;
pub mod models;
pub mod views;

#[cfg(feature = "tui")]
pub mod tui;
