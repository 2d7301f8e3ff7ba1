//!
//! src/view/mod.rs
//! View 层：UI 渲染
//!
//! 每一帧都从 Model 完整重绘，View 层不持有任何状态。
//!     layout.rs       主布局（标题栏 + 表单 + 行业浏览 + 状态栏）
//!     pages/          表单面板、行业浏览面板
//!     components/     状态栏、弹窗
//!     theme.rs        主题颜色
//!

mod components;
mod layout;
mod pages;
pub mod theme;

pub use layout::render;
