//!
//! src/event/mod.rs
//! Event 层：事件处理
//!
//! 负责将键盘输入转换为 Message：
//!     · poll_event      事件轮询，受 app.rs 调用
//!     · handle_event    事件分发
//!
//!     判断顺序：
//!         - 有弹窗打开时，调用 handle_modal_keys 处理
//!         - 全局快捷键，就地处理
//!         - 焦点位于表单面板，调用 handle_form_keys 处理
//!         - 焦点位于行业浏览面板，调用 handle_browser_keys 处理
//!

mod handler;
mod keymap;

pub use handler::{handle_event, poll_event};
