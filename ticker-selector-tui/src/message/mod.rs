//!
//! src/message/mod.rs
//! Message 层：事件消息定义
//!
//! 作为 Event -> Update 之间的桥梁。
//! 键盘输入和后台请求的结果都被翻译成 `AppMessage`，Update 层据此修改 Model，
//! 需要访问网络或磁盘时再返回 `Command` 交给 Backend 执行。
//!
//! 有模块结构：
//!     app.rs          主消息枚举
//!     form.rs         表单面板子消息
//!     modal.rs        弹窗子消息
//!     browser.rs      行业浏览面板子消息
//!     command.rs      Update 产生的副作用
//!

mod app;
mod browser;
mod command;
mod form;
mod modal;

pub use app::AppMessage;
pub use browser::BrowserMessage;
pub use command::Command;
pub use form::FormMessage;
pub use modal::ModalMessage;
