//!
//! src/util/mod.rs
//! Util 层：基础设施
//!
//!     terminal.rs     终端的初始化和恢复（raw mode + 备用屏幕）
//!     logging.rs      日志写入滚动文件，避免干扰终端画面
//!
//! 无论程序是正常退出还是发生错误，都必须调用 `restore_terminal`，
//! 否则终端会保持在原始模式。
//!

mod logging;
mod terminal;

pub use logging::init_logging;
pub use terminal::{init_terminal, restore_terminal, Term};
