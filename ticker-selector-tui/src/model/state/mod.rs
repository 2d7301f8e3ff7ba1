//! 界面状态模块
//!
//! 只保存光标、焦点等展示相关的状态；业务状态在 core 的组件里。

mod browser;
mod form;
mod modal;

pub use browser::{BrowserColumn, BrowserViewState};
pub use form::FormState;
pub use modal::{Modal, ModalState};

/// 列表光标上移
pub(crate) fn step_back(selected: &mut usize) {
    *selected = selected.saturating_sub(1);
}

/// 列表光标下移，不超过末尾
pub(crate) fn step_forward(selected: &mut usize, len: usize) {
    if len > 0 && *selected < len - 1 {
        *selected += 1;
    }
}

/// 列表长度变化后把光标拉回范围内
pub(crate) fn clamp(selected: &mut usize, len: usize) {
    if *selected >= len {
        *selected = len.saturating_sub(1);
    }
}
