//! 表单面板状态

use super::{step_back, step_forward};

/// 表单面板状态：当前选中的搜索按钮
#[derive(Debug, Default)]
pub struct FormState {
    pub selected: usize,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select_previous(&mut self) {
        step_back(&mut self.selected);
    }

    pub fn select_next(&mut self, len: usize) {
        step_forward(&mut self.selected, len);
    }
}
