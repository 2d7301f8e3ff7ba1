//! 弹窗状态

/// 弹窗类型
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Modal {
    /// 股票搜索弹窗（`tickerModal`）
    TickerSearch {
        /// 候选列表光标
        selected: usize,
    },
    /// 帮助
    Help,
}

/// 弹窗状态管理
#[derive(Debug, Default)]
pub struct ModalState {
    pub active: Option<Modal>,
}

impl ModalState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.active.is_some()
    }

    pub fn is_search(&self) -> bool {
        matches!(self.active, Some(Modal::TickerSearch { .. }))
    }

    pub fn open_search(&mut self) {
        self.active = Some(Modal::TickerSearch { selected: 0 });
    }

    pub fn show_help(&mut self) {
        self.active = Some(Modal::Help);
    }

    pub fn close(&mut self) {
        self.active = None;
    }

    /// 搜索弹窗的光标（弹窗未打开时为 `None`）
    pub fn search_cursor(&mut self) -> Option<&mut usize> {
        match &mut self.active {
            Some(Modal::TickerSearch { selected }) => Some(selected),
            _ => None,
        }
    }
}
