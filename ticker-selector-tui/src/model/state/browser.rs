//! 行业浏览面板状态

use super::{clamp, step_back, step_forward};

/// 当前操作的列表
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BrowserColumn {
    #[default]
    Industries,
    Tickers,
}

/// 行业浏览面板的光标
#[derive(Debug, Default)]
pub struct BrowserViewState {
    pub column: BrowserColumn,
    pub industry_selected: usize,
    pub ticker_selected: usize,
}

impl BrowserViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select_previous(&mut self) {
        match self.column {
            BrowserColumn::Industries => step_back(&mut self.industry_selected),
            BrowserColumn::Tickers => step_back(&mut self.ticker_selected),
        }
    }

    pub fn select_next(&mut self, industries: usize, tickers: usize) {
        match self.column {
            BrowserColumn::Industries => step_forward(&mut self.industry_selected, industries),
            BrowserColumn::Tickers => step_forward(&mut self.ticker_selected, tickers),
        }
    }

    /// 列表被替换后调整光标
    pub fn clamp(&mut self, industries: usize, tickers: usize) {
        clamp(&mut self.industry_selected, industries);
        clamp(&mut self.ticker_selected, tickers);
    }
}
