//! 行业浏览面板消息类型

/// 行业浏览面板相关消息
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrowserMessage {
    SelectPrevious,
    SelectNext,
    /// 焦点移到行业列表
    FocusIndustries,
    /// 焦点移到股票列表
    FocusTickers,
    /// 行业：加载其股票；股票：写入目标字段
    Confirm,
}
