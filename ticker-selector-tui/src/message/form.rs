//! 表单面板消息类型

/// 表单面板相关消息
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMessage {
    /// 上一个搜索按钮
    SelectPrevious,
    /// 下一个搜索按钮
    SelectNext,
    /// 按下当前搜索按钮，打开搜索弹窗
    OpenSearch,
}
