//! 弹窗消息类型

/// 弹窗相关消息
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalMessage {
    /// 关闭弹窗
    Close,

    /// 输入字符
    Input(char),

    /// 删除字符（Backspace）
    Backspace,

    /// 清空输入
    ClearInput,

    /// 候选列表上移
    SelectPrevious,

    /// 候选列表下移
    SelectNext,

    /// 确认当前候选
    Confirm,
}
