//! 应用主消息枚举

use ticker_selector_core::services::WidgetEvent;

use super::{BrowserMessage, FormMessage, ModalMessage};

/// 应用主消息
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// 退出应用
    Quit,

    /// 切换焦点面板
    ToggleFocus,

    /// 表单面板相关消息
    Form(FormMessage),

    /// 行业浏览面板相关消息
    Browser(BrowserMessage),

    /// 弹窗相关消息
    Modal(ModalMessage),

    /// 后台请求完成
    Widget(WidgetEvent),

    /// 重新加载行业列表并检查 API
    Refresh,

    /// 显示帮助
    ShowHelp,

    /// 切换界面语言
    CycleLanguage,

    /// 切换主题
    ToggleTheme,

    /// 清除状态消息
    ClearStatus,

    /// 无操作（用于忽略未处理的事件）
    Noop,
}
