//! 焦点状态定义

/// 焦点面板枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusPanel {
    /// 左侧输入表单
    #[default]
    Form,
    /// 右侧行业浏览
    Browser,
}

impl FocusPanel {
    /// 切换到另一个面板
    pub fn toggle(self) -> Self {
        match self {
            FocusPanel::Form => FocusPanel::Browser,
            FocusPanel::Browser => FocusPanel::Form,
        }
    }

    pub fn is_form(self) -> bool {
        matches!(self, FocusPanel::Form)
    }

    pub fn is_browser(self) -> bool {
        matches!(self, FocusPanel::Browser)
    }
}
