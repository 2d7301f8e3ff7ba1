//! 翻译键定义
//!
//! 定义所有翻译文本的结构体，提供编译期类型检查。
//!
//! ## 分类标准
//!
//! 1. **按 UI 组件位置分类**：文本归属于它出现的 UI 组件
//! 2. **弹窗内容归 `search.*` / `help.*`**
//! 3. **跨组件复用归 `common.*`**
//! 4. **键盘提示归 `hints.*`**

/// 所有翻译文本的根结构
pub struct Translations {
    /// 通用文本（跨多处复用）
    pub common: CommonTexts,
    /// 键盘提示（动作词）
    pub hints: HintTexts,
    /// 输入表单面板
    pub form: FormTexts,
    /// 行业浏览面板
    pub browser: BrowserTexts,
    /// 搜索弹窗
    pub search: SearchTexts,
    /// 状态栏文本
    pub status_bar: StatusBarTexts,
    /// 帮助弹窗
    pub help: HelpTexts,
}

// ============================================================================
// 通用文本
// ============================================================================

pub struct CommonTexts {
    pub app_name: &'static str,
    pub loading: &'static str,
    pub error: &'static str,
    pub no_data: &'static str,
}

// ============================================================================
// 键盘提示
// ============================================================================

pub struct HintTexts {
    pub switch_panel: &'static str,
    pub select: &'static str,
    pub open_search: &'static str,
    pub pick: &'static str,
    pub switch_list: &'static str,
    pub close: &'static str,
    pub help: &'static str,
    pub quit: &'static str,
}

// ============================================================================
// 页面文本
// ============================================================================

pub struct FormTexts {
    pub title: &'static str,
    /// 触发按钮的文字
    pub search_button: &'static str,
    pub empty_value: &'static str,
    pub no_triggers: &'static str,
}

pub struct BrowserTexts {
    pub title: &'static str,
    pub industries: &'static str,
    pub tickers: &'static str,
    pub target_label: &'static str,
    pub choose_industry: &'static str,
    pub disabled: &'static str,
}

pub struct SearchTexts {
    pub title: &'static str,
    /// 输入框占位文字
    pub placeholder: &'static str,
    pub no_results: &'static str,
    pub bound_to: &'static str,
    /// 目标字段不存在
    pub inert_binding: &'static str,
}

pub struct StatusBarTexts {
    pub api_online: &'static str,
    pub api_offline: &'static str,
    pub api_checking: &'static str,
    pub selected: &'static str,
    pub refreshing: &'static str,
    pub language_changed: &'static str,
    pub theme_changed: &'static str,
    pub save_failed: &'static str,
    pub search_disabled: &'static str,
}

pub struct HelpTexts {
    pub title: &'static str,
    pub global: &'static str,
    pub search: &'static str,
    pub close_hint: &'static str,
    pub switch_panel: &'static str,
    pub move_selection: &'static str,
    pub confirm: &'static str,
    pub refresh: &'static str,
    pub language: &'static str,
    pub theme: &'static str,
    pub type_query: &'static str,
    pub clear_input: &'static str,
    pub cancel: &'static str,
    pub quit: &'static str,
}
