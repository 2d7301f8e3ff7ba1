//! 应用主状态结构

use ticker_selector_core::page::initialize;
use ticker_selector_core::types::Trigger;
use ticker_selector_core::widget::SelectorOptions;
use ticker_selector_core::{InMemoryFields, IndustryBrowser, TickerSelector};

use super::{BrowserViewState, FocusPanel, FormState, ModalState};
use crate::backend::AppConfig;
use crate::i18n::{set_language, Language};
use crate::message::Command;
use crate::view::theme::set_theme;

/// API 连通状态（状态栏显示）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ApiStatus {
    #[default]
    Checking,
    Online,
    Offline,
}

/// 应用主状态
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,

    /// 当前焦点面板
    pub focus: FocusPanel,

    /// 当前配置（主题、语言变更后保存）
    pub config: AppConfig,

    /// 页面上的输入字段
    pub fields: InMemoryFields,

    /// 页面上的搜索按钮
    pub triggers: Vec<Trigger>,

    /// 搜索组件；页面没有 `tickerModal` 时为 `None`
    pub selector: Option<TickerSelector>,

    /// 行业浏览组件；页面缺少列表锚点时为 `None`
    pub browser: Option<IndustryBrowser>,

    // === 界面状态 ===
    pub form: FormState,
    pub browser_view: BrowserViewState,
    pub modal: ModalState,

    pub api_status: ApiStatus,

    /// 状态栏消息
    pub status_message: Option<String>,
}

impl App {
    /// 按配置创建应用实例并挂载组件
    pub fn new(config: AppConfig) -> Self {
        set_language(Language::from_code(&config.language).unwrap_or_default());
        set_theme(config.theme);

        let options = SelectorOptions {
            ordering: config.ordering,
            hosted_in_overlay: true,
        };
        let widgets = initialize(&config.page, options);

        Self {
            should_quit: false,
            focus: FocusPanel::Form,
            fields: config.page.build_fields(),
            triggers: config.page.triggers.clone(),
            selector: widgets.selector,
            browser: widgets.browser,
            form: FormState::new(),
            browser_view: BrowserViewState::new(),
            modal: ModalState::new(),
            api_status: ApiStatus::Checking,
            status_message: None,
            config,
        }
    }

    /// 启动时需要发出的请求
    pub fn startup_commands(&mut self) -> Vec<Command> {
        let mut commands = vec![Command::CheckHealth];
        if let Some(browser) = self.browser.as_mut() {
            commands.push(Command::LoadIndustries(browser.begin_load_industries()));
        }
        commands
    }

    /// 当前选中的搜索按钮
    pub fn selected_trigger(&self) -> Option<&Trigger> {
        self.triggers.get(self.form.selected)
    }

    /// 设置状态消息
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// 清除状态消息
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }
}
