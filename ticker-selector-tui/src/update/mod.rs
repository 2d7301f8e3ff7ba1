//!
//! src/update/mod.rs
//! Update 层：状态更新逻辑
//!
//! Update 层负责处理 Message，更新 Model 状态，是唯一可以修改 Model 的地方。
//! 需要网络或磁盘的操作不在这里执行，而是作为 `Command` 返回给主循环。
//!
//! 有模块结构：
//!     form.rs         表单面板（打开搜索弹窗、绑定目标字段）
//!     modal.rs        弹窗（输入查询、选择候选）
//!     browser.rs      行业浏览面板
//!     widget.rs       后台请求结果
//!

mod browser;
mod form;
mod modal;
mod widget;

use crate::i18n::{current_language, set_language, t};
use crate::message::{AppMessage, Command};
use crate::model::App;
use crate::view::theme::set_theme;

/// 处理应用消息，更新状态，返回需要执行的副作用
pub fn update(app: &mut App, msg: AppMessage) -> Vec<Command> {
    match msg {
        AppMessage::Quit => {
            app.should_quit = true;
            Vec::new()
        }

        AppMessage::ToggleFocus => {
            // 弹窗打开或没有行业浏览时不切换
            if !app.modal.is_open() && app.browser.is_some() {
                app.focus = app.focus.toggle();
            }
            Vec::new()
        }

        AppMessage::Form(form_msg) => form::update(app, form_msg),

        AppMessage::Browser(browser_msg) => browser::update(app, browser_msg),

        AppMessage::Modal(modal_msg) => modal::update(app, modal_msg),

        AppMessage::Widget(event) => {
            widget::update(app, event);
            Vec::new()
        }

        AppMessage::Refresh => {
            app.set_status(t().status_bar.refreshing);
            let mut commands = vec![Command::CheckHealth];
            if let Some(browser) = app.browser.as_mut() {
                commands.push(Command::LoadIndustries(browser.begin_load_industries()));
            }
            commands
        }

        AppMessage::ShowHelp => {
            app.modal.show_help();
            Vec::new()
        }

        AppMessage::CycleLanguage => {
            let lang = current_language().next();
            set_language(lang);
            app.config.language = lang.code().to_string();
            app.set_status(t().status_bar.language_changed);
            vec![Command::SaveConfig(Box::new(app.config.clone()))]
        }

        AppMessage::ToggleTheme => {
            app.config.theme = app.config.theme.toggle();
            set_theme(app.config.theme);
            app.set_status(t().status_bar.theme_changed);
            vec![Command::SaveConfig(Box::new(app.config.clone()))]
        }

        AppMessage::ClearStatus => {
            app.clear_status();
            Vec::new()
        }

        AppMessage::Noop => Vec::new(),
    }
}
