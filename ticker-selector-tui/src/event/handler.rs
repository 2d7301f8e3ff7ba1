//! 事件处理器

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::event::keymap::DefaultKeymap;
use crate::message::{AppMessage, BrowserMessage, FormMessage, ModalMessage};
use crate::model::{App, Modal};

/// 轮询事件
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// 处理事件，返回对应的消息
pub fn handle_event(event: Event, app: &App) -> AppMessage {
    match event {
        Event::Key(key_event) => handle_key_event(key_event, app),
        // 终端窗口大小改变时下一帧自动重绘
        _ => AppMessage::Noop,
    }
}

/// 处理键盘事件
fn handle_key_event(key: KeyEvent, app: &App) -> AppMessage {
    // 只处理 Press 事件，忽略 Release 和 Repeat（Windows 终端会重复上报）
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    if DefaultKeymap::FORCE_QUIT.matches(&key) {
        return AppMessage::Quit;
    }

    // 如果有弹窗打开，优先处理弹窗输入
    if let Some(modal) = &app.modal.active {
        return handle_modal_keys(key, modal);
    }

    if DefaultKeymap::QUIT.matches(&key)
        || (key.modifiers.is_empty() && key.code == KeyCode::Char('q'))
    {
        return AppMessage::Quit;
    }

    if DefaultKeymap::HELP.matches(&key)
        || (key.modifiers.is_empty() && key.code == KeyCode::Char('?'))
    {
        return AppMessage::ShowHelp;
    }

    if DefaultKeymap::REFRESH.matches(&key) {
        return AppMessage::Refresh;
    }

    if DefaultKeymap::LANGUAGE.matches(&key) {
        return AppMessage::CycleLanguage;
    }

    if DefaultKeymap::THEME.matches(&key) {
        return AppMessage::ToggleTheme;
    }

    if DefaultKeymap::TOGGLE_FOCUS.matches(&key) {
        return AppMessage::ToggleFocus;
    }

    if DefaultKeymap::BACK.matches(&key) {
        return AppMessage::ClearStatus;
    }

    if app.focus.is_form() {
        handle_form_keys(key)
    } else {
        handle_browser_keys(key)
    }
}

/// 处理弹窗按键
fn handle_modal_keys(key: KeyEvent, modal: &Modal) -> AppMessage {
    if DefaultKeymap::BACK.matches(&key) {
        return AppMessage::Modal(ModalMessage::Close);
    }

    match modal {
        Modal::Help => match key.code {
            KeyCode::Enter => AppMessage::Modal(ModalMessage::Close),
            _ => AppMessage::Noop,
        },
        Modal::TickerSearch { .. } => {
            if DefaultKeymap::CLEAR_INPUT.matches(&key) {
                return AppMessage::Modal(ModalMessage::ClearInput);
            }
            match key.code {
                KeyCode::Enter => AppMessage::Modal(ModalMessage::Confirm),
                KeyCode::Up => AppMessage::Modal(ModalMessage::SelectPrevious),
                KeyCode::Down => AppMessage::Modal(ModalMessage::SelectNext),
                KeyCode::Backspace => AppMessage::Modal(ModalMessage::Backspace),
                KeyCode::Char(c)
                    if key.modifiers.is_empty() || key.modifiers == KeyModifiers::SHIFT =>
                {
                    AppMessage::Modal(ModalMessage::Input(c))
                }
                _ => AppMessage::Noop,
            }
        }
    }
}

/// 处理表单面板的按键
fn handle_form_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => AppMessage::Form(FormMessage::SelectPrevious),
        KeyCode::Down | KeyCode::Char('j') => AppMessage::Form(FormMessage::SelectNext),
        KeyCode::Enter | KeyCode::Char('/') => AppMessage::Form(FormMessage::OpenSearch),
        _ => AppMessage::Noop,
    }
}

/// 处理行业浏览面板的按键
fn handle_browser_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => AppMessage::Browser(BrowserMessage::SelectPrevious),
        KeyCode::Down | KeyCode::Char('j') => AppMessage::Browser(BrowserMessage::SelectNext),
        KeyCode::Left | KeyCode::Char('h') => AppMessage::Browser(BrowserMessage::FocusIndustries),
        KeyCode::Right | KeyCode::Char('l') => AppMessage::Browser(BrowserMessage::FocusTickers),
        KeyCode::Enter => AppMessage::Browser(BrowserMessage::Confirm),
        _ => AppMessage::Noop,
    }
}
