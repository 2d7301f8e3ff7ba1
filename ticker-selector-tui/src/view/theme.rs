//! 主题和样式定义

use ratatui::style::{Color, Modifier, Style};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU8, Ordering};

// 默认为 0 (Dark)，相应地，1 为 Light
static CURRENT_THEME: AtomicU8 = AtomicU8::new(0);

/// 主题枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    #[must_use]
    pub fn toggle(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }
}

/// 切换全局主题
pub fn set_theme(theme: Theme) {
    let index = match theme {
        Theme::Dark => 0,
        Theme::Light => 1,
    };
    CURRENT_THEME.store(index, Ordering::SeqCst);
}

/// 获取当前主题的颜色方案
pub fn colors() -> ThemeColors {
    match CURRENT_THEME.load(Ordering::SeqCst) {
        0 => ThemeColors::dark(),
        _ => ThemeColors::light(),
    }
}

/// 主题颜色
#[derive(Debug, Clone)]
pub struct ThemeColors {
    pub fg: Color,
    pub border: Color,
    pub border_focused: Color,
    pub highlight: Color,
    pub selected_bg: Color,
    pub selected_fg: Color,
    pub success: Color,
    pub error: Color,
    pub muted: Color,
    pub modal_bg: Color,
}

impl ThemeColors {
    /// 深色：终端黑底，绿色强调
    pub fn dark() -> Self {
        Self {
            fg: Color::Rgb(220, 223, 228),
            border: Color::Rgb(70, 74, 82),
            border_focused: Color::Rgb(46, 160, 67),
            highlight: Color::Rgb(35, 134, 54),
            selected_bg: Color::Rgb(33, 58, 43),
            selected_fg: Color::Rgb(240, 246, 252),
            success: Color::Rgb(63, 185, 80),
            error: Color::Rgb(248, 81, 73),
            muted: Color::Rgb(139, 148, 158),
            modal_bg: Color::Rgb(13, 17, 23),
        }
    }

    pub fn light() -> Self {
        Self {
            fg: Color::Rgb(36, 41, 47),
            border: Color::Rgb(208, 215, 222),
            border_focused: Color::Rgb(26, 127, 55),
            highlight: Color::Rgb(26, 127, 55),
            selected_bg: Color::Rgb(218, 251, 225),
            selected_fg: Color::Rgb(17, 99, 41),
            success: Color::Rgb(26, 127, 55),
            error: Color::Rgb(207, 34, 46),
            muted: Color::Rgb(101, 109, 118),
            modal_bg: Color::Rgb(255, 255, 255),
        }
    }
}

/// 常用样式
pub struct Styles;

impl Styles {
    pub fn border(focused: bool) -> Style {
        let c = colors();
        Style::default().fg(if focused { c.border_focused } else { c.border })
    }

    /// 选中项样式
    pub fn selected() -> Style {
        let c = colors();
        Style::default()
            .bg(c.selected_bg)
            .fg(c.selected_fg)
            .add_modifier(Modifier::BOLD)
    }

    /// 标题样式
    pub fn title() -> Style {
        Style::default().fg(colors().fg).add_modifier(Modifier::BOLD)
    }

    /// 状态栏样式
    pub fn statusbar() -> Style {
        Style::default().bg(colors().highlight).fg(Color::White)
    }

    /// 快捷键提示样式
    pub fn hint_key() -> Style {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    }

    /// 快捷键说明样式
    pub fn hint_desc() -> Style {
        Style::default().fg(Color::Rgb(220, 220, 220))
    }

    pub fn muted() -> Style {
        Style::default().fg(colors().muted)
    }

    pub fn error() -> Style {
        Style::default().fg(colors().error)
    }
}
