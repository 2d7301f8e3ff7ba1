//! 底部状态栏组件

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::i18n::t;
use crate::model::{ApiStatus, App, FocusPanel};
use crate::view::theme::{colors, Styles};

/// 渲染状态栏
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let hints = get_hints(app);
    let texts = t();

    let mut spans = Vec::new();

    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(*key, Styles::hint_key()));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(*desc, Styles::hint_desc()));
    }

    // API 连通状态
    let c = colors();
    let (label, color) = match app.api_status {
        ApiStatus::Checking => (texts.status_bar.api_checking, c.muted),
        ApiStatus::Online => (texts.status_bar.api_online, c.success),
        ApiStatus::Offline => (texts.status_bar.api_offline, c.error),
    };
    spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
    spans.push(Span::styled(format!("● {label}"), Style::default().fg(color)));

    // 如果有状态消息，显示在右侧
    if let Some(ref msg) = app.status_message {
        spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::styled(msg.clone(), Style::default().fg(Color::Yellow)));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Styles::statusbar());
    frame.render_widget(paragraph, area);
}

/// 根据当前状态生成快捷键提示
fn get_hints(app: &App) -> Vec<(&'static str, &'static str)> {
    let hints_text = &t().hints;
    let mut hints = Vec::new();

    if app.modal.is_search() {
        hints.push(("↑↓", hints_text.select));
        hints.push(("Enter", hints_text.pick));
        hints.push(("Esc", hints_text.close));
        return hints;
    }
    if app.modal.is_open() {
        hints.push(("Esc", hints_text.close));
        return hints;
    }

    if app.browser.is_some() {
        hints.push(("Tab", hints_text.switch_panel));
    }

    match app.focus {
        FocusPanel::Form => {
            hints.push(("↑↓", hints_text.select));
            hints.push(("Enter", hints_text.open_search));
        }
        FocusPanel::Browser => {
            hints.push(("↑↓", hints_text.select));
            hints.push(("←→", hints_text.switch_list));
            hints.push(("Enter", hints_text.pick));
        }
    }

    hints.push(("?", hints_text.help));
    hints.push(("q", hints_text.quit));

    hints
}
