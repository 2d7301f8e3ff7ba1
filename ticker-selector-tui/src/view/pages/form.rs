//! 输入表单面板视图

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use ticker_selector_core::traits::selector_id;
use unicode_width::UnicodeWidthStr;

use crate::i18n::t;
use crate::model::App;
use crate::view::theme::{colors, Styles};

/// 渲染输入表单：每个字段一行，带搜索按钮的字段在右侧显示按钮
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let c = colors();

    let label_width = app
        .fields
        .iter()
        .map(|(id, _)| id.width())
        .max()
        .unwrap_or(0);

    let mut lines = vec![Line::from("")];

    for (id, value) in app.fields.iter() {
        let padding = " ".repeat(label_width.saturating_sub(id.width()));
        let mut spans = vec![
            Span::styled(format!("  {id}{padding}  "), Style::default().fg(c.muted)),
            if value.is_empty() {
                Span::styled(format!("{:<8}", texts.form.empty_value), Styles::muted())
            } else {
                Span::styled(
                    format!("{value:<8}"),
                    Style::default().fg(c.fg).add_modifier(Modifier::BOLD),
                )
            },
        ];

        // 指向该字段的搜索按钮，可能不止一个
        for index in triggers_for_field(app, id) {
            let selected = index == app.form.selected && app.focus.is_form();
            let style = if selected {
                Styles::selected()
            } else {
                Style::default().fg(c.highlight)
            };
            spans.push(Span::raw("  "));
            spans.push(Span::styled(texts.form.search_button, style));
        }

        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    // 目标字段不存在的按钮也要能被选中（绑定会是无效的）
    for (index, trigger) in app.triggers.iter().enumerate() {
        let targets_field = selector_id(&trigger.target_selector)
            .is_some_and(|id| app.fields.iter().any(|(f, _)| f == id));
        if targets_field {
            continue;
        }
        let selected = index == app.form.selected && app.focus.is_form();
        let style = if selected { Styles::selected() } else { Styles::error() };
        lines.push(Line::from(vec![
            Span::styled(format!("  {} ", trigger.target_selector), Styles::muted()),
            Span::styled(texts.form.search_button, style),
        ]));
    }

    if app.triggers.is_empty() {
        lines.push(Line::styled(format!("  {}", texts.form.no_triggers), Styles::muted()));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

/// 指向 `field_id` 的按钮在 `app.triggers` 中的下标
fn triggers_for_field(app: &App, field_id: &str) -> Vec<usize> {
    app.triggers
        .iter()
        .enumerate()
        .filter(|(_, trigger)| selector_id(&trigger.target_selector) == Some(field_id))
        .map(|(index, _)| index)
        .collect()
}
