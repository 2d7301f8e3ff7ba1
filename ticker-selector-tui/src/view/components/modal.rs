//! 弹窗组件

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
    Frame,
};
use ticker_selector_core::widget::SelectorPhase;

use crate::i18n::t;
use crate::model::{App, Modal};
use crate::view::theme::{colors, Styles};

/// 渲染弹窗（如果有活动弹窗）
pub fn render(app: &App, frame: &mut Frame) {
    match app.modal.active {
        Some(Modal::TickerSearch { selected }) => render_ticker_search(app, frame, selected),
        Some(Modal::Help) => render_help(frame),
        None => {}
    }
}

/// 计算居中弹窗区域
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

fn modal_block(title: &str) -> Block<'static> {
    Block::default()
        .title(format!(" {title} "))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .style(Style::default().bg(colors().modal_bg))
}

/// 渲染股票搜索弹窗（`tickerModal`）
fn render_ticker_search(app: &App, frame: &mut Frame, selected: usize) {
    let Some(selector) = app.selector.as_ref() else {
        return;
    };
    let texts = t();
    let c = colors();

    let area = centered_rect(60, 20, frame.area());
    frame.render_widget(Clear, area);
    let block = modal_block(texts.search.title);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // 绑定目标
            Constraint::Length(3), // 输入框
            Constraint::Min(1),    // 候选列表
            Constraint::Length(1), // 操作提示
        ])
        .split(inner);

    // === 绑定目标 ===
    let target_line = match selector.binding() {
        Some(binding) => match &binding.target {
            Some(target) => Line::from(vec![
                Span::styled(format!("{}: ", texts.search.bound_to), Styles::muted()),
                Span::styled(target.clone(), Style::default().fg(c.fg)),
            ]),
            None => Line::styled(format!("⚠ {}", texts.search.inert_binding), Styles::error()),
        },
        None => Line::from(""),
    };
    frame.render_widget(Paragraph::new(target_line), rows[0]);

    // === 输入框 ===
    let input = if selector.query().is_empty() {
        Line::styled(format!("▎{}", texts.search.placeholder), Styles::muted())
    } else {
        Line::styled(format!("{}▎", selector.query()), Style::default().fg(Color::Cyan))
    };
    let input_box = Paragraph::new(input).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Styles::border(true)),
    );
    frame.render_widget(input_box, rows[1]);

    // === 候选列表 ===
    match selector.phase() {
        SelectorPhase::Failed => {
            let err = selector.error().unwrap_or(texts.common.error);
            frame.render_widget(
                Paragraph::new(Line::styled(format!("⚠ {err}"), Styles::error())),
                rows[2],
            );
        }
        SelectorPhase::Rendered if selector.candidates().is_empty() => {
            frame.render_widget(
                Paragraph::new(Line::styled(texts.search.no_results, Styles::muted())),
                rows[2],
            );
        }
        _ => {
            let items: Vec<ListItem> = selector
                .candidates()
                .iter()
                .map(|candidate| ListItem::new(candidate.label()))
                .collect();
            let list = List::new(items).highlight_style(Styles::selected());
            let mut state = ListState::default();
            if !selector.candidates().is_empty() {
                state.select(Some(selected));
            }
            frame.render_stateful_widget(list, rows[2], &mut state);
        }
    }

    // === 操作提示 ===
    let mut hint = vec![
        Span::styled("↑↓", Styles::hint_key()),
        Span::styled(format!(" {} | ", texts.hints.select), Styles::muted()),
        Span::styled("Enter", Styles::hint_key()),
        Span::styled(format!(" {} | ", texts.hints.pick), Styles::muted()),
        Span::styled("Esc", Styles::hint_key()),
        Span::styled(format!(" {}", texts.hints.close), Styles::muted()),
    ];
    if selector.is_loading() {
        hint.push(Span::styled(format!("  {}", texts.common.loading), Styles::muted()));
    }
    frame.render_widget(Paragraph::new(Line::from(hint)), rows[3]);
}

/// 渲染帮助弹窗
fn render_help(frame: &mut Frame) {
    let texts = t();
    let help = &texts.help;

    let area = centered_rect(55, 20, frame.area());
    frame.render_widget(Clear, area);
    let block = modal_block(help.title);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let heading = Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD);
    let row = |key: &'static str, desc: &'static str| {
        Line::from(vec![
            Span::styled(format!("  {key:<8}"), Style::default().fg(Color::Yellow)),
            Span::styled(desc, Style::default().fg(colors().fg)),
        ])
    };

    let lines = vec![
        Line::styled(help.global, heading),
        Line::from(""),
        row("Tab", help.switch_panel),
        row("↑↓/jk", help.move_selection),
        row("Enter", help.confirm),
        row("Alt+r", help.refresh),
        row("Alt+l", help.language),
        row("Alt+t", help.theme),
        row("q", help.quit),
        Line::from(""),
        Line::styled(help.search, heading),
        Line::from(""),
        row("abc…", help.type_query),
        row("Ctrl+u", help.clear_input),
        row("Esc", help.cancel),
        Line::from(""),
        Line::styled(help.close_hint, Styles::muted()),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}
