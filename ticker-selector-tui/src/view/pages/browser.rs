//! 行业浏览面板视图（`industry-list` / `ticker-list`）

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};
use ticker_selector_core::TargetFields;

use crate::i18n::t;
use crate::model::{App, BrowserColumn};
use crate::view::theme::{colors, Styles};

pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let Some(browser) = app.browser.as_ref() else {
        let msg = Paragraph::new(format!("  {}", texts.browser.disabled)).style(Styles::muted());
        frame.render_widget(msg, area);
        return;
    };

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(1)])
        .split(area);

    // 顶部：写入目标及其当前值
    let target = browser.target();
    let value = app.fields.value(target).unwrap_or("-");
    let mut header = vec![
        Span::styled(format!(" {}: ", texts.browser.target_label), Styles::muted()),
        Span::styled(format!("{target} = {value}"), Style::default().fg(colors().fg)),
    ];
    if browser.is_loading() {
        header.push(Span::styled(format!("  {}", texts.common.loading), Styles::muted()));
    }
    if let Some(err) = browser.error() {
        header.push(Span::styled(format!("  ⚠ {err}"), Styles::error()));
    }
    frame.render_widget(Paragraph::new(Line::from(header)), rows[0]);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[1]);

    let focused = app.focus.is_browser();
    let view = &app.browser_view;
    let active = browser.active_industry().map(|i| i.id);

    let industries: Vec<ListItem> = browser
        .industries()
        .iter()
        .map(|industry| {
            let marker = if Some(industry.id) == active { "▸ " } else { "  " };
            ListItem::new(format!("{marker}{}", industry.name))
        })
        .collect();
    render_list(
        frame,
        columns[0],
        texts.browser.industries,
        industries,
        view.industry_selected,
        focused && view.column == BrowserColumn::Industries,
    );

    if browser.tickers().is_empty() {
        let hint = if active.is_none() {
            texts.browser.choose_industry
        } else {
            texts.common.no_data
        };
        let block = list_block(texts.browser.tickers, false);
        let empty = Paragraph::new(format!(" {hint}"))
            .style(Styles::muted())
            .block(block);
        frame.render_widget(empty, columns[1]);
    } else {
        let tickers: Vec<ListItem> = browser
            .tickers()
            .iter()
            .map(|ticker| ListItem::new(format!(" {}", ticker.label())))
            .collect();
        render_list(
            frame,
            columns[1],
            texts.browser.tickers,
            tickers,
            view.ticker_selected,
            focused && view.column == BrowserColumn::Tickers,
        );
    }
}

fn list_block(title: &str, focused: bool) -> Block<'_> {
    Block::default()
        .title(format!(" {title} "))
        .borders(Borders::ALL)
        .border_style(Styles::border(focused))
}

fn render_list(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    items: Vec<ListItem>,
    selected: usize,
    focused: bool,
) {
    let highlight = if focused {
        Styles::selected()
    } else {
        Style::default().fg(colors().highlight)
    };
    let list = List::new(items)
        .block(list_block(title, focused))
        .highlight_style(highlight);

    let mut state = ListState::default();
    state.select(Some(selected));
    frame.render_stateful_widget(list, area, &mut state);
}
