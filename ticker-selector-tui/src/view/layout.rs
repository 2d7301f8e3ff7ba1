//! 主布局渲染

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::i18n::t;
use crate::model::App;

use super::components;
use super::pages;
use super::theme::{colors, Styles};

/// 渲染主布局
pub fn render(app: &App, frame: &mut Frame) {
    let size = frame.area();

    // 三层布局：标题栏 + 主内容区 + 状态栏
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // 标题栏
            Constraint::Min(1),    // 主内容区
            Constraint::Length(1), // 状态栏
        ])
        .split(size);

    render_title_bar(frame, main_layout[0]);

    // 没有行业浏览时表单占满整行
    let constraints = if app.browser.is_some() {
        [Constraint::Percentage(40), Constraint::Percentage(60)]
    } else {
        [Constraint::Percentage(100), Constraint::Percentage(0)]
    };
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(main_layout[1]);

    let texts = t();
    let form_area = panel(frame, columns[0], texts.form.title, app.focus.is_form());
    pages::form::render(app, frame, form_area);

    if app.browser.is_some() {
        let browser_area = panel(frame, columns[1], texts.browser.title, app.focus.is_browser());
        pages::browser::render(app, frame, browser_area);
    }

    components::statusbar::render(app, frame, main_layout[2]);

    // 弹窗在最上层
    components::modal::render(app, frame);
}

/// 渲染标题栏
fn render_title_bar(frame: &mut Frame, area: Rect) {
    let c = colors();
    let title = Paragraph::new(format!(" {} v{}", t().common.app_name, env!("CARGO_PKG_VERSION")))
        .style(Style::default().bg(c.highlight).fg(c.selected_fg));
    frame.render_widget(title, area);
}

/// 画出带边框的面板，返回内部区域
fn panel(frame: &mut Frame, area: Rect, title: &str, focused: bool) -> Rect {
    let block = Block::default()
        .title(format!(" {title} "))
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(Styles::border(focused));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    inner
}
