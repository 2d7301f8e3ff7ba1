//! 弹窗消息处理

use ticker_selector_core::widget::{QueryAction, Selection};

use crate::i18n::t;
use crate::message::{Command, ModalMessage};
use crate::model::{App, Modal};

pub fn update(app: &mut App, msg: ModalMessage) -> Vec<Command> {
    match app.modal.active {
        Some(Modal::TickerSearch { .. }) => handle_search(app, msg),
        Some(Modal::Help) => {
            if matches!(msg, ModalMessage::Close | ModalMessage::Confirm) {
                app.modal.close();
            }
            Vec::new()
        }
        None => Vec::new(),
    }
}

fn handle_search(app: &mut App, msg: ModalMessage) -> Vec<Command> {
    let Some(selector) = app.selector.as_mut() else {
        app.modal.close();
        return Vec::new();
    };

    match msg {
        ModalMessage::Close => {
            app.modal.close();
            Vec::new()
        }

        ModalMessage::Input(c) => {
            let mut query = selector.query().to_string();
            query.push(c);
            query_changed(app, &query)
        }

        ModalMessage::Backspace => {
            let mut query = selector.query().to_string();
            query.pop();
            query_changed(app, &query)
        }

        ModalMessage::ClearInput => query_changed(app, ""),

        ModalMessage::SelectPrevious => {
            if let Some(cursor) = app.modal.search_cursor() {
                *cursor = cursor.saturating_sub(1);
            }
            Vec::new()
        }

        ModalMessage::SelectNext => {
            let len = selector.candidates().len();
            if let Some(cursor) = app.modal.search_cursor() {
                if len > 0 && *cursor < len - 1 {
                    *cursor += 1;
                }
            }
            Vec::new()
        }

        ModalMessage::Confirm => {
            let index = app.modal.search_cursor().map_or(0, |c| *c);
            match selector.activate_index(index, &mut app.fields) {
                Selection::Written {
                    target,
                    code,
                    dismiss_overlay,
                } => {
                    app.set_status(format!("{}: {code} → {target}", t().status_bar.selected));
                    if dismiss_overlay {
                        app.modal.close();
                    }
                }
                Selection::Ignored => {}
            }
            Vec::new()
        }
    }
}

/// 查询文本变化：重置光标，必要时发出搜索
fn query_changed(app: &mut App, query: &str) -> Vec<Command> {
    if let Some(cursor) = app.modal.search_cursor() {
        *cursor = 0;
    }
    let Some(selector) = app.selector.as_mut() else {
        return Vec::new();
    };
    match selector.on_query_change(query) {
        QueryAction::Fetch(ticket) => vec![Command::Search(ticket)],
        QueryAction::Cleared => Vec::new(),
    }
}
