//! 表单面板消息处理

use crate::i18n::t;
use crate::message::{Command, FormMessage};
use crate::model::App;

pub fn update(app: &mut App, msg: FormMessage) -> Vec<Command> {
    match msg {
        FormMessage::SelectPrevious => app.form.select_previous(),
        FormMessage::SelectNext => app.form.select_next(app.triggers.len()),
        FormMessage::OpenSearch => open_search(app),
    }
    Vec::new()
}

/// 按下搜索按钮：绑定目标字段并打开搜索弹窗
fn open_search(app: &mut App) {
    let Some(trigger) = app.triggers.get(app.form.selected).cloned() else {
        return;
    };
    let Some(selector) = app.selector.as_mut() else {
        app.set_status(t().status_bar.search_disabled);
        return;
    };

    selector.bind_trigger(&trigger, &app.fields);
    app.modal.open_search();
    app.clear_status();
}
