//!
//! app.rs
//! 应用主循环
//!
//! loop {
//!     terminal.draw(|f| view::render(&app, f))        // 渲染 UI
//!     if app.should_quit { break }
//!     while let Ok(event) = events.try_recv() {        // 先处理已完成的后台请求
//!         update::update(&mut app, AppMessage::Widget(event))
//!     }
//!     if let Some(event) = poll_event() {              // 轮询键盘输入，最多等待 50ms
//!         let msg = handle_event(event, &app);
//!         let commands = update::update(&mut app, msg);
//!         backend.execute(commands)                    // 网络请求在 tokio 任务里执行
//!     }
//! }
//!

use std::time::Duration;

use anyhow::Result;
use ticker_selector_core::services::WidgetEvent;
use tokio::sync::mpsc::UnboundedReceiver;

use crate::backend::CoreService;
use crate::event;
use crate::i18n::t;
use crate::message::{AppMessage, Command};
use crate::model::App;
use crate::update;
use crate::util::Term;
use crate::view;

const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// 运行应用主循环
pub fn run(
    terminal: &mut Term,
    app: &mut App,
    backend: &mut CoreService,
    events: &mut UnboundedReceiver<WidgetEvent>,
) -> Result<()> {
    let startup = app.startup_commands();
    execute_all(app, backend, startup);

    loop {
        // 1. 渲染 UI
        terminal.draw(|frame| {
            view::render(app, frame);
        })?;

        // 2. 检查是否应该退出
        if app.should_quit {
            break;
        }

        // 3. 后台请求结果
        while let Ok(event) = events.try_recv() {
            let commands = update::update(app, AppMessage::Widget(event));
            execute_all(app, backend, commands);
        }

        // 4. 键盘输入
        if let Some(event) = event::poll_event(POLL_INTERVAL)? {
            let msg = event::handle_event(event, app);
            let commands = update::update(app, msg);
            execute_all(app, backend, commands);
        }
    }

    backend.shutdown();
    Ok(())
}

fn execute_all(app: &mut App, backend: &mut CoreService, commands: Vec<Command>) {
    for command in commands {
        if let Err(e) = backend.execute(command) {
            tracing::error!("Command failed: {e:#}");
            app.set_status(t().status_bar.save_failed);
        }
    }
}
