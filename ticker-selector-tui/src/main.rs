//! Ticker Selector TUI
//!
//! ## 架构
//!
//! 采用 Elm Architecture (TEA) 模式：
//! - **Model**: 应用状态 (`model/`)
//! - **Message**: 事件消息 (`message/`)
//! - **Update**: 状态更新 (`update/`)，返回需要执行的 `Command`
//! - **View**: UI 渲染 (`view/`)
//! - **Event**: 输入处理 (`event/`)
//! - **Backend**: 配置与请求执行 (`backend/`)
//!
//! 启动顺序：
//!     init_logging()          // 日志写入文件
//!     LocalConfigService      // 读取配置并应用环境变量覆盖
//!     CoreService::new()      // 创建数据源和 WidgetRuntime
//!     init_terminal()
//!     app::run()              // 主循环
//!     restore_terminal()      // 无论成功与否，都恢复终端

mod app;
mod backend;
mod event;
mod i18n;
mod message;
mod model;
mod update;
mod util;
mod view;

use anyhow::Result;

use backend::{CoreService, LocalConfigService};
use util::{init_logging, init_terminal, restore_terminal};

#[tokio::main]
async fn main() -> Result<()> {
    // 1. 日志（guard 持有到退出，保证缓冲区写完）
    let _log_guard = init_logging(None)?;
    tracing::info!("Starting Ticker Selector v{}", env!("CARGO_PKG_VERSION"));

    // 2. 配置
    let config_service = LocalConfigService::new()?;
    let config = config_service.load_with_env()?;
    tracing::info!("Config loaded from {}", config_service.path().display());

    // 3. 后端
    let (mut backend, mut events) = CoreService::new(&config.api, Box::new(config_service))?;

    // 4. 初始化终端
    let mut terminal = init_terminal()?;

    // 5. 创建应用实例并运行主循环
    let mut app = model::App::new(config);
    let result = app::run(&mut terminal, &mut app, &mut backend, &mut events);

    // 6. 恢复终端（无论成功失败都执行）
    restore_terminal(&mut terminal)?;

    if let Err(ref e) = result {
        tracing::error!("Exited with error: {e:#}");
    }
    result
}
