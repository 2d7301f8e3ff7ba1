//!
//! src/backend/mod.rs
//! Backend 层：业务服务
//!
//! Backend 层与 UI 完全解耦：
//!     - core_service.rs     选择数据源（HTTP 或内置样例），执行 Command
//!     - config_service.rs   读写 JSON 配置文件，处理环境变量覆盖
//!
//! 请求结果以 `WidgetEvent` 的形式回到主循环，再作为消息交给 Update 层。
//!

mod config_service;
mod core_service;

pub use config_service::{AppConfig, LocalConfigService};
pub use core_service::CoreService;
