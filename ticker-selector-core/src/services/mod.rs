//! 异步服务层
//!
//! The widgets never perform I/O themselves; these services run their
//! tickets and provide the data sources.

mod catalog;
mod runtime;

pub use catalog::InMemoryTickerApi;
pub use runtime::{WidgetEvent, WidgetRuntime, DEFAULT_TIMEOUT};
