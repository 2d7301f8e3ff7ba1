//! 类型定义模块

mod binding;

pub use binding::{Binding, Trigger};

// Re-export provider 库的公共类型
pub use ticker_selector_provider::{ApiConfig, Industry, TickerCandidate};
