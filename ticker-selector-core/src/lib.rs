//! Ticker Selector Core Library
//!
//! Platform-independent state for ticker pickers:
//! - Incremental search widget (`TickerSelector`) with trigger bindings
//! - Industry → ticker browser (`IndustryBrowser`)
//! - Page anchors and one-shot `initialize`
//! - `WidgetRuntime`, which runs fetches on tokio and reports back by sequence number
//!
//! Front ends own the widgets and feed them results; input fields are
//! abstracted through the [`TargetFields`] trait.

pub mod error;
pub mod page;
pub mod services;
pub mod traits;
pub mod types;
pub mod widget;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use error::{ApiError, CoreError, CoreResult};
pub use page::{initialize, PageSchema, Widgets};
pub use services::{InMemoryTickerApi, WidgetEvent, WidgetRuntime};
pub use traits::{InMemoryFields, TargetFields};
pub use widget::{ApplyOutcome, IndustryBrowser, Selection, TickerSelector};
