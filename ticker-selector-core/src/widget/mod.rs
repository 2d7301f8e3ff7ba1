//! Selector widget state
//!
//! Both widgets are plain state machines: they never perform I/O. A query
//! returns a ticket carrying a sequence number; whoever runs the fetch hands
//! the outcome back together with that number, and the widget decides whether
//! the response is still wanted.

mod hierarchy;
mod selector;

pub use hierarchy::{ChildQueryTicket, IndustryBrowser};
pub use selector::{
    QueryAction, QueryTicket, ResponseOrdering, SelectorOptions, SelectorPhase, TickerSelector,
};

/// Result of handing a fetch outcome back to a widget
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyOutcome {
    /// The list was replaced with `count` rows
    Applied { count: usize },
    /// The fetch failed; the list was cleared and an error recorded
    Failed,
    /// A newer request (or a reset) superseded this one; nothing changed
    Stale,
}

/// Result of activating a candidate row
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// `code` was written into the field matched by `target`
    Written {
        target: String,
        code: String,
        /// The hosting overlay should be closed
        dismiss_overlay: bool,
    },
    /// No active binding, inert binding, or unknown row: nothing changed
    Ignored,
}

impl Selection {
    pub fn is_written(&self) -> bool {
        matches!(self, Self::Written { .. })
    }
}
