//! Front-end abstraction trait definition

mod target_fields;

pub use target_fields::{selector_id, InMemoryFields, TargetFields};
