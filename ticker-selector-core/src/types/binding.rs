use serde::{Deserialize, Serialize};

use crate::traits::TargetFields;

/// UI element that starts a selection flow.
///
/// Mirrors a button carrying `data-input="#target"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trigger {
    /// Stable id of the trigger itself
    pub id: String,
    /// Selector of the field the selection is written into
    #[serde(rename = "data_input", alias = "target_selector")]
    pub target_selector: String,
}

impl Trigger {
    pub fn new(id: impl Into<String>, target_selector: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            target_selector: target_selector.into(),
        }
    }
}

/// Association between an activated trigger and the field it populates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binding {
    /// Trigger that created the binding
    pub trigger_id: String,
    /// Resolved target selector; `None` when nothing matched at bind time
    pub target: Option<String>,
}

impl Binding {
    /// Resolve `trigger` against `fields`.
    pub fn resolve(trigger: &Trigger, fields: &dyn TargetFields) -> Self {
        let target = fields
            .contains(&trigger.target_selector)
            .then(|| trigger.target_selector.clone());
        Self {
            trigger_id: trigger.id.clone(),
            target,
        }
    }

    /// A binding whose selector matched nothing; selection through it no-ops.
    pub fn is_inert(&self) -> bool {
        self.target.is_none()
    }
}
