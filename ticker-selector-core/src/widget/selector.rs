//! Incremental ticker search widget

use serde::{Deserialize, Serialize};

use super::{ApplyOutcome, Selection};
use crate::error::CoreResult;
use crate::traits::TargetFields;
use crate::types::{Binding, TickerCandidate, Trigger};

/// Which of several overlapping responses gets rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseOrdering {
    /// Only the most recently issued request may render
    #[default]
    LatestRequest,
    /// Every response renders as it arrives; the last to resolve wins
    LastResolved,
}

/// Widget lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectorPhase {
    #[default]
    Idle,
    Querying,
    Rendered,
    Failed,
    Selected,
}

/// Construction options for [`TickerSelector`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectorOptions {
    pub ordering: ResponseOrdering,
    /// The widget lives in a dismissible overlay (the ticker modal)
    pub hosted_in_overlay: bool,
}

impl Default for SelectorOptions {
    fn default() -> Self {
        Self {
            ordering: ResponseOrdering::default(),
            hosted_in_overlay: true,
        }
    }
}

/// A search the caller must run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryTicket {
    pub seq: u64,
    /// Trimmed query text
    pub query: String,
}

/// What a query change asks the caller to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryAction {
    /// Empty query: results were cleared, no request needed
    Cleared,
    /// Issue exactly this search
    Fetch(QueryTicket),
}

/// Search-and-select state for one ticker modal.
///
/// Holds the query text, the current candidate set and the active binding.
/// Sequence numbers decide staleness: `last_issued` is the newest ticket,
/// and anything at or below `floor` was invalidated by a reset.
#[derive(Debug, Clone, Default)]
pub struct TickerSelector {
    options: SelectorOptions,
    query: String,
    candidates: Vec<TickerCandidate>,
    binding: Option<Binding>,
    phase: SelectorPhase,
    last_issued: u64,
    floor: u64,
    error: Option<String>,
}

impl TickerSelector {
    #[must_use]
    pub fn new(options: SelectorOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn candidates(&self) -> &[TickerCandidate] {
        &self.candidates
    }

    pub fn binding(&self) -> Option<&Binding> {
        self.binding.as_ref()
    }

    pub fn phase(&self) -> SelectorPhase {
        self.phase
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.phase == SelectorPhase::Querying
    }

    /// Activate `trigger`: its target becomes the active binding.
    ///
    /// Replaces any previous binding, clears the query and the candidate
    /// set, and invalidates every request still in flight. A selector that
    /// matches no field yields an inert binding.
    pub fn bind_trigger(&mut self, trigger: &Trigger, fields: &dyn TargetFields) -> &Binding {
        let binding = Binding::resolve(trigger, fields);
        if binding.is_inert() {
            log::warn!(
                "Trigger '{}' targets '{}', which matches no field; selection is disabled",
                trigger.id,
                trigger.target_selector
            );
        } else {
            log::debug!(
                "Trigger '{}' bound to '{}'",
                trigger.id,
                trigger.target_selector
            );
        }

        self.reset_results();
        self.phase = SelectorPhase::Idle;
        self.binding.insert(binding)
    }

    /// Handle new query text.
    ///
    /// Whitespace-only text clears the candidates synchronously. Anything
    /// else yields exactly one ticket.
    pub fn on_query_change(&mut self, text: &str) -> QueryAction {
        self.query = text.to_string();
        let trimmed = text.trim();

        if trimmed.is_empty() {
            self.candidates.clear();
            self.error = None;
            self.phase = SelectorPhase::Idle;
            if self.options.ordering == ResponseOrdering::LatestRequest {
                self.floor = self.last_issued;
            }
            return QueryAction::Cleared;
        }

        self.last_issued += 1;
        self.phase = SelectorPhase::Querying;
        log::debug!("Search #{} issued: '{trimmed}'", self.last_issued);

        QueryAction::Fetch(QueryTicket {
            seq: self.last_issued,
            query: trimmed.to_string(),
        })
    }

    /// Whether a response for `seq` may still render
    pub fn accepts(&self, seq: u64) -> bool {
        if seq <= self.floor || seq > self.last_issued {
            return false;
        }
        match self.options.ordering {
            ResponseOrdering::LatestRequest => seq == self.last_issued,
            ResponseOrdering::LastResolved => true,
        }
    }

    /// Hand back the outcome of the search issued as `seq`.
    ///
    /// Success replaces the candidate set wholesale, in server order.
    /// Failure clears it and records the error message.
    pub fn apply_results(
        &mut self,
        seq: u64,
        result: CoreResult<Vec<TickerCandidate>>,
    ) -> ApplyOutcome {
        if !self.accepts(seq) {
            log::debug!(
                "Search #{seq} discarded as stale (latest #{}, floor #{})",
                self.last_issued,
                self.floor
            );
            return ApplyOutcome::Stale;
        }

        match result {
            Ok(candidates) => {
                let count = candidates.len();
                self.candidates = candidates;
                self.error = None;
                self.phase = SelectorPhase::Rendered;
                log::debug!("Search #{seq} rendered {count} candidate(s)");
                ApplyOutcome::Applied { count }
            }
            Err(e) => {
                if e.is_expected() {
                    log::warn!("Search #{seq} failed: {e}");
                } else {
                    log::error!("Search #{seq} failed: {e}");
                }
                self.candidates.clear();
                self.error = Some(e.to_string());
                self.phase = SelectorPhase::Failed;
                ApplyOutcome::Failed
            }
        }
    }

    /// Activate `candidate`.
    ///
    /// With a live binding, writes `candidate.code` into the bound field,
    /// clears the results and consumes the binding. Without one, nothing
    /// changes.
    pub fn activate_candidate(
        &mut self,
        candidate: &TickerCandidate,
        fields: &mut dyn TargetFields,
    ) -> Selection {
        let Some(target) = self.binding.as_ref().and_then(|b| b.target.clone()) else {
            log::debug!("Candidate '{}' activated without a live binding", candidate.code);
            return Selection::Ignored;
        };

        if !fields.set_value(&target, &candidate.code) {
            log::warn!("Target '{target}' disappeared before selection");
            return Selection::Ignored;
        }

        log::info!("Selected {} into '{target}'", candidate.code);
        self.binding = None;
        self.reset_results();
        self.phase = SelectorPhase::Selected;

        Selection::Written {
            target,
            code: candidate.code.clone(),
            dismiss_overlay: self.options.hosted_in_overlay,
        }
    }

    /// [`activate_candidate`](Self::activate_candidate) by row index
    pub fn activate_index(&mut self, index: usize, fields: &mut dyn TargetFields) -> Selection {
        match self.candidates.get(index).cloned() {
            Some(candidate) => self.activate_candidate(&candidate, fields),
            None => Selection::Ignored,
        }
    }

    fn reset_results(&mut self) {
        self.query.clear();
        self.candidates.clear();
        self.error = None;
        self.floor = self.last_issued;
    }
}
