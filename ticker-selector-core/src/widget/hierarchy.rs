//! Industry → ticker browse widget

use super::{ApplyOutcome, Selection};
use crate::error::CoreResult;
use crate::page::anchors;
use crate::traits::TargetFields;
use crate::types::{Industry, TickerCandidate};

/// Child listing the caller must fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChildQueryTicket {
    pub seq: u64,
    pub industry_id: i64,
}

/// Two-level browser: industries on the left, their tickers on the right.
///
/// Activating a ticker always writes into the same fixed field; there is no
/// binding to change.
#[derive(Debug, Clone)]
pub struct IndustryBrowser {
    target: String,
    industries: Vec<Industry>,
    tickers: Vec<TickerCandidate>,
    active_industry: Option<i64>,
    industries_issued: u64,
    tickers_issued: u64,
    industries_loading: bool,
    tickers_loading: bool,
    error: Option<String>,
}

impl Default for IndustryBrowser {
    fn default() -> Self {
        Self::new()
    }
}

impl IndustryBrowser {
    /// Browser writing into `#ticker-code`
    #[must_use]
    pub fn new() -> Self {
        Self::with_target(format!("#{}", anchors::TICKER_CODE))
    }

    #[must_use]
    pub fn with_target(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            industries: Vec::new(),
            tickers: Vec::new(),
            active_industry: None,
            industries_issued: 0,
            tickers_issued: 0,
            industries_loading: false,
            tickers_loading: false,
            error: None,
        }
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn industries(&self) -> &[Industry] {
        &self.industries
    }

    pub fn tickers(&self) -> &[TickerCandidate] {
        &self.tickers
    }

    pub fn active_industry(&self) -> Option<&Industry> {
        let id = self.active_industry?;
        self.industries.iter().find(|i| i.id == id)
    }

    pub fn is_loading(&self) -> bool {
        self.industries_loading || self.tickers_loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Start (or restart) loading the industry list; returns its sequence number.
    pub fn begin_load_industries(&mut self) -> u64 {
        self.industries_issued += 1;
        self.industries_loading = true;
        self.industries_issued
    }

    /// Replace the industry list with the outcome of `seq`.
    ///
    /// A failed reload, or one that no longer lists the active industry,
    /// also drops the ticker list and invalidates any child fetch in flight.
    pub fn apply_industries(&mut self, seq: u64, result: CoreResult<Vec<Industry>>) -> ApplyOutcome {
        if seq != self.industries_issued {
            return ApplyOutcome::Stale;
        }
        self.industries_loading = false;

        match result {
            Ok(industries) => {
                let count = industries.len();
                log::debug!("Loaded {count} industries");
                self.industries = industries;
                self.error = None;
                if let Some(id) = self.active_industry {
                    if !self.industries.iter().any(|i| i.id == id) {
                        log::debug!("Active industry {id} no longer listed");
                        self.reset_children();
                    }
                }
                ApplyOutcome::Applied { count }
            }
            Err(e) => {
                if e.is_expected() {
                    log::warn!("Failed to load industries: {e}");
                } else {
                    log::error!("Failed to load industries: {e}");
                }
                self.industries.clear();
                self.reset_children();
                self.error = Some(e.to_string());
                ApplyOutcome::Failed
            }
        }
    }

    fn reset_children(&mut self) {
        self.active_industry = None;
        self.tickers.clear();
        self.tickers_issued += 1;
        self.tickers_loading = false;
    }

    /// Activate an industry node; its tickers must be fetched with the returned ticket.
    pub fn activate_industry(&mut self, industry_id: i64) -> ChildQueryTicket {
        self.active_industry = Some(industry_id);
        self.tickers_issued += 1;
        self.tickers_loading = true;
        log::debug!("Industry {industry_id} activated (#{})", self.tickers_issued);
        ChildQueryTicket {
            seq: self.tickers_issued,
            industry_id,
        }
    }

    /// Replace the ticker list with the outcome of `seq`.
    ///
    /// Only the latest activation may render; the list is never merged.
    pub fn apply_tickers(
        &mut self,
        seq: u64,
        result: CoreResult<Vec<TickerCandidate>>,
    ) -> ApplyOutcome {
        if seq != self.tickers_issued {
            log::debug!("Industry tickers #{seq} discarded as stale");
            return ApplyOutcome::Stale;
        }
        self.tickers_loading = false;

        match result {
            Ok(tickers) => {
                let count = tickers.len();
                self.tickers = tickers;
                self.error = None;
                ApplyOutcome::Applied { count }
            }
            Err(e) => {
                if e.is_expected() {
                    log::warn!("Failed to load industry tickers: {e}");
                } else {
                    log::error!("Failed to load industry tickers: {e}");
                }
                self.tickers.clear();
                self.error = Some(e.to_string());
                ApplyOutcome::Failed
            }
        }
    }

    /// Copy `ticker.code` into the fixed target field.
    pub fn activate_ticker(
        &self,
        ticker: &TickerCandidate,
        fields: &mut dyn TargetFields,
    ) -> Selection {
        if fields.set_value(&self.target, &ticker.code) {
            log::info!("Selected {} into '{}'", ticker.code, self.target);
            Selection::Written {
                target: self.target.clone(),
                code: ticker.code.clone(),
                dismiss_overlay: false,
            }
        } else {
            Selection::Ignored
        }
    }

    pub fn activate_ticker_index(&self, index: usize, fields: &mut dyn TargetFields) -> Selection {
        match self.tickers.get(index) {
            Some(ticker) => self.activate_ticker(ticker, fields),
            None => Selection::Ignored,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;
    use crate::traits::InMemoryFields;
    use crate::ApiError;

    fn loaded() -> IndustryBrowser {
        let mut b = IndustryBrowser::new();
        let seq = b.begin_load_industries();
        b.apply_industries(
            seq,
            Ok(vec![
                Industry::new(5, "Transportation Equipment"),
                Industry::new(6, "Banks"),
            ]),
        );
        b
    }

    #[test]
    fn selecting_industry_replaces_ticker_list_entirely() {
        let mut b = loaded();
        let t = b.activate_industry(6);
        b.apply_tickers(
            t.seq,
            Ok(vec![
                TickerCandidate::new("8306", "MUFG"),
                TickerCandidate::new("8316", "SMFG"),
            ]),
        );

        let t = b.activate_industry(5);
        assert_eq!(t.industry_id, 5);
        let outcome = b.apply_tickers(t.seq, Ok(vec![TickerCandidate::new("7203", "Toyota")]));

        assert_eq!(outcome, ApplyOutcome::Applied { count: 1 });
        assert_eq!(b.tickers(), [TickerCandidate::new("7203", "Toyota")].as_slice());
        assert_eq!(b.active_industry().map(|i| i.name.as_str()), Some("Transportation Equipment"));
    }

    #[test]
    fn quick_reselect_drops_earlier_children() {
        let mut b = loaded();
        let banks = b.activate_industry(6);
        let autos = b.activate_industry(5);

        b.apply_tickers(autos.seq, Ok(vec![TickerCandidate::new("7203", "Toyota")]));
        let outcome = b.apply_tickers(banks.seq, Ok(vec![TickerCandidate::new("8306", "MUFG")]));

        assert_eq!(outcome, ApplyOutcome::Stale);
        assert_eq!(b.tickers()[0].code, "7203");
        assert!(!b.is_loading());
    }

    #[test]
    fn leaf_activation_writes_fixed_target() {
        let mut b = loaded();
        let t = b.activate_industry(5);
        b.apply_tickers(t.seq, Ok(vec![TickerCandidate::new("7203", "Toyota")]));
        let mut fields = InMemoryFields::new().with_field("ticker1").with_field("ticker-code");

        let selection = b.activate_ticker_index(0, &mut fields);

        assert!(selection.is_written());
        assert_eq!(fields.value("ticker-code"), Some("7203"));
        assert_eq!(fields.value("ticker1"), Some(""));
        // list stays for further picks
        assert_eq!(b.tickers().len(), 1);
    }

    #[test]
    fn leaf_activation_without_target_is_inert() {
        let mut b = loaded();
        let t = b.activate_industry(5);
        b.apply_tickers(t.seq, Ok(vec![TickerCandidate::new("7203", "Toyota")]));
        let mut fields = InMemoryFields::new().with_field("ticker1");

        assert_eq!(b.activate_ticker_index(0, &mut fields), Selection::Ignored);
        assert_eq!(fields.value("ticker1"), Some(""));
    }

    #[test]
    fn child_failure_clears_list() {
        let mut b = loaded();
        let t = b.activate_industry(5);
        b.apply_tickers(t.seq, Ok(vec![TickerCandidate::new("7203", "Toyota")]));
        let t = b.activate_industry(99);

        let outcome = b.apply_tickers(
            t.seq,
            Err(CoreError::Api(ApiError::HttpStatus {
                endpoint: "industries/tickers".to_string(),
                status: 404,
                raw_message: None,
            })),
        );

        assert_eq!(outcome, ApplyOutcome::Failed);
        assert!(b.tickers().is_empty());
        assert!(b.error().is_some());
    }

    #[test]
    fn industry_reload_ignores_previous_load() {
        let mut b = IndustryBrowser::new();
        let first = b.begin_load_industries();
        let second = b.begin_load_industries();

        assert_eq!(b.apply_industries(first, Ok(Vec::new())), ApplyOutcome::Stale);
        assert_eq!(
            b.apply_industries(second, Ok(vec![Industry::new(1, "Fishery")])),
            ApplyOutcome::Applied { count: 1 }
        );
    }

    #[test]
    fn failed_reload_drops_tickers_and_pending_child_fetch() {
        let mut b = loaded();
        let t = b.activate_industry(5);
        b.apply_tickers(t.seq, Ok(vec![TickerCandidate::new("7203", "Toyota")]));
        let pending = b.activate_industry(6);

        let seq = b.begin_load_industries();
        let outcome = b.apply_industries(
            seq,
            Err(CoreError::Api(ApiError::NetworkError {
                endpoint: "industries".to_string(),
                detail: "connection refused".to_string(),
            })),
        );

        assert_eq!(outcome, ApplyOutcome::Failed);
        assert!(b.industries().is_empty());
        assert!(b.tickers().is_empty());
        assert!(b.active_industry().is_none());
        assert!(!b.is_loading());
        assert_eq!(
            b.apply_tickers(pending.seq, Ok(vec![TickerCandidate::new("8306", "MUFG")])),
            ApplyOutcome::Stale
        );
        assert!(b.tickers().is_empty());

        let mut fields = InMemoryFields::new().with_field("ticker-code");
        assert_eq!(b.activate_ticker_index(0, &mut fields), Selection::Ignored);
        assert_eq!(fields.value("ticker-code"), Some(""));
    }

    #[test]
    fn reload_without_active_industry_drops_its_tickers() {
        let mut b = loaded();
        let t = b.activate_industry(5);
        b.apply_tickers(t.seq, Ok(vec![TickerCandidate::new("7203", "Toyota")]));

        let seq = b.begin_load_industries();
        b.apply_industries(seq, Ok(vec![Industry::new(6, "Banks")]));

        assert!(b.tickers().is_empty());
        assert!(b.active_industry().is_none());
    }

    #[test]
    fn reload_keeping_active_industry_keeps_its_tickers() {
        let mut b = loaded();
        let t = b.activate_industry(5);
        b.apply_tickers(t.seq, Ok(vec![TickerCandidate::new("7203", "Toyota")]));

        let seq = b.begin_load_industries();
        b.apply_industries(seq, Ok(vec![Industry::new(5, "Transportation Equipment")]));

        assert_eq!(b.tickers().len(), 1);
        assert_eq!(b.active_industry().map(|i| i.id), Some(5));
    }
}
