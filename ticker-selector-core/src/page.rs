//! Page layout contract and widget initialization

use serde::{Deserialize, Serialize};

use crate::traits::InMemoryFields;
use crate::types::Trigger;
use crate::widget::{IndustryBrowser, SelectorOptions, TickerSelector};

/// Anchor ids the widgets mount onto
pub mod anchors {
    /// Overlay hosting the search widget
    pub const TICKER_MODAL: &str = "tickerModal";
    /// Industry (primary) list of the browser
    pub const INDUSTRY_LIST: &str = "industry-list";
    /// Ticker (secondary) list of the browser
    pub const TICKER_LIST: &str = "ticker-list";
    /// Fixed field populated by the browser
    pub const TICKER_CODE: &str = "ticker-code";

    pub const ALL: [&str; 4] = [TICKER_MODAL, INDUSTRY_LIST, TICKER_LIST, TICKER_CODE];
}

/// Page description: which anchors exist, the input fields, and the triggers
/// that open the search overlay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageSchema {
    #[serde(default)]
    pub anchors: Vec<String>,
    #[serde(default)]
    pub fields: Vec<String>,
    #[serde(default)]
    pub triggers: Vec<Trigger>,
}

impl Default for PageSchema {
    /// The two-ticker comparison form: `ticker1` / `ticker2` each with a
    /// search button, plus the browser's `ticker-code` field.
    fn default() -> Self {
        Self {
            anchors: anchors::ALL.iter().map(ToString::to_string).collect(),
            fields: vec![
                "ticker1".to_string(),
                "ticker2".to_string(),
                anchors::TICKER_CODE.to_string(),
            ],
            triggers: vec![
                Trigger::new("search-ticker1", "#ticker1"),
                Trigger::new("search-ticker2", "#ticker2"),
            ],
        }
    }
}

impl PageSchema {
    pub fn has_anchor(&self, id: &str) -> bool {
        self.anchors.iter().any(|a| a == id)
    }

    /// Fresh, empty input fields for this page
    pub fn build_fields(&self) -> InMemoryFields {
        let mut fields = InMemoryFields::new();
        for id in &self.fields {
            fields.insert(id.clone());
        }
        fields
    }

    pub fn trigger(&self, id: &str) -> Option<&Trigger> {
        self.triggers.iter().find(|t| t.id == id)
    }
}

/// Widgets mounted by [`initialize`]; `None` means the anchors were missing
#[derive(Debug, Clone, Default)]
pub struct Widgets {
    pub selector: Option<TickerSelector>,
    pub browser: Option<IndustryBrowser>,
}

/// Mount the widgets the page supports.
///
/// Call once per page. A missing overlay disables the search widget; the
/// browser needs both of its lists. Without a `ticker-code` field the browser
/// still mounts but leaf selection writes nothing.
pub fn initialize(schema: &PageSchema, options: SelectorOptions) -> Widgets {
    let selector = if schema.has_anchor(anchors::TICKER_MODAL) {
        Some(TickerSelector::new(options))
    } else {
        log::warn!("Anchor '{}' not found, search widget disabled", anchors::TICKER_MODAL);
        None
    };

    let browser = match (
        schema.has_anchor(anchors::INDUSTRY_LIST),
        schema.has_anchor(anchors::TICKER_LIST),
    ) {
        (true, true) => {
            if !schema.fields.iter().any(|f| f == anchors::TICKER_CODE) {
                log::warn!(
                    "Field '{}' not found, industry browser selection is inert",
                    anchors::TICKER_CODE
                );
            }
            Some(IndustryBrowser::new())
        }
        _ => {
            log::warn!(
                "Anchors '{}'/'{}' not found, industry browser disabled",
                anchors::INDUSTRY_LIST,
                anchors::TICKER_LIST
            );
            None
        }
    };

    log::info!(
        "Initialized page: selector={}, browser={}, {} trigger(s)",
        selector.is_some(),
        browser.is_some(),
        schema.triggers.len()
    );

    Widgets { selector, browser }
}
