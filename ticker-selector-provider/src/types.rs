use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// A selectable ticker returned by the search and industry endpoints.
///
/// The client never validates or normalizes these values; whatever the
/// server sends is what gets displayed and copied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickerCandidate {
    /// Ticker code, e.g. `"7203"`. This is the value written into targets.
    pub code: String,
    /// Company name, e.g. `"Toyota"`.
    pub name: String,
    /// Database id, when the endpoint includes one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
}

impl TickerCandidate {
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            id: None,
        }
    }

    /// Row label shown in result lists: `"{code} {name}"`.
    pub fn label(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for TickerCandidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.code, self.name)
    }
}

/// Industry node of the browse hierarchy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Industry {
    pub id: i64,
    pub name: String,
}

impl Industry {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// Connection settings for [`HttpTickerApi`](crate::HttpTickerApi).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Server root, e.g. `http://127.0.0.1:8000/`.
    pub base_url: String,
    /// Per-request timeout applied by the HTTP client.
    pub timeout: Duration,
    /// Extra attempts for transient failures. `0` sends each request once.
    pub max_retries: u32,
}

impl ApiConfig {
    pub const DEFAULT_BASE_URL: &'static str = "http://127.0.0.1:8000/";
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    #[must_use]
    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    /// Upper bound for one logical call: every attempt timing out, plus the
    /// backoff between them.
    ///
    /// `timeout` applies per attempt, so an outer deadline shorter than this
    /// cuts retries off.
    pub fn call_budget(&self) -> Duration {
        self.timeout
            .saturating_mul(self.max_retries.saturating_add(1))
            .saturating_add(crate::http_client::total_backoff(self.max_retries))
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: Self::DEFAULT_BASE_URL.to_string(),
            timeout: Self::DEFAULT_TIMEOUT,
            max_retries: 0,
        }
    }
}
