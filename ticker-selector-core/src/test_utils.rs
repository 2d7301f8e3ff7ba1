//! 测试辅助模块
//!
//! 提供可编排延迟与结果的 mock `TickerApi`。

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use ticker_selector_provider::{ApiError, Result as ApiResult, TickerApi};
use tokio::sync::Mutex;

use crate::types::{Industry, TickerCandidate};

// ===== MockTickerApi =====

/// Scripted API: every route answers after a configurable delay.
#[derive(Default)]
pub struct MockTickerApi {
    search: HashMap<String, (Duration, ApiResult<Vec<TickerCandidate>>)>,
    industries: Vec<Industry>,
    industry_tickers: HashMap<i64, (Duration, Vec<TickerCandidate>)>,
    health_delay: Duration,
    calls: Mutex<Vec<String>>,
}

impl MockTickerApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(
        mut self,
        query: &str,
        delay: Duration,
        result: ApiResult<Vec<TickerCandidate>>,
    ) -> Self {
        self.search.insert(query.to_string(), (delay, result));
        self
    }

    pub fn with_industries(mut self, industries: Vec<Industry>) -> Self {
        self.industries = industries;
        self
    }

    pub fn with_industry_tickers(
        mut self,
        industry_id: i64,
        delay: Duration,
        tickers: Vec<TickerCandidate>,
    ) -> Self {
        self.industry_tickers.insert(industry_id, (delay, tickers));
        self
    }

    pub fn with_health_delay(mut self, delay: Duration) -> Self {
        self.health_delay = delay;
        self
    }

    /// Calls received so far, e.g. `"search:705"`
    pub async fn calls(&self) -> Vec<String> {
        self.calls.lock().await.clone()
    }

    async fn record(&self, call: String) {
        self.calls.lock().await.push(call);
    }
}

#[async_trait]
impl TickerApi for MockTickerApi {
    async fn search_tickers(&self, query: &str) -> ApiResult<Vec<TickerCandidate>> {
        self.record(format!("search:{query}")).await;
        let (delay, result) = self
            .search
            .get(query)
            .cloned()
            .unwrap_or((Duration::ZERO, Ok(Vec::new())));
        tokio::time::sleep(delay).await;
        result
    }

    async fn list_industries(&self) -> ApiResult<Vec<Industry>> {
        self.record("industries".to_string()).await;
        Ok(self.industries.clone())
    }

    async fn list_industry_tickers(&self, industry_id: i64) -> ApiResult<Vec<TickerCandidate>> {
        self.record(format!("industry:{industry_id}")).await;
        match self.industry_tickers.get(&industry_id) {
            Some((delay, tickers)) => {
                tokio::time::sleep(*delay).await;
                Ok(tickers.clone())
            }
            None => Err(ApiError::HttpStatus {
                endpoint: "industry_tickers".to_string(),
                status: 404,
                raw_message: None,
            }),
        }
    }

    async fn health_check(&self) -> ApiResult<bool> {
        self.record("health".to_string()).await;
        tokio::time::sleep(self.health_delay).await;
        Ok(true)
    }
}

pub fn toyota() -> TickerCandidate {
    TickerCandidate::new("7203", "Toyota")
}
