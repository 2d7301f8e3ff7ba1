//! 内存行情目录（离线演示用）

use async_trait::async_trait;
use ticker_selector_provider::{ApiError, Result as ApiResult, TickerApi};

use crate::types::{Industry, TickerCandidate};

/// Fixed in-memory catalog implementing [`TickerApi`].
///
/// Search matches code or company name, case-insensitively, in catalog order.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTickerApi {
    industries: Vec<(Industry, Vec<TickerCandidate>)>,
}

impl InMemoryTickerApi {
    pub fn new(industries: Vec<(Industry, Vec<TickerCandidate>)>) -> Self {
        Self { industries }
    }

    /// A handful of well-known TSE listings grouped by sector
    pub fn sample() -> Self {
        let t = |code: &str, name: &str| TickerCandidate::new(code, name);
        Self::new(vec![
            (
                Industry::new(1, "Fishery, Agriculture & Forestry"),
                vec![t("1332", "Nissui"), t("1379", "Hokuto")],
            ),
            (
                Industry::new(5, "Transportation Equipment"),
                vec![
                    t("7203", "Toyota"),
                    t("7267", "Honda"),
                    t("7201", "Nissan"),
                    t("7269", "Suzuki"),
                ],
            ),
            (
                Industry::new(6, "Banks"),
                vec![t("8306", "MUFG"), t("8316", "SMFG"), t("8411", "Mizuho")],
            ),
            (
                Industry::new(7, "Electric Appliances"),
                vec![t("6758", "Sony"), t("6501", "Hitachi"), t("6752", "Panasonic")],
            ),
            (
                Industry::new(8, "Other Products"),
                vec![t("7974", "Nintendo"), t("7951", "Yamaha")],
            ),
        ])
    }

    fn all_tickers(&self) -> impl Iterator<Item = &TickerCandidate> {
        self.industries.iter().flat_map(|(_, tickers)| tickers)
    }
}

#[async_trait]
impl TickerApi for InMemoryTickerApi {
    async fn search_tickers(&self, query: &str) -> ApiResult<Vec<TickerCandidate>> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return Ok(Vec::new());
        }
        Ok(self
            .all_tickers()
            .filter(|t| t.code.to_lowercase().contains(&needle) || t.name.to_lowercase().contains(&needle))
            .cloned()
            .collect())
    }

    async fn list_industries(&self) -> ApiResult<Vec<Industry>> {
        Ok(self.industries.iter().map(|(i, _)| i.clone()).collect())
    }

    async fn list_industry_tickers(&self, industry_id: i64) -> ApiResult<Vec<TickerCandidate>> {
        self.industries
            .iter()
            .find(|(i, _)| i.id == industry_id)
            .map(|(_, tickers)| tickers.clone())
            .ok_or_else(|| ApiError::HttpStatus {
                endpoint: "industry_tickers".to_string(),
                status: 404,
                raw_message: Some(format!("Industry {industry_id} not found")),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn search_matches_code_prefix_and_name() {
        let api = InMemoryTickerApi::sample();

        let by_code = api.search_tickers("705").await;
        assert_eq!(by_code, Ok(Vec::new()));

        let by_code = api.search_tickers("720").await.unwrap_or_default();
        let codes: Vec<_> = by_code.iter().map(|t| t.code.as_str()).collect();
        assert_eq!(codes, vec!["7203", "7201"]);

        let by_name = api.search_tickers("toyo").await.unwrap_or_default();
        assert_eq!(by_name, vec![TickerCandidate::new("7203", "Toyota")]);
    }

    #[tokio::test]
    async fn blank_query_matches_nothing() {
        let api = InMemoryTickerApi::sample();
        assert_eq!(api.search_tickers("  ").await, Ok(Vec::new()));
    }

    #[tokio::test]
    async fn unknown_industry_is_not_found() {
        let api = InMemoryTickerApi::sample();
        let err = api.list_industry_tickers(404).await.err();
        assert!(matches!(err, Some(ApiError::HttpStatus { status: 404, .. })));
        assert_eq!(api.list_industry_tickers(6).await.map(|t| t.len()), Ok(3));
    }
}
