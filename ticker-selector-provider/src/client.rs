//! HTTP implementation of [`TickerApi`]

use async_trait::async_trait;
use reqwest::Client;
use url::Url;

use crate::error::{ApiError, Result};
use crate::http_client::HttpUtils;
use crate::traits::TickerApi;
use crate::types::{ApiConfig, Industry, TickerCandidate};

/// Endpoint names used in logs and errors.
mod endpoint {
    pub const SEARCH: &str = "tickers/search";
    pub const INDUSTRIES: &str = "industries";
    pub const INDUSTRY_TICKERS: &str = "industries/tickers";
    pub const HEALTH: &str = "health";
}

/// Ticker API client backed by `reqwest`.
///
/// Uses the literal REST paths:
/// - `api/tickers/search/?q=<text>`
/// - `api/industries/`
/// - `api/industries/{id}/tickers/`
/// - `health/`
pub struct HttpTickerApi {
    client: Client,
    base_url: Url,
    max_retries: u32,
}

impl HttpTickerApi {
    /// Build a client from `config`.
    ///
    /// The base URL must be absolute http(s). A missing trailing slash is
    /// added so relative joins keep the full base path.
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let base_url = parse_base_url(&config.base_url)?;

        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ApiError::NetworkError {
                endpoint: base_url.to_string(),
                detail: format!("Failed to build HTTP client: {e}"),
            })?;

        log::debug!(
            "Ticker API client ready: base={base_url}, timeout={:?}, retries={}",
            config.timeout,
            config.max_retries
        );

        Ok(Self {
            client,
            base_url,
            max_retries: config.max_retries,
        })
    }

    /// Normalized server root.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Search URL with the query percent-encoded.
    pub fn search_url(&self, query: &str) -> Result<Url> {
        let mut url = self.join("api/tickers/search/")?;
        url.query_pairs_mut().append_pair("q", query);
        Ok(url)
    }

    pub fn industries_url(&self) -> Result<Url> {
        self.join("api/industries/")
    }

    pub fn industry_tickers_url(&self, industry_id: i64) -> Result<Url> {
        self.join(&format!("api/industries/{industry_id}/tickers/"))
    }

    pub fn health_url(&self) -> Result<Url> {
        self.join("health/")
    }

    fn join(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(path)
            .map_err(|e| ApiError::InvalidBaseUrl {
                url: self.base_url.to_string(),
                detail: e.to_string(),
            })
    }

    async fn get_json<T>(&self, url: Url, endpoint: &str) -> Result<T>
    where
        T: serde::de::DeserializeOwned,
    {
        let request = self.client.get(url).header("Accept", "application/json");
        let body =
            HttpUtils::execute_request_with_retry(request, endpoint, self.max_retries).await?;
        HttpUtils::parse_json(&body, endpoint)
    }
}

#[async_trait]
impl TickerApi for HttpTickerApi {
    async fn search_tickers(&self, query: &str) -> Result<Vec<TickerCandidate>> {
        let url = self.search_url(query)?;
        self.get_json(url, endpoint::SEARCH).await
    }

    async fn list_industries(&self) -> Result<Vec<Industry>> {
        let url = self.industries_url()?;
        self.get_json(url, endpoint::INDUSTRIES).await
    }

    async fn list_industry_tickers(&self, industry_id: i64) -> Result<Vec<TickerCandidate>> {
        let url = self.industry_tickers_url(industry_id)?;
        self.get_json(url, endpoint::INDUSTRY_TICKERS).await
    }

    async fn health_check(&self) -> Result<bool> {
        let url = self.health_url()?;
        let request = self.client.get(url);
        match HttpUtils::execute_request(request, endpoint::HEALTH).await {
            Ok(body) => Ok(body.trim() == "OK"),
            Err(ApiError::HttpStatus { .. }) => Ok(false),
            Err(e) => Err(e),
        }
    }
}

fn parse_base_url(raw: &str) -> Result<Url> {
    let trimmed = raw.trim();
    let with_slash = if trimmed.ends_with('/') {
        trimmed.to_string()
    } else {
        format!("{trimmed}/")
    };

    let url = Url::parse(&with_slash).map_err(|e| ApiError::InvalidBaseUrl {
        url: raw.to_string(),
        detail: e.to_string(),
    })?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(ApiError::InvalidBaseUrl {
            url: raw.to_string(),
            detail: format!("unsupported scheme '{}'", url.scheme()),
        });
    }

    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api(base: &str) -> Option<HttpTickerApi> {
        HttpTickerApi::new(&ApiConfig::new(base)).ok()
    }

    #[test]
    fn search_url_encodes_query() {
        let Some(api) = api("http://localhost:8000") else {
            panic!("client should build");
        };
        let url = api.search_url("トヨタ 7203").map(|u| u.to_string());
        assert_eq!(
            url.ok().as_deref(),
            Some(
                "http://localhost:8000/api/tickers/search/?q=%E3%83%88%E3%83%A8%E3%82%BF+7203"
            )
        );
    }

    #[test]
    fn industry_tickers_url_uses_literal_rest_path() {
        let Some(api) = api("http://localhost:8000/") else {
            panic!("client should build");
        };
        let url = api.industry_tickers_url(5).map(|u| u.to_string());
        assert_eq!(
            url.ok().as_deref(),
            Some("http://localhost:8000/api/industries/5/tickers/")
        );
    }

    #[test]
    fn base_path_is_preserved() {
        let Some(api) = api("https://example.com/stocks") else {
            panic!("client should build");
        };
        let url = api.industries_url().map(|u| u.to_string());
        assert_eq!(
            url.ok().as_deref(),
            Some("https://example.com/stocks/api/industries/")
        );
    }

    #[test]
    fn rejects_non_http_scheme() {
        let result = HttpTickerApi::new(&ApiConfig::new("ftp://example.com"));
        assert!(matches!(result, Err(ApiError::InvalidBaseUrl { .. })));
    }

    #[test]
    fn rejects_relative_url() {
        let result = HttpTickerApi::new(&ApiConfig::new("api/"));
        assert!(matches!(result, Err(ApiError::InvalidBaseUrl { .. })));
    }
}
