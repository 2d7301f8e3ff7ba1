//! Generic HTTP client tools
//!
//! Shared request processing for every endpoint of the ticker API:
//! sending, logging, status classification and JSON parsing.
//! Endpoints construct their own `RequestBuilder`; this module never
//! decides URLs.

use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::error::ApiError;
use crate::utils::log_sanitizer::truncate_for_log;

/// HTTP tool function set
pub struct HttpUtils;

impl HttpUtils {
    /// Performs a request and returns the response text of a 2xx answer.
    ///
    /// # Arguments
    /// * `request_builder` - configured request constructor
    /// * `endpoint` - logical endpoint name (for logs and errors)
    ///
    /// # Returns
    /// * `Ok(response_text)` on any 2xx status
    /// * `Err(ApiError::NetworkError | Timeout)` on transport failure
    /// * `Err(ApiError::HttpStatus)` on any other status
    pub async fn execute_request(
        request_builder: RequestBuilder,
        endpoint: &str,
    ) -> Result<String, ApiError> {
        log::debug!("[{endpoint}] GET");

        let response = request_builder.send().await.map_err(|e| {
            if e.is_timeout() {
                ApiError::Timeout {
                    endpoint: endpoint.to_string(),
                    detail: e.to_string(),
                }
            } else {
                ApiError::NetworkError {
                    endpoint: endpoint.to_string(),
                    detail: e.to_string(),
                }
            }
        })?;

        let status = response.status();
        log::debug!("[{endpoint}] Response Status: {}", status.as_u16());

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            log::warn!(
                "[{endpoint}] HTTP {} ({})",
                status.as_u16(),
                truncate_for_log(&body)
            );
            return Err(ApiError::HttpStatus {
                endpoint: endpoint.to_string(),
                status: status.as_u16(),
                raw_message: Some(body),
            });
        }

        let response_text = response.text().await.map_err(|e| {
            if e.is_timeout() {
                ApiError::Timeout {
                    endpoint: endpoint.to_string(),
                    detail: e.to_string(),
                }
            } else {
                ApiError::NetworkError {
                    endpoint: endpoint.to_string(),
                    detail: format!("Failed to read response body: {e}"),
                }
            }
        })?;

        log::debug!(
            "[{endpoint}] Response Body: {}",
            truncate_for_log(&response_text)
        );

        Ok(response_text)
    }

    /// Parse JSON response
    ///
    /// # Returns
    /// * `Ok(T)` - successfully parsed
    /// * `Err(ApiError::ParseError)` - parsing failed
    pub fn parse_json<T>(response_text: &str, endpoint: &str) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        serde_json::from_str(response_text).map_err(|e| {
            log::error!("[{endpoint}] JSON parse failed: {e}");
            log::error!("[{endpoint}] Raw response: {}", truncate_for_log(response_text));
            ApiError::ParseError {
                endpoint: endpoint.to_string(),
                detail: e.to_string(),
            }
        })
    }

    /// Performs a request, retrying transient failures.
    ///
    /// `max_retries == 0` sends exactly one request.
    ///
    /// # Retry strategy
    /// - Only network errors, timeouts and 502/503/504 are retried
    /// - Exponential backoff: 100ms, 200ms, 400ms, ... (maximum 10 seconds)
    pub async fn execute_request_with_retry(
        request_builder: RequestBuilder,
        endpoint: &str,
        max_retries: u32,
    ) -> Result<String, ApiError> {
        if max_retries == 0 {
            return Self::execute_request(request_builder, endpoint).await;
        }

        let mut last_error = None;

        for attempt in 0..=max_retries {
            // RequestBuilder can only be sent once
            let Some(req) = request_builder.try_clone() else {
                log::warn!("[{endpoint}] Cannot clone request, disabling retry");
                return Self::execute_request(request_builder, endpoint).await;
            };

            match Self::execute_request(req, endpoint).await {
                Ok(body) => return Ok(body),
                Err(e) if attempt < max_retries && is_retryable(&e) => {
                    let delay = backoff_delay(attempt);
                    log::warn!(
                        "[{}] Request failed (attempt {}/{}), retrying in {:.1}s: {}",
                        endpoint,
                        attempt + 1,
                        max_retries,
                        delay.as_secs_f32(),
                        e
                    );
                    tokio::time::sleep(delay).await;
                    last_error = Some(e);
                }
                Err(e) => return Err(e),
            }
        }

        Err(last_error.unwrap_or_else(|| ApiError::NetworkError {
            endpoint: endpoint.to_string(),
            detail: "All retries exhausted with no error captured".to_string(),
        }))
    }
}

/// Transient failures worth another attempt.
fn is_retryable(error: &ApiError) -> bool {
    match error {
        ApiError::NetworkError { .. } | ApiError::Timeout { .. } => true,
        ApiError::HttpStatus { status, .. } => matches!(status, 502..=504),
        _ => false,
    }
}

/// Backoff strategy: 100ms, 200ms, 400ms, 800ms, 1.6s, ... capped at 10 seconds
fn backoff_delay(attempt: u32) -> Duration {
    let capped_attempt = attempt.min(20); // Prevent 2^attempt from overflowing
    let delay_ms = 100_u64.saturating_mul(1_u64 << capped_attempt);
    Duration::from_millis(delay_ms.min(10_000))
}

/// Total sleep spent between attempts when every retry is used.
pub(crate) fn total_backoff(max_retries: u32) -> Duration {
    (0..max_retries).map(backoff_delay).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    // ---- is_retryable ----

    #[test]
    fn retryable_network_error() {
        let e = ApiError::NetworkError {
            endpoint: "test".into(),
            detail: "err".into(),
        };
        assert!(is_retryable(&e));
    }

    #[test]
    fn retryable_timeout() {
        let e = ApiError::Timeout {
            endpoint: "test".into(),
            detail: "err".into(),
        };
        assert!(is_retryable(&e));
    }

    #[test]
    fn retryable_gateway_status() {
        let e = ApiError::HttpStatus {
            endpoint: "test".into(),
            status: 503,
            raw_message: None,
        };
        assert!(is_retryable(&e));
    }

    #[test]
    fn not_retryable_not_found() {
        let e = ApiError::HttpStatus {
            endpoint: "test".into(),
            status: 404,
            raw_message: None,
        };
        assert!(!is_retryable(&e));
    }

    #[test]
    fn not_retryable_parse_error() {
        let e = ApiError::ParseError {
            endpoint: "test".into(),
            detail: "err".into(),
        };
        assert!(!is_retryable(&e));
    }

    // ---- backoff_delay ----

    #[test]
    fn backoff_doubles() {
        assert_eq!(backoff_delay(0), Duration::from_millis(100));
        assert_eq!(backoff_delay(1), Duration::from_millis(200));
        assert_eq!(backoff_delay(3), Duration::from_millis(800));
    }

    #[test]
    fn backoff_capped_at_10s() {
        // attempt 7: 100 * 2^7 = 12800ms, capped to 10000ms
        assert_eq!(backoff_delay(7), Duration::from_millis(10_000));
        assert_eq!(backoff_delay(64), Duration::from_millis(10_000));
    }

    // ---- parse_json ----

    #[test]
    fn parse_json_valid() {
        #[derive(serde::Deserialize, Debug, PartialEq)]
        struct Row {
            code: String,
        }
        let result: Result<Vec<Row>, ApiError> =
            HttpUtils::parse_json(r#"[{"code":"7203"}]"#, "test");
        assert!(
            matches!(&result, Ok(rows) if rows.len() == 1 && rows[0].code == "7203"),
            "unexpected parse result: {result:?}"
        );
    }

    #[test]
    fn parse_json_invalid() {
        let result: Result<Vec<String>, ApiError> = HttpUtils::parse_json("<html>", "test");
        assert!(
            matches!(&result, Err(ApiError::ParseError { .. })),
            "unexpected parse result: {result:?}"
        );
    }

    #[test]
    fn total_backoff_sums_every_pause() {
        assert_eq!(total_backoff(0), Duration::ZERO);
        assert_eq!(total_backoff(3), Duration::from_millis(700));
    }
}
