use serde::{Deserialize, Serialize};

/// Unified error type for all ticker API operations.
///
/// Each variant carries the `endpoint` that produced it, plus variant-specific
/// context. All variants are serializable for structured error reporting.
///
/// # Retryable Errors
///
/// The following variants represent transient failures that may succeed on retry:
/// - [`NetworkError`](Self::NetworkError): network connectivity issues
/// - [`Timeout`](Self::Timeout): request timed out
/// - [`HttpStatus`](Self::HttpStatus) with a 5xx status
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "code")]
pub enum ApiError {
    /// A network-level error occurred (DNS resolution failure, connection refused, etc.).
    NetworkError {
        /// Endpoint that produced the error.
        endpoint: String,
        /// Error details.
        detail: String,
    },

    /// The HTTP request timed out.
    Timeout {
        /// Endpoint that produced the error.
        endpoint: String,
        /// Error details.
        detail: String,
    },

    /// The server answered with a non-success status.
    HttpStatus {
        /// Endpoint that produced the error.
        endpoint: String,
        /// HTTP status code.
        status: u16,
        /// Response body, if any.
        raw_message: Option<String>,
    },

    /// Failed to parse the API response.
    ParseError {
        /// Endpoint that produced the error.
        endpoint: String,
        /// Details about the parse failure.
        detail: String,
    },

    /// The configured base URL cannot be used to build request URLs.
    InvalidBaseUrl {
        /// The rejected URL.
        url: String,
        /// Why it was rejected.
        detail: String,
    },
}

impl ApiError {
    /// 是否为预期行为（用户输入、资源不存在等），用于日志分级。
    ///
    /// 返回 `true` 时应使用 `warn` 级别，`false` 时使用 `error` 级别。
    /// **新增变体时请同步更新此方法。**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::HttpStatus { status, .. } => (400..500).contains(status),
            Self::InvalidBaseUrl { .. } => true,
            _ => false,
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NetworkError { endpoint, detail } => {
                write!(f, "[{endpoint}] Network error: {detail}")
            }
            Self::Timeout { endpoint, detail } => {
                write!(f, "[{endpoint}] Request timeout: {detail}")
            }
            Self::HttpStatus {
                endpoint,
                status,
                raw_message,
            } => match raw_message {
                Some(msg) if !msg.is_empty() => {
                    write!(f, "[{endpoint}] HTTP {status}: {msg}")
                }
                _ => write!(f, "[{endpoint}] HTTP {status}"),
            },
            Self::ParseError { endpoint, detail } => {
                write!(f, "[{endpoint}] Parse error: {detail}")
            }
            Self::InvalidBaseUrl { url, detail } => {
                write!(f, "Invalid base URL '{url}': {detail}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

/// Convenience type alias for `Result<T, ApiError>`.
pub type Result<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_network_error() {
        let e = ApiError::NetworkError {
            endpoint: "tickers/search".to_string(),
            detail: "connection refused".to_string(),
        };
        assert_eq!(
            e.to_string(),
            "[tickers/search] Network error: connection refused"
        );
    }

    #[test]
    fn display_http_status_with_body() {
        let e = ApiError::HttpStatus {
            endpoint: "industries".to_string(),
            status: 404,
            raw_message: Some("Not Found".to_string()),
        };
        assert_eq!(e.to_string(), "[industries] HTTP 404: Not Found");
    }

    #[test]
    fn display_http_status_empty_body() {
        let e = ApiError::HttpStatus {
            endpoint: "industries".to_string(),
            status: 500,
            raw_message: Some(String::new()),
        };
        assert_eq!(e.to_string(), "[industries] HTTP 500");
    }

    #[test]
    fn display_timeout() {
        let e = ApiError::Timeout {
            endpoint: "tickers/search".to_string(),
            detail: "5s elapsed".to_string(),
        };
        assert_eq!(e.to_string(), "[tickers/search] Request timeout: 5s elapsed");
    }

    #[test]
    fn client_errors_are_expected() {
        let e = ApiError::HttpStatus {
            endpoint: "industries/9/tickers".to_string(),
            status: 404,
            raw_message: None,
        };
        assert!(e.is_expected());
    }

    #[test]
    fn server_and_network_errors_are_not_expected() {
        let server = ApiError::HttpStatus {
            endpoint: "industries".to_string(),
            status: 503,
            raw_message: None,
        };
        let network = ApiError::NetworkError {
            endpoint: "industries".to_string(),
            detail: "reset".to_string(),
        };
        assert!(!server.is_expected());
        assert!(!network.is_expected());
    }

    #[test]
    fn serializes_with_code_tag() {
        let e = ApiError::ParseError {
            endpoint: "industries".to_string(),
            detail: "expected array".to_string(),
        };
        let json = serde_json::to_value(&e).unwrap_or_default();
        assert_eq!(json["code"], "ParseError");
        assert_eq!(json["endpoint"], "industries");
    }
}
