//! # ticker-selector-provider
//!
//! Typed client for the ticker listing API consumed by the selector widgets.
//!
//! ## Endpoints
//!
//! | Method | Path | Response |
//! |--------|------|----------|
//! | `GET` | `/api/tickers/search/?q=<text>` | `[{code, name}, ...]` |
//! | `GET` | `/api/industries/` | `[{id, name}, ...]` |
//! | `GET` | `/api/industries/{id}/tickers/` | `[{code, name}, ...]` |
//! | `GET` | `/health/` | `OK` |
//!
//! ## Feature Flags
//!
//! - **`native-tls`** *(default)*: Use the platform's native TLS implementation.
//! - **`rustls`**: Use rustls. Recommended for cross-compilation.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use ticker_selector_provider::{ApiConfig, HttpTickerApi, TickerApi};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let api = HttpTickerApi::new(&ApiConfig::new("http://127.0.0.1:8000"))?;
//!
//!     for ticker in api.search_tickers("705").await? {
//!         println!("{ticker}");
//!     }
//!
//!     for industry in api.list_industries().await? {
//!         let tickers = api.list_industry_tickers(industry.id).await?;
//!         println!("{} ({} tickers)", industry.name, tickers.len());
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All operations return [`Result<T, ApiError>`](ApiError). Transport
//! failures become [`ApiError::NetworkError`] or [`ApiError::Timeout`],
//! non-2xx answers [`ApiError::HttpStatus`], malformed bodies
//! [`ApiError::ParseError`]. Retries are off unless
//! [`ApiConfig::max_retries`] is raised.

mod client;
mod error;
mod http_client;
mod traits;
mod types;
mod utils;

pub use client::HttpTickerApi;
pub use error::{ApiError, Result};
pub use traits::TickerApi;
pub use types::{ApiConfig, Industry, TickerCandidate};
