use async_trait::async_trait;

use crate::error::Result;
use crate::types::{Industry, TickerCandidate};

/// 行情列表 API Trait
///
/// Every listing the selector widgets consume goes through this trait, so
/// front ends and tests can swap the HTTP client for an in-memory one.
#[async_trait]
pub trait TickerApi: Send + Sync {
    /// 按代码或公司名搜索（`GET /api/tickers/search/?q=`）
    ///
    /// Result order is the server's order.
    async fn search_tickers(&self, query: &str) -> Result<Vec<TickerCandidate>>;

    /// 获取行业列表（`GET /api/industries/`）
    async fn list_industries(&self) -> Result<Vec<Industry>>;

    /// 获取行业下的股票（`GET /api/industries/{id}/tickers/`）
    async fn list_industry_tickers(&self, industry_id: i64) -> Result<Vec<TickerCandidate>>;

    /// 服务健康检查（`GET /health/`）
    ///
    /// 默认实现视为在线，便于测试替身省略。
    async fn health_check(&self) -> Result<bool> {
        Ok(true)
    }
}
