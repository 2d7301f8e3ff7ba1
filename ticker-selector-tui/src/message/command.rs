//! Update 层返回的副作用

use ticker_selector_core::widget::{ChildQueryTicket, QueryTicket};

use crate::backend::AppConfig;

/// 需要 Backend 执行的操作
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// 执行搜索
    Search(QueryTicket),
    /// 加载行业列表
    LoadIndustries(u64),
    /// 加载某个行业下的股票
    LoadIndustryTickers(ChildQueryTicket),
    /// 检查 API 是否在线
    CheckHealth,
    /// 保存配置
    SaveConfig(Box<AppConfig>),
}
