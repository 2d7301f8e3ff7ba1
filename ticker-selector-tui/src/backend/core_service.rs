//! 核心服务
//!
//! 按配置选择数据源，并把 Update 层产生的 Command 交给 `WidgetRuntime` 执行。

use std::sync::Arc;

use anyhow::{Context, Result};
use ticker_selector_core::services::{InMemoryTickerApi, WidgetEvent, WidgetRuntime};
use ticker_selector_provider::{HttpTickerApi, TickerApi};
use tokio::sync::mpsc::UnboundedReceiver;

use super::config_service::{ApiSettings, ConfigService};
use crate::message::Command;

/// TUI 核心服务
pub struct CoreService {
    runtime: WidgetRuntime,
    config_service: Box<dyn ConfigService>,
}

impl CoreService {
    /// 创建核心服务实例，同时返回结果事件的接收端
    pub fn new(
        settings: &ApiSettings,
        config_service: Box<dyn ConfigService>,
    ) -> Result<(Self, UnboundedReceiver<WidgetEvent>)> {
        let api: Arc<dyn TickerApi> = if settings.offline {
            log::info!("Offline mode: using the built-in sample catalog");
            Arc::new(InMemoryTickerApi::sample())
        } else {
            let api = HttpTickerApi::new(&settings.to_api_config())
                .with_context(|| format!("Invalid API URL '{}'", settings.base_url))?;
            log::info!("Using ticker API at {}", api.base_url());
            Arc::new(api)
        };

        // 单次请求的超时由 HTTP 客户端负责，这里给整个调用留出重试的时间
        let (runtime, events) = WidgetRuntime::new(api, settings.call_budget());
        log::debug!(
            "Call budget {:?} ({} retries)",
            runtime.timeout(),
            settings.max_retries
        );
        Ok((
            Self {
                runtime,
                config_service,
            },
            events,
        ))
    }

    /// 执行副作用
    ///
    /// 网络请求只是被派发，结果稍后通过事件通道返回；只有保存配置可能同步失败。
    pub fn execute(&mut self, command: Command) -> Result<()> {
        match command {
            Command::Search(ticket) => self.runtime.spawn_search(ticket),
            Command::LoadIndustries(seq) => self.runtime.spawn_industries(seq),
            Command::LoadIndustryTickers(ticket) => self.runtime.spawn_industry_tickers(ticket),
            Command::CheckHealth => self.runtime.spawn_health_check(),
            Command::SaveConfig(config) => self.config_service.save(&config)?,
        }
        Ok(())
    }

    /// 退出前取消所有请求
    pub fn shutdown(&mut self) {
        self.runtime.shutdown();
    }
}
