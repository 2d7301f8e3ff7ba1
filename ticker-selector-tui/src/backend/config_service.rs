//! 配置服务
//!
//! 配置文件位于 `<config_dir>/ticker-selector/config.json`，缺失时使用默认值。

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use ticker_selector_core::page::PageSchema;
use ticker_selector_core::types::ApiConfig;
use ticker_selector_core::widget::ResponseOrdering;

use crate::view::theme::Theme;

pub const ENV_API_URL: &str = "TICKER_SELECTOR_API_URL";
pub const ENV_TIMEOUT_SECS: &str = "TICKER_SELECTOR_TIMEOUT_SECS";

/// 后端连接配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ApiSettings {
    pub base_url: String,
    pub timeout_secs: u64,
    pub max_retries: u32,
    /// Serve the built-in sample catalog instead of calling the server
    pub offline: bool,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: ApiConfig::DEFAULT_BASE_URL.to_string(),
            timeout_secs: ApiConfig::DEFAULT_TIMEOUT.as_secs(),
            max_retries: 0,
            offline: false,
        }
    }
}

impl ApiSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.max(1))
    }

    pub fn to_api_config(&self) -> ApiConfig {
        ApiConfig::new(self.base_url.clone())
            .with_timeout(self.timeout())
            .with_max_retries(self.max_retries)
    }

    /// 整个调用（含重试与退避）的时间上限，交给 `WidgetRuntime`
    pub fn call_budget(&self) -> Duration {
        self.to_api_config().call_budget()
    }
}

/// 应用配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AppConfig {
    pub api: ApiSettings,
    pub ordering: ResponseOrdering,
    pub theme: Theme,
    pub language: String,
    pub page: PageSchema,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api: ApiSettings::default(),
            ordering: ResponseOrdering::default(),
            theme: Theme::Dark,
            language: "en-US".to_string(),
            page: PageSchema::default(),
        }
    }
}

impl AppConfig {
    /// Apply `TICKER_SELECTOR_*` overrides read through `lookup`
    pub fn apply_env_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(url) = lookup(ENV_API_URL).filter(|v| !v.trim().is_empty()) {
            log::info!("API URL overridden by {ENV_API_URL}");
            self.api.base_url = url.trim().to_string();
        }
        if let Some(raw) = lookup(ENV_TIMEOUT_SECS) {
            match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => self.api.timeout_secs = secs,
                _ => log::warn!("Ignoring invalid {ENV_TIMEOUT_SECS}={raw:?}"),
            }
        }
    }
}

/// 配置服务 trait
pub trait ConfigService: Send + Sync {
    /// 加载配置
    fn load(&self) -> Result<AppConfig>;

    /// 保存配置
    fn save(&self, config: &AppConfig) -> Result<()>;
}

/// 本地 JSON 配置服务
pub struct LocalConfigService {
    path: PathBuf,
}

impl LocalConfigService {
    /// 平台配置目录下的默认位置
    pub fn new() -> Result<Self> {
        let dir = dirs::config_dir().context("Could not determine the config directory")?;
        Ok(Self::with_path(dir.join("ticker-selector").join("config.json")))
    }

    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the file, then apply environment overrides
    pub fn load_with_env(&self) -> Result<AppConfig> {
        let mut config = self.load()?;
        config.apply_env_overrides(|key| std::env::var(key).ok());
        Ok(config)
    }
}

impl ConfigService for LocalConfigService {
    fn load(&self) -> Result<AppConfig> {
        if !self.path.exists() {
            log::info!("No config at {}, using defaults", self.path.display());
            return Ok(AppConfig::default());
        }
        let raw = std::fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read {}", self.path.display()))?;
        let config = serde_json::from_str(&raw)
            .with_context(|| format!("Invalid config file {}", self.path.display()))?;
        Ok(config)
    }

    fn save(&self, config: &AppConfig) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        let json = serde_json::to_string_pretty(config)?;
        std::fs::write(&self.path, json)
            .with_context(|| format!("Failed to write {}", self.path.display()))?;
        log::debug!("Config saved to {}", self.path.display());
        Ok(())
    }
}
