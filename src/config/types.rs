use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::model::{SortDirection, DEFAULT_PAGE_SIZE};
use crate::source::RestSettings;

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub view: ViewConfig,
}

/// Upstream data source settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceConfig {
    /// API root (default: "https://restcountries.com/v3.1").
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Request timeout in seconds (default: 10).
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u32,
    /// Connection timeout in seconds (default: 5).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u32,
    /// Serve the static sample when upstream fails (default: true).
    #[serde(default = "default_fallback_on_error")]
    pub fallback_on_error: bool,
}

/// Presentation defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewConfig {
    /// Rows per page (default: 10).
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    /// Initial sort direction (default: asc).
    #[serde(default)]
    pub sort: SortDirection,
    /// Quiet period before a search is sent upstream (default: 300).
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
    /// Send filter text upstream as a name search instead of filtering the
    /// full directory locally (default: false).
    #[serde(default)]
    pub remote_search: bool,
}

fn default_base_url() -> String {
    "https://restcountries.com/v3.1".to_string()
}

fn default_timeout() -> u32 {
    10
}

fn default_connect_timeout() -> u32 {
    5
}

fn default_fallback_on_error() -> bool {
    true
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

fn default_debounce_ms() -> u64 {
    300
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_seconds: default_timeout(),
            connect_timeout_seconds: default_connect_timeout(),
            fallback_on_error: default_fallback_on_error(),
        }
    }
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            sort: SortDirection::default(),
            debounce_ms: default_debounce_ms(),
            remote_search: false,
        }
    }
}

impl From<&SourceConfig> for RestSettings {
    fn from(config: &SourceConfig) -> Self {
        RestSettings {
            base_url: config.base_url.clone(),
            timeout: Duration::from_secs(config.timeout_seconds as u64),
            connect_timeout: Duration::from_secs(config.connect_timeout_seconds as u64),
        }
    }
}

impl ViewConfig {
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}
