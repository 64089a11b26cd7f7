//! Frontend Configuration
//!
//! Compile-time defaults, provided to the component tree via context.

use log::LevelFilter;

/// Backend location
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";
/// Records endpoint on the backend
pub const DEFAULT_DATA_PATH: &str = "/api/data";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
    pub data_path: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::with_base_url(DEFAULT_API_BASE_URL)
    }
}

impl ApiConfig {
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            data_path: DEFAULT_DATA_PATH.to_string(),
        }
    }

    /// Full URL of the records endpoint
    pub fn data_url(&self) -> String {
        let base = self.base_url.trim_end_matches('/');
        if self.data_path.starts_with('/') {
            format!("{}{}", base, self.data_path)
        } else {
            format!("{}/{}", base, self.data_path)
        }
    }
}

/// App-wide configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub log_level: LevelFilter,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
            log_level: if cfg!(debug_assertions) {
                LevelFilter::Debug
            } else {
                LevelFilter::Info
            },
        }
    }
}
