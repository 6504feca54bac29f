//! Configuration types and loading

use serde::{Deserialize, Serialize};

/// Main application configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Remote query service configuration
    pub query_service: QueryServiceConfig,

    /// Local storage configuration
    pub storage: StorageConfig,

    /// Export configuration
    pub export: ExportConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct QueryServiceConfig {
    /// Base URL of the remote query endpoint
    pub base_url: String,
    /// Request timeout; the transport default applies when zero
    pub request_timeout_seconds: u64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageConfig {
    /// Directory for locally persisted query state
    pub local_path: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ExportConfig {
    /// Rows per rendered page
    pub page_size: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            query_service: QueryServiceConfig {
                base_url: "http://127.0.0.1:8000".to_string(),
                request_timeout_seconds: 30,
            },
            storage: StorageConfig {
                local_path: "/var/operator-dashboard/state".to_string(),
            },
            export: ExportConfig { page_size: 15 },
        }
    }
}

/// Configuration error
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Environment variable not set: {0}")]
    MissingEnvVar(String),
    #[error("Invalid value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Ok(url) = std::env::var("OPD_QUERY_SERVICE_URL") {
            config.query_service.base_url = url;
        }
        if let Ok(timeout) = std::env::var("OPD_REQUEST_TIMEOUT_SECONDS") {
            config.query_service.request_timeout_seconds = timeout.parse().unwrap_or(30);
        }

        if let Ok(path) = std::env::var("OPD_STORAGE_PATH") {
            config.storage.local_path = path;
        }

        if let Ok(size) = std::env::var("OPD_PAGE_SIZE") {
            config.export.page_size = size.parse().unwrap_or(15);
        }

        Ok(config)
    }
}
