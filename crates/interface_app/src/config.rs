//! Application configuration
//!
//! Base URLs and the request timeout come from the environment with the
//! hosted defaults embedded, so a bare start talks to the standard
//! backends and a local stack only overrides what it needs.

use std::path::PathBuf;

use serde::Deserialize;

use crate::error::AppError;
use infra_http::ServiceEndpoints;

/// Top-level configuration for the application layer
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Backend base URLs
    #[serde(default)]
    pub endpoints: ServiceEndpoints,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Default tracing directive when RUST_LOG is unset
    pub log_level: String,
    /// Where the file-backed session store lives; `None` keeps the
    /// session in memory only
    pub session_file: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            endpoints: ServiceEndpoints::default(),
            timeout_secs: 30,
            log_level: "info".to_string(),
            session_file: None,
        }
    }
}

impl AppConfig {
    /// Loads configuration from the environment
    ///
    /// Variables use the `APP_` prefix with `__` as the nesting separator,
    /// e.g. `APP_ENDPOINTS__CLAIMS_BASE=http://localhost:5002/api/v1`.
    /// A `.env` file is honored if present.
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let defaults = AppConfig::default();
        let config = config::Config::builder()
            .set_default("timeout_secs", defaults.timeout_secs as i64)
            .and_then(|b| b.set_default("log_level", defaults.log_level.clone()))
            .and_then(|b| b.set_default("endpoints.auth_base", defaults.endpoints.auth_base.clone()))
            .and_then(|b| {
                b.set_default(
                    "endpoints.resources_base",
                    defaults.endpoints.resources_base.clone(),
                )
            })
            .and_then(|b| {
                b.set_default(
                    "endpoints.billing_base",
                    defaults.endpoints.billing_base.clone(),
                )
            })
            .and_then(|b| {
                b.set_default("endpoints.claims_base", defaults.endpoints.claims_base.clone())
            })
            .map_err(|e| AppError::Configuration(e.to_string()))?
            .add_source(config::Environment::with_prefix("APP").separator("__"))
            .build()
            .map_err(|e| AppError::Configuration(e.to_string()))?;

        let loaded: AppConfig = config
            .try_deserialize()
            .map_err(|e| AppError::Configuration(e.to_string()))?;

        loaded
            .endpoints
            .validate()
            .map_err(|e| AppError::Configuration(e.to_string()))?;

        Ok(loaded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.timeout_secs, 30);
        assert_eq!(config.log_level, "info");
        assert!(config.session_file.is_none());
        config.endpoints.validate().unwrap();
    }
}
