//! # Client Configuration
//!
//! Configuration loaded from environment variables and validated on startup
//! to fail fast if misconfigured.
//!
//! | Variable | Default |
//! |---|---|
//! | `STOREFRONT_API_URL` | `http://127.0.0.1:8000` |
//! | `STOREFRONT_API_TOKEN` | unset |
//! | `STOREFRONT_PAGE_SIZE` | `20` |
//! | `STOREFRONT_TIMEOUT_SECS` | `30` |
//! | `STOREFRONT_CONNECT_TIMEOUT_SECS` | `15` |
//!
//! ## Global Config Access
//!
//! Binaries call [`init_config()`] (or [`install_config()`] after applying
//! overrides) once, then read it with [`client_config()`].
//! Library code takes a `&ClientConfig` explicitly.

use crate::core::error::{AppError, Result};
use crate::paging::DEFAULT_PAGE_SIZE;
use lib_utils::envs::{get_env_opt, get_env_parse_or};
use std::sync::OnceLock;
use std::time::Duration;

pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8000";

/// Largest `limit` the products endpoint accepts.
pub const MAX_PAGE_SIZE: u32 = 100;

#[derive(Clone, Debug, PartialEq)]
pub struct ClientConfig {
    /// Backend base URL, without trailing slash
    pub api_base_url: String,

    /// Bearer token sent on every request when set
    pub api_token: Option<String>,

    /// Items per page (1..=100)
    pub page_size: u32,

    /// Whole-request timeout
    pub request_timeout: Duration,

    /// TCP/TLS connect timeout
    pub connect_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
            api_token: None,
            page_size: DEFAULT_PAGE_SIZE,
            request_timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(15),
        }
    }
}

impl ClientConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        let api_base_url = get_env_opt("STOREFRONT_API_URL")
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());
        let api_token = get_env_opt("STOREFRONT_API_TOKEN");
        let page_size = get_env_parse_or("STOREFRONT_PAGE_SIZE", DEFAULT_PAGE_SIZE)?;
        let timeout_secs: u64 = get_env_parse_or("STOREFRONT_TIMEOUT_SECS", 30)?;
        let connect_secs: u64 = get_env_parse_or("STOREFRONT_CONNECT_TIMEOUT_SECS", 15)?;

        Ok(Self {
            api_base_url: api_base_url.trim_end_matches('/').to_string(),
            api_token,
            page_size,
            request_timeout: Duration::from_secs(timeout_secs),
            connect_timeout: Duration::from_secs(connect_secs),
        })
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<()> {
        if !(self.api_base_url.starts_with("http://") || self.api_base_url.starts_with("https://")) {
            return Err(AppError::Config(format!(
                "STOREFRONT_API_URL must start with http:// or https:// (got {})",
                self.api_base_url
            )));
        }

        if self.page_size == 0 || self.page_size > MAX_PAGE_SIZE {
            return Err(AppError::Config(format!(
                "STOREFRONT_PAGE_SIZE must be between 1 and {}",
                MAX_PAGE_SIZE
            )));
        }

        if self.request_timeout.is_zero() || self.connect_timeout.is_zero() {
            return Err(AppError::Config("Timeouts must be at least 1 second".to_string()));
        }

        Ok(())
    }
}

/// Global configuration instance (initialized once at startup).
static CONFIG: OnceLock<ClientConfig> = OnceLock::new();

/// Load, validate and install the global configuration.
///
/// # Errors
///
/// Returns an error if environment variables are invalid, validation fails,
/// or the config has already been initialized.
pub fn init_config() -> Result<&'static ClientConfig> {
    install_config(ClientConfig::from_env()?)
}

/// Validate and install `config` as the global configuration.
///
/// Lets binaries apply command-line overrides to [`ClientConfig::from_env`]
/// before validation.
pub fn install_config(config: ClientConfig) -> Result<&'static ClientConfig> {
    config.validate()?;

    CONFIG
        .set(config)
        .map_err(|_| AppError::Config("Config has already been initialized".to_string()))?;
    client_config()
}

/// The global configuration installed by [`init_config()`].
pub fn client_config() -> Result<&'static ClientConfig> {
    CONFIG
        .get()
        .ok_or_else(|| AppError::Config("init_config() has not been called".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(ClientConfig::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_bad_url() {
        let config = ClientConfig {
            api_base_url: "ftp://example.com".to_string(),
            ..ClientConfig::default()
        };
        assert!(matches!(config.validate(), Err(AppError::Config(_))));
    }

    #[test]
    fn test_rejects_page_size_out_of_range() {
        for page_size in [0, MAX_PAGE_SIZE + 1] {
            let config = ClientConfig { page_size, ..ClientConfig::default() };
            assert!(config.validate().is_err());
        }
        let config = ClientConfig { page_size: MAX_PAGE_SIZE, ..ClientConfig::default() };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_zero_timeout() {
        let config = ClientConfig {
            request_timeout: Duration::ZERO,
            ..ClientConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
