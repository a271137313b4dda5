//! Logging configuration from environment variables

use lib_utils::envs::get_env_opt;
use std::path::PathBuf;

pub const DEFAULT_LOG_FILTER: &str = "storefront=info,warn";
pub const LOG_FILE_NAME: &str = "storefront.log";

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// Filter directive (e.g., "storefront=debug,info")
    pub log_level: String,
    /// Directory for the daily-rotated log file. No file output when unset.
    pub log_dir: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            log_level: DEFAULT_LOG_FILTER.to_string(),
            log_dir: None,
        }
    }
}

impl LogConfig {
    /// Load configuration from `RUST_LOG` and `STOREFRONT_LOG_DIR`.
    pub fn from_env() -> Self {
        Self {
            log_level: get_env_opt("RUST_LOG").unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
            log_dir: get_env_opt("STOREFRONT_LOG_DIR").map(PathBuf::from),
        }
    }

    pub fn log_file(&self) -> Option<PathBuf> {
        self.log_dir.as_ref().map(|dir| dir.join(LOG_FILE_NAME))
    }

    pub fn is_debug_enabled(&self) -> bool {
        self.log_level.contains("debug") || self.log_level.contains("trace")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_has_no_file() {
        let config = LogConfig::default();
        assert_eq!(config.log_level, DEFAULT_LOG_FILTER);
        assert!(config.log_file().is_none());
        assert!(!config.is_debug_enabled());
    }

    #[test]
    fn test_log_file_path() {
        let config = LogConfig {
            log_level: "storefront=debug".to_string(),
            log_dir: Some(PathBuf::from("logs")),
        };
        assert_eq!(config.log_file(), Some(PathBuf::from("logs").join(LOG_FILE_NAME)));
        assert!(config.is_debug_enabled());
    }
}
