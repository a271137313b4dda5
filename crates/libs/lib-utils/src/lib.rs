//! # Utilities Library
//!
//! Shared helpers for reading configuration from environment variables.

pub mod envs;

// Re-export commonly used functions
pub use envs::{get_env_opt, get_env_parse_or};
