//! # Logging
//!
//! Structured logging via `tracing`. Every pager load runs inside a
//! `pager_load` span carrying a fresh `request_id`, so the HTTP request,
//! the loader outcome and the state update can be correlated.
//!
//! ## Configuration
//!
//! Environment variables:
//! - `RUST_LOG`: filter directive (default `storefront=info,warn`)
//! - `STOREFRONT_LOG_DIR`: also write a daily-rotated `storefront.log` here

pub mod config;
pub mod logger;

pub use config::LogConfig;
pub use logger::init as init_logger;

/// Initialize logging. Call once at startup, before any other operations.
pub fn init() {
    init_logger();
}
