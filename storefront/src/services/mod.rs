//! # External Services
//!
//! - [`api`]: marketplace backend over HTTP/JSON

pub mod api;
