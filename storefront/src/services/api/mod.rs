//! # Backend API Client Module
//!
//! HTTP client for the marketplace backend.
//!
//! ## Module Structure
//!
//! ```text
//! api/
//! ├── mod.rs          - Module exports and documentation
//! ├── client.rs       - ApiClient, request/response handling, trait impls
//! └── marketplace.rs  - Product listing, detail, featured, categories
//! ```

pub mod client;
pub mod marketplace;

pub use client::ApiClient;
pub use marketplace::product_query;
