//! # Storefront - Marketplace Client Library
//!
//! Client for the marketplace product catalogue: filtered, sorted product
//! listings loaded page by page for a virtualized list.
//! This library crate contains all modules used by the binary crate (`main.rs`).
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │              storefront (this crate)                   │
//! ├────────────────────────────────────────────────────────┤
//! │  paging        - Page keys, loader, state, pager       │
//! │  services/api  - Reqwest client for the backend        │
//! │  core          - AppError, ProductSource trait         │
//! │  config        - Environment configuration             │
//! │  debug         - tracing subscriber setup              │
//! └────────────────────────────────────────────────────────┘
//!          │
//!          │ HTTP/JSON
//!          ▼
//! ┌─────────────────────────────────┐
//! │  Backend API                    │
//! │  /api/v1/marketplace/products   │
//! └─────────────────────────────────┘
//! ```
//!
//! ## Module Structure
//!
//! - **paging**: the consumer-facing side
//!   - `PagedCollectionLoader::load_page` fetches exactly one page and never fails
//!     past its boundary; errors come back as `LoadOutcome::Error`
//!   - `compute_refresh_key` picks the page to reload around the scroll anchor
//!   - `LoaderState` accumulates pages and drops results for stale parameters
//!   - `Pager` drives both from async code
//!
//! - **services**: external integrations
//!   - `api`: backend HTTP client (product listing, detail, featured, categories)
//!
//! - **core**: error type and the `ProductSource` seam used for testing
//!
//! ## Example
//!
//! ```rust,ignore
//! use storefront::config::ClientConfig;
//! use storefront::paging::{Pager, PagedCollectionLoader, QueryParameters};
//! use storefront::services::api::ApiClient;
//!
//! let config = ClientConfig::from_env()?;
//! let loader = PagedCollectionLoader::new(ApiClient::new(&config)?, config.page_size)?;
//! let pager = Pager::new(loader, QueryParameters::new().with_search(Some("lamp")))?;
//!
//! pager.refresh().await;
//! while pager.load_next().await.is_some() {}
//! ```

pub mod config;
pub mod core;
pub mod debug;
pub mod paging;
pub mod services;

pub use crate::core::error::{AppError, Result};
pub use paging::{LoadOutcome, PageKey, PagedCollectionLoader, Pager, QueryParameters};
pub use services::api::ApiClient;
