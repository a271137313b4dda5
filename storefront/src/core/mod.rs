//! # Core Abstractions
//!
//! Core traits and error types for dependency injection and better testability.
//!
//! - **[`error`]**: Client error taxonomy (`AppError`, `Result<T>`)
//! - **[`service`]**: Service traits (`ProductSource`, `MarketplaceService`)
//!
//! ## Dependency Injection
//!
//! The paged loader is generic over [`ProductSource`]:
//!
//! ```rust,ignore
//! use storefront::paging::PagedCollectionLoader;
//! use storefront::services::api::ApiClient;
//!
//! // In production: the HTTP client
//! let loader = PagedCollectionLoader::new(ApiClient::new(&config)?, 20)?;
//!
//! // In tests: an in-memory source
//! let loader = PagedCollectionLoader::new(FakeSource::with_items(57), 20)?;
//! ```

pub mod error;
pub mod service;

pub use error::{AppError, Result};
pub use service::{MarketplaceService, ProductPage, ProductSource};
