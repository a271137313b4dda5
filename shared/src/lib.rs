//! # Shared Data Transfer Objects Library
//!
//! This library defines the contract between the storefront client and the
//! marketplace backend API. All DTOs use JSON serialization via `serde`.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects for API communication
//!   - **[`dto::marketplace`]**: Products, categories, paginated product lists
//! - **[`utils`]**: Shared utility functions
//!   - **[`utils::format_price`]**: Format an amount with its currency symbol
//!
//! ## Wire Format
//!
//! All DTOs serialize to JSON using the default `serde` behavior:
//! - Field names use **snake_case** in Rust and in JSON
//! - Fields the backend may omit carry `#[serde(default)]` so older or
//!   trimmed responses still decode
//! - Optional fields are omitted from JSON when `None`
//!
//! ## Usage
//!
//! ```rust,ignore
//! use shared::dto::marketplace::ProductListResponse;
//!
//! # async fn run() -> Result<(), reqwest::Error> {
//! let page: ProductListResponse = reqwest::Client::new()
//!     .get("http://localhost:8000/api/v1/marketplace/products?page=1&limit=20")
//!     .send()
//!     .await?
//!     .json()
//!     .await?;
//!
//! println!("{} of {} pages", page.page, page.total_pages);
//! # Ok(())
//! # }
//! ```

pub mod dto;
pub mod utils;

// Re-export commonly used types for convenience
// Note: Wildcard re-exports are used here since shared is a DTO library
// where all exports are meant to be public API
pub use dto::*;
pub use utils::*;
