//! # Data Transfer Objects (DTOs)
//!
//! This module contains all data structures used for communication between
//! the storefront client and the marketplace backend via the REST API.
//!
//! ## Module Organization
//!
//! - [`marketplace`] - Products, categories, sort keys and paginated lists
//!
//! ## Serialization Format
//!
//! All DTOs use `serde_json` for JSON serialization:
//!
//! - **Field naming**: snake_case (default serde behavior)
//! - **Enums**: Serialize to the exact strings the backend accepts
//! - **All types**: Implement both `Serialize` and `Deserialize`
//!
//! ## Example JSON Communication
//!
//! ```text
//! GET /api/v1/marketplace/products?sort_by=price_asc&page=2&limit=20
//! ```
//!
//! ```text
//! HTTP/1.1 200 OK
//! Content-Type: application/json
//!
//! {
//!   "items": [ { "id": "4f1c...", "name": "Desk Lamp", "selling_price": 19.9, ... } ],
//!   "total": 57,
//!   "page": 2,
//!   "limit": 20,
//!   "total_pages": 3
//! }
//! ```

pub mod marketplace;

pub use marketplace::*;
