//! # Service Traits
//!
//! Traits for dependency injection, enabling better testability and modularity.
//!
//! - [`ProductSource`]: the "get products" use case the paged loader calls
//!   through. The loader never builds transport requests itself.
//! - [`MarketplaceService`]: the rest of the marketplace read API.

use crate::core::error::Result;
use crate::paging::{PageKey, QueryParameters};
use async_trait::async_trait;
use shared::{MarketplaceProduct, ProductCategory};
use std::sync::Arc;

/// One page as reported by a [`ProductSource`].
///
/// `total_pages` is authoritative only for the response that carried it.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductPage<T> {
    pub items: Vec<T>,
    pub total_pages: u32,
}

/// Remote product collection, filtered and sorted server-side.
///
/// Implementations perform exactly one request per call and do not retry.
#[async_trait]
pub trait ProductSource: Send + Sync {
    type Item: Send;

    /// Fetch page `page` of size `limit` for `params`.
    ///
    /// Out-of-range pages are passed to the backend as-is.
    async fn fetch_products(
        &self,
        params: &QueryParameters,
        page: PageKey,
        limit: u32,
    ) -> Result<ProductPage<Self::Item>>;
}

#[async_trait]
impl<S> ProductSource for Arc<S>
where
    S: ProductSource + ?Sized,
{
    type Item = S::Item;

    async fn fetch_products(
        &self,
        params: &QueryParameters,
        page: PageKey,
        limit: u32,
    ) -> Result<ProductPage<Self::Item>> {
        (**self).fetch_products(params, page, limit).await
    }
}

/// Trait for marketplace read operations beyond the paged listing.
///
/// This trait allows for dependency injection and mocking in tests.
#[async_trait]
pub trait MarketplaceService: Send + Sync {
    /// Product detail by id
    async fn get_product(&self, product_id: &str) -> Result<MarketplaceProduct>;

    /// Featured products (backend caps `limit` at 50)
    async fn get_featured_products(&self, limit: u32) -> Result<Vec<MarketplaceProduct>>;

    /// Categories, optionally children of `parent_id`
    async fn get_categories(&self, parent_id: Option<&str>) -> Result<Vec<ProductCategory>>;
}
