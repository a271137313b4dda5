//! # Marketplace Endpoints
//!
//! Product listing, product detail, featured products and categories.

use super::client::ApiClient;
use crate::core::error::{AppError, Result};
use crate::core::service::ProductPage;
use crate::paging::{PageKey, QueryParameters};
use shared::{MarketplaceProduct, ProductCategory, ProductListResponse};

const PRODUCTS_PATH: &str = "api/v1/marketplace/products";
const CATEGORIES_PATH: &str = "api/v1/marketplace/categories";

/// Query string for the product listing. Unset filters are omitted.
pub fn product_query(params: &QueryParameters, page: PageKey, limit: u32) -> Vec<(&'static str, String)> {
    let mut query = Vec::with_capacity(8);
    if let Some(category) = &params.category {
        query.push(("category", category.clone()));
    }
    if let Some(min_price) = params.min_price {
        query.push(("min_price", min_price.to_string()));
    }
    if let Some(max_price) = params.max_price {
        query.push(("max_price", max_price.to_string()));
    }
    if let Some(min_commission) = params.min_commission {
        query.push(("min_commission", min_commission.to_string()));
    }
    if let Some(search) = &params.search {
        query.push(("search", search.clone()));
    }
    query.push(("sort_by", params.sort_by.as_str().to_string()));
    query.push(("page", page.get().to_string()));
    query.push(("limit", limit.to_string()));
    query
}

/// Fetch one page of the product listing.
#[tracing::instrument(skip(client, params), fields(page = page.get(), limit = limit))]
pub async fn fetch_products(
    client: &ApiClient,
    params: &QueryParameters,
    page: PageKey,
    limit: u32,
) -> Result<ProductPage<MarketplaceProduct>> {
    let query = product_query(params, page, limit);
    let response: ProductListResponse = client.get_json(PRODUCTS_PATH, &query).await?;

    tracing::debug!(
        item_count = response.items.len(),
        total = response.total,
        total_pages = response.total_pages,
        "Products fetched"
    );

    let total_pages = response.page_count();
    Ok(ProductPage {
        items: response.items,
        total_pages,
    })
}

/// Get a single product by id.
pub async fn get_product(client: &ApiClient, product_id: &str) -> Result<MarketplaceProduct> {
    let product_id = product_id.trim();
    if product_id.is_empty() {
        return Err(AppError::Validation("Product id is required".to_string()));
    }
    client
        .get_json(&format!("{}/{}", PRODUCTS_PATH, product_id), &[])
        .await
}

/// Get featured products. `limit` is clamped to the backend's 1..=50.
pub async fn get_featured_products(client: &ApiClient, limit: u32) -> Result<Vec<MarketplaceProduct>> {
    let limit = limit.clamp(1, 50);
    client
        .get_json(&format!("{}/featured", PRODUCTS_PATH), &[("limit", limit.to_string())])
        .await
}

/// Get product categories, optionally the children of `parent_id`.
pub async fn get_categories(client: &ApiClient, parent_id: Option<&str>) -> Result<Vec<ProductCategory>> {
    let query: Vec<(&str, String)> = parent_id
        .map(|id| vec![("parent_id", id.to_string())])
        .unwrap_or_default();
    client.get_json(CATEGORIES_PATH, &query).await
}
