//! # Marketplace DTOs
//!
//! Products, categories and paginated product listings returned by
//! `GET /api/v1/marketplace/...`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Sort order accepted by `GET /api/v1/marketplace/products?sort_by=`.
///
/// The serialized strings are exactly what the backend validates against.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductSortBy {
    /// Featured first, then "choice" items, then best sellers.
    #[default]
    Relevance,
    PriceAsc,
    PriceDesc,
    /// Highest commission rate first.
    Commission,
    Rating,
    Sales,
    /// Newest first.
    Recent,
    Popular,
}

impl ProductSortBy {
    pub const ALL: [ProductSortBy; 8] = [
        ProductSortBy::Relevance,
        ProductSortBy::PriceAsc,
        ProductSortBy::PriceDesc,
        ProductSortBy::Commission,
        ProductSortBy::Rating,
        ProductSortBy::Sales,
        ProductSortBy::Recent,
        ProductSortBy::Popular,
    ];

    /// Wire value used in the `sort_by` query parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductSortBy::Relevance => "relevance",
            ProductSortBy::PriceAsc => "price_asc",
            ProductSortBy::PriceDesc => "price_desc",
            ProductSortBy::Commission => "commission",
            ProductSortBy::Rating => "rating",
            ProductSortBy::Sales => "sales",
            ProductSortBy::Recent => "recent",
            ProductSortBy::Popular => "popular",
        }
    }
}

impl fmt::Display for ProductSortBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProductSortBy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        let sort = match normalized.as_str() {
            "relevance" => ProductSortBy::Relevance,
            "price_asc" => ProductSortBy::PriceAsc,
            "price_desc" => ProductSortBy::PriceDesc,
            "commission" | "commission_desc" => ProductSortBy::Commission,
            "rating" => ProductSortBy::Rating,
            "sales" => ProductSortBy::Sales,
            "recent" | "newest" => ProductSortBy::Recent,
            "popular" => ProductSortBy::Popular,
            _ => return Err(format!("Unknown sort order: {}", s)),
        };
        Ok(sort)
    }
}

/// A product listed on the marketplace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketplaceProduct {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_description: Option<String>,

    #[serde(default)]
    pub original_price: f64,
    #[serde(default)]
    pub selling_price: f64,
    #[serde(default = "default_currency")]
    pub currency: String,

    #[serde(default)]
    pub commission_rate: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commission_amount: Option<f64>,
    #[serde(default = "default_commission_type")]
    pub commission_type: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub main_image_url: Option<String>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,

    #[serde(default)]
    pub total_sales: u32,
    #[serde(default)]
    pub total_views: u32,
    #[serde(default)]
    pub average_rating: f64,
    #[serde(default)]
    pub rating_count: u32,

    #[serde(default = "default_status")]
    pub status: String,
    #[serde(default)]
    pub is_featured: bool,
    #[serde(default)]
    pub is_choice: bool,
    #[serde(default)]
    pub tags: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reel_video_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub promoter_user_id: Option<String>,
    #[serde(default)]
    pub is_liked: bool,
    #[serde(default)]
    pub is_bookmarked: bool,

    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

fn default_currency() -> String {
    "USD".to_string()
}

fn default_commission_type() -> String {
    "percentage".to_string()
}

fn default_status() -> String {
    "active".to_string()
}

impl MarketplaceProduct {
    /// Commission a promoter would earn on one sale.
    ///
    /// Percentage commissions apply to the selling price; fixed commissions
    /// use `commission_amount` (0 when absent).
    pub fn estimated_commission(&self) -> f64 {
        if self.commission_type == "percentage" {
            self.selling_price * (self.commission_rate / 100.0)
        } else {
            self.commission_amount.unwrap_or(0.0)
        }
    }

    /// Whole-percent discount from the original price, if any.
    pub fn discount_percentage(&self) -> Option<u32> {
        if self.original_price > self.selling_price && self.original_price > 0.0 {
            Some(((self.original_price - self.selling_price) / self.original_price * 100.0) as u32)
        } else {
            None
        }
    }

    pub fn is_available(&self) -> bool {
        self.status == "active"
    }
}

/// A product category (optionally nested under a parent).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductCategory {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name_ar: Option<String>,
    #[serde(default)]
    pub slug: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    #[serde(default)]
    pub display_order: i32,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

fn default_true() -> bool {
    true
}

/// One page of `GET /api/v1/marketplace/products`.
///
/// `total_pages` is computed server-side as `ceil(total / limit)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductListResponse<T = MarketplaceProduct> {
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
    #[serde(default)]
    pub total: u64,
    #[serde(default = "default_page")]
    pub page: u32,
    #[serde(default)]
    pub limit: u32,
    #[serde(default)]
    pub total_pages: u32,
}

fn default_page() -> u32 {
    1
}

impl<T> ProductListResponse<T> {
    /// Page count, falling back to `ceil(total / limit)` when the backend
    /// omitted `total_pages`.
    pub fn page_count(&self) -> u32 {
        if self.total_pages > 0 || self.total == 0 || self.limit == 0 {
            return self.total_pages;
        }
        let pages = self.total.div_ceil(u64::from(self.limit));
        u32::try_from(pages).unwrap_or(u32::MAX)
    }
}

/// Error body returned by the backend.
///
/// FastAPI uses `detail`; older handlers used `error` or `message`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ErrorResponse {
    /// First non-empty message carried by the body.
    pub fn message(&self) -> Option<&str> {
        [&self.detail, &self.error, &self.message]
            .into_iter()
            .filter_map(|m| m.as_deref())
            .find(|m| !m.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(json: serde_json::Value) -> MarketplaceProduct {
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn test_sort_by_wire_values() {
        assert_eq!(serde_json::to_string(&ProductSortBy::PriceAsc).unwrap(), "\"price_asc\"");
        assert_eq!(serde_json::to_string(&ProductSortBy::Recent).unwrap(), "\"recent\"");
        for sort in ProductSortBy::ALL {
            assert_eq!(sort.as_str().parse::<ProductSortBy>().unwrap(), sort);
        }
    }

    #[test]
    fn test_sort_by_aliases() {
        assert_eq!("newest".parse::<ProductSortBy>().unwrap(), ProductSortBy::Recent);
        assert_eq!("Commission_Desc".parse::<ProductSortBy>().unwrap(), ProductSortBy::Commission);
        assert!("cheapest".parse::<ProductSortBy>().is_err());
    }

    #[test]
    fn test_product_defaults() {
        let p = product(serde_json::json!({ "id": "p1", "name": "Lamp" }));
        assert_eq!(p.currency, "USD");
        assert_eq!(p.commission_type, "percentage");
        assert!(p.is_available());
        assert!(p.images.is_empty());
    }

    #[test]
    fn test_estimated_commission() {
        let pct = product(serde_json::json!({
            "id": "p1", "name": "Lamp", "selling_price": 50.0, "commission_rate": 10.0
        }));
        assert!((pct.estimated_commission() - 5.0).abs() < 1e-9);

        let fixed = product(serde_json::json!({
            "id": "p2", "name": "Mug", "selling_price": 50.0,
            "commission_type": "fixed", "commission_amount": 3.5
        }));
        assert!((fixed.estimated_commission() - 3.5).abs() < 1e-9);
    }

    #[test]
    fn test_discount_percentage() {
        let p = product(serde_json::json!({
            "id": "p1", "name": "Lamp", "original_price": 80.0, "selling_price": 60.0
        }));
        assert_eq!(p.discount_percentage(), Some(25));

        let no_discount = product(serde_json::json!({
            "id": "p2", "name": "Mug", "original_price": 10.0, "selling_price": 10.0
        }));
        assert_eq!(no_discount.discount_percentage(), None);
    }

    #[test]
    fn test_page_count_fallback() {
        let resp: ProductListResponse = serde_json::from_value(serde_json::json!({
            "items": [], "total": 41, "page": 1, "limit": 20
        }))
        .unwrap();
        assert_eq!(resp.page_count(), 3);

        let empty: ProductListResponse = serde_json::from_value(serde_json::json!({
            "items": [], "total": 0, "page": 1, "limit": 20, "total_pages": 0
        }))
        .unwrap();
        assert_eq!(empty.page_count(), 0);
    }

    #[test]
    fn test_error_response_message() {
        let fastapi: ErrorResponse = serde_json::from_str(r#"{"detail":"Product not found"}"#).unwrap();
        assert_eq!(fastapi.message(), Some("Product not found"));

        let legacy: ErrorResponse = serde_json::from_str(r#"{"detail":"","error":"boom"}"#).unwrap();
        assert_eq!(legacy.message(), Some("boom"));

        assert_eq!(ErrorResponse::default().message(), None);
    }
}
