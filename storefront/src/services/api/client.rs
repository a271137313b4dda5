//! # API Client
//!
//! Main HTTP client for marketplace backend communication.

use crate::config::ClientConfig;
use crate::core::error::{AppError, Result};
use crate::core::service::{MarketplaceService, ProductPage, ProductSource};
use crate::paging::{PageKey, QueryParameters};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::Client;
use serde::de::DeserializeOwned;
use shared::{ErrorResponse, MarketplaceProduct, ProductCategory};
use std::time::Instant;

/// HTTP client for communicating with the marketplace backend.
///
/// Holds a pooled `reqwest::Client`; cloning is cheap and shares the pool.
#[derive(Debug, Clone)]
pub struct ApiClient {
    pub(crate) client: Client,
    base_url: String,
    api_token: Option<String>,
}

impl ApiClient {
    /// Create a client from validated configuration.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .timeout(config.request_timeout)
            .connect_timeout(config.connect_timeout)
            .default_headers(headers)
            .build()
            .map_err(|e| AppError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            api_token: config.api_token.clone(),
        })
    }

    /// Get the base URL for API requests.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// GET `path` with `query` and decode a JSON body.
    ///
    /// Non-success statuses are mapped through [`AppError::from_status`]
    /// using the backend's error body when it is readable.
    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T> {
        let url = self.url(path);
        let start = Instant::now();

        let mut request = self.client.get(&url).query(query);
        if let Some(token) = &self.api_token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await.map_err(|e| {
            tracing::error!(error = %e, url = %url, "Request network error");
            AppError::Network(e.to_string())
        })?;

        let status = response.status();
        let body = response.bytes().await.map_err(|e| {
            tracing::error!(error = %e, url = %url, status = status.as_u16(), "Failed to read response body");
            AppError::Network(e.to_string())
        })?;
        let duration = start.elapsed();

        if status.is_success() {
            let value = serde_json::from_slice::<T>(&body).map_err(|e| {
                tracing::error!(
                    error = %e,
                    url = %url,
                    duration_ms = duration.as_millis(),
                    "Response parse error"
                );
                AppError::Decode(e.to_string())
            })?;

            tracing::debug!(
                url = %url,
                status = status.as_u16(),
                bytes = body.len(),
                duration_ms = duration.as_millis(),
                "Request succeeded"
            );
            Ok(value)
        } else {
            let message = serde_json::from_slice::<ErrorResponse>(&body)
                .ok()
                .and_then(|e| e.message().map(str::to_string));

            tracing::warn!(
                url = %url,
                status = status.as_u16(),
                duration_ms = duration.as_millis(),
                message = ?message,
                "Request failed with non-success status"
            );
            Err(AppError::from_status(status, message))
        }
    }
}

#[async_trait::async_trait]
impl ProductSource for ApiClient {
    type Item = MarketplaceProduct;

    async fn fetch_products(
        &self,
        params: &QueryParameters,
        page: PageKey,
        limit: u32,
    ) -> Result<ProductPage<MarketplaceProduct>> {
        crate::services::api::marketplace::fetch_products(self, params, page, limit).await
    }
}

#[async_trait::async_trait]
impl MarketplaceService for ApiClient {
    async fn get_product(&self, product_id: &str) -> Result<MarketplaceProduct> {
        crate::services::api::marketplace::get_product(self, product_id).await
    }

    async fn get_featured_products(&self, limit: u32) -> Result<Vec<MarketplaceProduct>> {
        crate::services::api::marketplace::get_featured_products(self, limit).await
    }

    async fn get_categories(&self, parent_id: Option<&str>) -> Result<Vec<ProductCategory>> {
        crate::services::api::marketplace::get_categories(self, parent_id).await
    }
}
