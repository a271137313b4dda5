//! # Paged Collection Loader
//!
//! Fetches exactly one page per call through a [`ProductSource`] and derives
//! the neighbouring page keys:
//!
//! - `prev_key = key - 1`, or `None` on the first page
//! - `next_key = key + 1` while `key < total_pages`, otherwise `None`
//!
//! Every failure (transport, decode, error payload, even a panic inside the
//! source) comes back as [`LoadOutcome::Error`]. Retries, backoff and stale
//! result handling belong to the caller.

use super::{LoadOutcome, PageKey, QueryParameters};
use crate::core::error::{AppError, Result};
use crate::core::service::ProductSource;
use futures::FutureExt;
use std::panic::AssertUnwindSafe;
use std::time::Instant;

/// Page size used by the marketplace screens.
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Loads pages of a filtered, sorted remote collection.
///
/// The page size is fixed for the lifetime of the loader. Parameters are
/// passed through to the source unchanged.
#[derive(Debug, Clone)]
pub struct PagedCollectionLoader<S> {
    source: S,
    page_size: u32,
}

impl<S: ProductSource> PagedCollectionLoader<S> {
    /// Create a loader. `page_size` must be positive.
    pub fn new(source: S, page_size: u32) -> Result<Self> {
        if page_size == 0 {
            return Err(AppError::Validation("Page size must be positive".to_string()));
        }
        Ok(Self { source, page_size })
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Load one page. `key = None` loads [`PageKey::FIRST`].
    ///
    /// Performs exactly one request. Keys past the end are not clamped; the
    /// source's answer (usually an empty page) is returned as-is.
    #[tracing::instrument(
        name = "load_page",
        skip(self, params),
        fields(page = PageKey::or_first(key).get(), page_size = self.page_size, sort_by = %params.sort_by)
    )]
    pub async fn load_page(
        &self,
        params: &QueryParameters,
        key: Option<PageKey>,
    ) -> LoadOutcome<S::Item> {
        let page = PageKey::or_first(key);
        let start = Instant::now();

        let fetched = AssertUnwindSafe(self.source.fetch_products(params, page, self.page_size))
            .catch_unwind()
            .await
            .unwrap_or_else(|panic| Err(AppError::UnexpectedResponse(panic_message(panic))));

        let duration = start.elapsed();

        match fetched {
            Ok(response) => {
                let prev_key = page.prev();
                let next_key = page.next_within(response.total_pages);

                tracing::debug!(
                    duration_ms = duration.as_millis(),
                    item_count = response.items.len(),
                    total_pages = response.total_pages,
                    prev_key = ?prev_key.map(PageKey::get),
                    next_key = ?next_key.map(PageKey::get),
                    "Page loaded"
                );

                LoadOutcome::Page {
                    items: response.items,
                    prev_key,
                    next_key,
                }
            }
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    retryable = e.is_retryable(),
                    duration_ms = duration.as_millis(),
                    "Page load failed"
                );
                LoadOutcome::Error { message: e.to_string() }
            }
        }
    }
}

fn panic_message(panic: Box<dyn std::any::Any + Send>) -> String {
    let detail = if let Some(s) = panic.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    };
    format!("product source panicked: {}", detail)
}
