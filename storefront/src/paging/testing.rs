//! In-memory product source for unit tests.

use super::{Identified, PageKey, QueryParameters};
use crate::core::error::{AppError, Result};
use crate::core::service::{ProductPage, ProductSource};
use async_trait::async_trait;
use parking_lot::Mutex;
use std::sync::Arc;
use tokio::sync::Semaphore;

#[derive(Debug, Clone, PartialEq)]
pub struct TestItem {
    pub id: String,
}

impl Identified for TestItem {
    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Default)]
struct Inner {
    total_items: usize,
    fail_next: Option<AppError>,
    requests: Vec<(QueryParameters, u32)>,
    gate: Option<Arc<Semaphore>>,
}

/// Serves `total_items` items, ids prefixed by the search term (or `all`).
#[derive(Clone, Default)]
pub struct FakeSource {
    inner: Arc<Mutex<Inner>>,
}

impl FakeSource {
    pub fn with_items(total_items: usize) -> Self {
        let source = Self::default();
        source.inner.lock().total_items = total_items;
        source
    }

    pub fn set_total(&self, total_items: usize) {
        self.inner.lock().total_items = total_items;
    }

    pub fn fail_next(&self, err: AppError) {
        self.inner.lock().fail_next = Some(err);
    }

    /// Block every request until [`FakeSource::release`] is called.
    pub fn hold(&self) {
        self.inner.lock().gate = Some(Arc::new(Semaphore::new(0)));
    }

    /// Let `n` held requests through.
    pub fn release(&self, n: usize) {
        if let Some(gate) = self.inner.lock().gate.as_ref() {
            gate.add_permits(n);
        }
    }

    pub fn request_count(&self) -> usize {
        self.inner.lock().requests.len()
    }

    pub fn requested_pages(&self) -> Vec<u32> {
        self.inner.lock().requests.iter().map(|(_, p)| *p).collect()
    }

    pub fn last_params(&self) -> Option<QueryParameters> {
        self.inner.lock().requests.last().map(|(p, _)| p.clone())
    }
}

#[async_trait]
impl ProductSource for FakeSource {
    type Item = TestItem;

    async fn fetch_products(
        &self,
        params: &QueryParameters,
        page: PageKey,
        limit: u32,
    ) -> Result<ProductPage<TestItem>> {
        let gate = {
            let mut inner = self.inner.lock();
            inner.requests.push((params.clone(), page.get()));
            inner.gate.clone()
        };

        if let Some(gate) = gate {
            if let Ok(permit) = gate.acquire().await {
                permit.forget();
            }
        }

        let (total, failure) = {
            let mut inner = self.inner.lock();
            (inner.total_items, inner.fail_next.take())
        };
        if let Some(err) = failure {
            return Err(err);
        }

        let prefix = params.search.clone().unwrap_or_else(|| "all".to_string());
        let limit = limit as usize;
        let start = (page.get() as usize - 1) * limit;
        let end = (start + limit).min(total);
        let items = (start..end)
            .map(|i| TestItem { id: format!("{}-{}", prefix, i) })
            .collect();

        Ok(ProductPage {
            items,
            total_pages: total.div_ceil(limit) as u32,
        })
    }
}
