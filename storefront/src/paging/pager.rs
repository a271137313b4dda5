//! # Pager
//!
//! Async driver that ties a [`PagedCollectionLoader`] to a [`LoaderState`].
//!
//! The state lives in `Arc<RwLock<_>>` so UI code can read it while a load
//! is running. Locks are taken briefly and never held across an await:
//! the request is issued under the lock, the page is fetched without it,
//! and the outcome is applied under the lock again, where stale results
//! are dropped.

use super::state::{ApplyResult, Identified, LoadKind, LoadRequest, LoadStatus, LoaderState};
use super::{PageKey, PagedCollectionLoader, QueryParameters};
use crate::core::error::Result;
use crate::core::service::ProductSource;
use async_channel::Sender;
use parking_lot::RwLock;
use std::sync::Arc;
use tracing::Instrument;
use uuid::Uuid;

/// Notifications for a UI event loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PagerEvent {
    Loaded { generation: u64, kind: LoadKind, added: usize, total: usize },
    Failed { generation: u64, kind: LoadKind, message: String },
    Discarded { generation: u64, kind: LoadKind },
}

/// Read-only copy of the list for rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct PagerSnapshot<T> {
    pub generation: u64,
    pub items: Vec<T>,
    pub status: LoadStatus,
    pub next_key: Option<PageKey>,
}

pub struct Pager<S: ProductSource> {
    loader: Arc<PagedCollectionLoader<S>>,
    state: Arc<RwLock<LoaderState<S::Item>>>,
    events: Option<Sender<PagerEvent>>,
}

impl<S: ProductSource> Clone for Pager<S> {
    fn clone(&self) -> Self {
        Self {
            loader: Arc::clone(&self.loader),
            state: Arc::clone(&self.state),
            events: self.events.clone(),
        }
    }
}

impl<S> Pager<S>
where
    S: ProductSource,
    S::Item: Identified + Clone + Send + Sync,
{
    /// Create a pager for `params`. Nothing is loaded until [`Pager::refresh`].
    pub fn new(loader: PagedCollectionLoader<S>, params: QueryParameters) -> Result<Self> {
        params.validate()?;
        Ok(Self {
            loader: Arc::new(loader),
            state: Arc::new(RwLock::new(LoaderState::new(params))),
            events: None,
        })
    }

    /// Publish [`PagerEvent`]s on `tx`.
    pub fn with_events(mut self, tx: Sender<PagerEvent>) -> Self {
        self.events = Some(tx);
        self
    }

    pub fn state(&self) -> Arc<RwLock<LoaderState<S::Item>>> {
        Arc::clone(&self.state)
    }

    pub fn params(&self) -> QueryParameters {
        self.state.read().params().clone()
    }

    pub fn snapshot(&self) -> PagerSnapshot<S::Item> {
        let state = self.state.read();
        PagerSnapshot {
            generation: state.generation(),
            items: state.items().to_vec(),
            status: state.status().clone(),
            next_key: state.next_key(),
        }
    }

    pub fn set_anchor_position(&self, position: Option<usize>) {
        self.state.write().set_anchor_position(position);
    }

    /// Switch to new parameters after validating them.
    ///
    /// Returns whether the list was reset. In-flight results for the old
    /// parameters are discarded when they arrive. Call [`Pager::refresh`]
    /// afterwards to load the new first page.
    pub fn set_params(&self, params: QueryParameters) -> Result<bool> {
        params.validate()?;
        Ok(self.state.write().set_params(params))
    }

    /// Reload from the page around the anchor position (page 1 if none).
    pub async fn refresh(&self) -> ApplyResult {
        let request = {
            let mut state = self.state.write();
            let key = state.refresh_key();
            state.begin_refresh(key)
        };
        self.run(request).await
    }

    /// Load the page after the last loaded one. `None` if not possible now.
    pub async fn load_next(&self) -> Option<ApplyResult> {
        let request = self.state.write().begin_append()?;
        Some(self.run(request).await)
    }

    /// Load the page before the first loaded one. `None` if not possible now.
    pub async fn load_previous(&self) -> Option<ApplyResult> {
        let request = self.state.write().begin_prepend()?;
        Some(self.run(request).await)
    }

    /// Repeat the last failed load with the same key.
    pub async fn retry(&self) -> Option<ApplyResult> {
        let request = self.state.write().retry_request()?;
        Some(self.run(request).await)
    }

    async fn run(&self, request: LoadRequest) -> ApplyResult {
        let span = tracing::info_span!(
            "pager_load",
            request_id = %Uuid::new_v4(),
            generation = request.generation,
            kind = ?request.kind,
        );

        let outcome = self
            .loader
            .load_page(&request.params, request.key)
            .instrument(span)
            .await;
        let failure = outcome.error_message().map(str::to_string);

        let (result, total) = {
            let mut state = self.state.write();
            let result = state.apply(&request, outcome);
            (result, state.items().len())
        };

        let event = match (result, failure) {
            (ApplyResult::Applied { added }, _) => PagerEvent::Loaded {
                generation: request.generation,
                kind: request.kind,
                added,
                total,
            },
            (ApplyResult::Failed, message) => PagerEvent::Failed {
                generation: request.generation,
                kind: request.kind,
                message: message.unwrap_or_default(),
            },
            (ApplyResult::Discarded, _) => PagerEvent::Discarded {
                generation: request.generation,
                kind: request.kind,
            },
        };

        if let Some(tx) = &self.events {
            let _ = tx.send(event).await;
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::AppError;
    use crate::paging::testing::FakeSource;

    fn pager(source: &FakeSource) -> Pager<FakeSource> {
        let loader = PagedCollectionLoader::new(source.clone(), 20).unwrap();
        Pager::new(loader, QueryParameters::new()).unwrap()
    }

    #[tokio::test]
    async fn test_walks_all_pages() {
        let source = FakeSource::with_items(45);
        let pager = pager(&source);

        assert_eq!(pager.refresh().await, ApplyResult::Applied { added: 20 });
        assert_eq!(pager.load_next().await, Some(ApplyResult::Applied { added: 20 }));
        assert_eq!(pager.load_next().await, Some(ApplyResult::Applied { added: 5 }));
        assert_eq!(pager.load_next().await, None);

        let snapshot = pager.snapshot();
        assert_eq!(snapshot.items.len(), 45);
        assert_eq!(snapshot.status, LoadStatus::EndReached);
        assert_eq!(source.requested_pages(), vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_invalid_params_rejected() {
        let source = FakeSource::with_items(1);
        let pager = pager(&source);
        let bad = QueryParameters::new().with_price_range(Some(9.0), Some(1.0));
        assert!(matches!(pager.set_params(bad), Err(AppError::Validation(_))));
        assert_eq!(pager.params(), QueryParameters::new());
    }

    #[tokio::test]
    async fn test_stale_result_is_discarded_after_param_change() {
        let source = FakeSource::with_items(30);
        source.hold();
        let pager = pager(&source);

        let in_flight = tokio::spawn({
            let pager = pager.clone();
            async move { pager.refresh().await }
        });
        while source.request_count() == 0 {
            tokio::task::yield_now().await;
        }

        let changed = pager
            .set_params(QueryParameters::new().with_search(Some("lamp")))
            .unwrap();
        assert!(changed);
        source.release(1);

        assert_eq!(in_flight.await.unwrap(), ApplyResult::Discarded);
        assert!(pager.snapshot().items.is_empty());

        source.release(1);
        pager.refresh().await;
        let snapshot = pager.snapshot();
        assert_eq!(snapshot.items.len(), 20);
        assert!(snapshot.items.iter().all(|i| i.id.starts_with("lamp-")));
    }

    #[tokio::test]
    async fn test_retry_after_failure() {
        let source = FakeSource::with_items(30);
        let pager = pager(&source);
        pager.refresh().await;

        source.fail_next(AppError::Server { status: 503, message: "maintenance".into() });
        assert_eq!(pager.load_next().await, Some(ApplyResult::Failed));
        assert_eq!(pager.snapshot().items.len(), 20);

        assert_eq!(pager.retry().await, Some(ApplyResult::Applied { added: 10 }));
        assert_eq!(source.requested_pages(), vec![1, 2, 2]);
        assert_eq!(pager.retry().await, None);
    }

    #[tokio::test]
    async fn test_failed_append_stops_load_next() {
        let source = FakeSource::with_items(60);
        let pager = pager(&source);
        pager.refresh().await;

        source.fail_next(AppError::Network("offline".into()));
        assert_eq!(pager.load_next().await, Some(ApplyResult::Failed));
        assert_eq!(pager.load_next().await, None);
        assert_eq!(source.requested_pages(), vec![1, 2]);

        assert_eq!(pager.retry().await, Some(ApplyResult::Applied { added: 20 }));
        assert_eq!(pager.load_next().await, Some(ApplyResult::Applied { added: 20 }));
    }

    #[tokio::test]
    async fn test_refresh_at_anchor() {
        let source = FakeSource::with_items(60);
        let pager = pager(&source);
        pager.refresh().await;
        pager.load_next().await;

        pager.set_anchor_position(Some(25));
        pager.refresh().await;
        assert_eq!(source.requested_pages(), vec![1, 2, 2]);

        assert_eq!(pager.load_previous().await, Some(ApplyResult::Applied { added: 20 }));
        assert_eq!(pager.snapshot().items.first().unwrap().id, "all-0");
    }

    #[tokio::test]
    async fn test_events_are_published() {
        let source = FakeSource::with_items(5);
        let (tx, rx) = async_channel::unbounded();
        let loader = PagedCollectionLoader::new(source.clone(), 20).unwrap();
        let pager = Pager::new(loader, QueryParameters::new()).unwrap().with_events(tx);

        pager.refresh().await;
        assert_eq!(
            rx.recv().await.unwrap(),
            PagerEvent::Loaded { generation: 1, kind: LoadKind::Refresh, added: 5, total: 5 }
        );

        source.fail_next(AppError::Network("offline".into()));
        pager.refresh().await;
        match rx.recv().await.unwrap() {
            PagerEvent::Failed { kind, message, .. } => {
                assert_eq!(kind, LoadKind::Refresh);
                assert!(message.contains("offline"));
            }
            other => panic!("unexpected event: {:?}", other),
        }
    }
}
