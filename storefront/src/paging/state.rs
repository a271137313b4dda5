//! # Loader State
//!
//! Consumer-side bookkeeping for one product list: the current parameters,
//! the pages loaded so far, the accumulated (deduplicated) items and the
//! status shown as full-screen or trailing indicators.
//!
//! Every load goes through a [`LoadRequest`] issued by this state and comes
//! back through [`LoaderState::apply`]. A request issued before a parameter
//! change or a refresh carries an older generation and its result is
//! discarded on arrival.

use super::refresh::{compute_refresh_key, LoadedPage, PagingState};
use super::{LoadOutcome, PageKey, QueryParameters};
use shared::MarketplaceProduct;
use std::collections::HashSet;

/// Items with a stable identity, used to deduplicate accumulated pages.
pub trait Identified {
    fn id(&self) -> &str;
}

impl Identified for MarketplaceProduct {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Which end of the list a load fills.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LoadKind {
    /// Replace everything, starting at the refresh key.
    Refresh,
    /// Load the page before the first loaded page.
    Prepend,
    /// Load the page after the last loaded page.
    Append,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadStatus {
    Idle,
    Loading(LoadKind),
    /// A refresh error is shown full-screen; prepend/append errors inline
    /// while the accumulated items stay visible.
    Error { kind: LoadKind, message: String },
    /// The last loaded page had no next key.
    EndReached,
}

/// A load the consumer should perform with the loader.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadRequest {
    pub generation: u64,
    pub params: QueryParameters,
    pub key: Option<PageKey>,
    pub kind: LoadKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyResult {
    /// Page merged; `added` items survived deduplication.
    Applied { added: usize },
    /// Error recorded; accumulated items untouched.
    Failed,
    /// Result belonged to a superseded request and was dropped.
    Discarded,
}

#[derive(Debug, Clone)]
pub struct LoaderState<T> {
    params: QueryParameters,
    generation: u64,
    pages: Vec<LoadedPage<T>>,
    items: Vec<T>,
    seen: HashSet<String>,
    status: LoadStatus,
    in_flight: Option<LoadRequest>,
    failed: Option<LoadRequest>,
    last_loaded_key: Option<PageKey>,
    anchor_position: Option<usize>,
}

impl<T: Identified + Clone> LoaderState<T> {
    pub fn new(params: QueryParameters) -> Self {
        Self {
            params,
            generation: 0,
            pages: Vec::new(),
            items: Vec::new(),
            seen: HashSet::new(),
            status: LoadStatus::Idle,
            in_flight: None,
            failed: None,
            last_loaded_key: None,
            anchor_position: None,
        }
    }

    pub fn params(&self) -> &QueryParameters {
        &self.params
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Accumulated items, in list order.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn pages(&self) -> &[LoadedPage<T>] {
        &self.pages
    }

    pub fn status(&self) -> &LoadStatus {
        &self.status
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn last_loaded_key(&self) -> Option<PageKey> {
        self.last_loaded_key
    }

    /// Key before the first loaded page.
    pub fn prev_key(&self) -> Option<PageKey> {
        self.pages.first().and_then(|p| p.prev_key)
    }

    /// Key after the last loaded page.
    pub fn next_key(&self) -> Option<PageKey> {
        self.pages.last().and_then(|p| p.next_key)
    }

    pub fn set_anchor_position(&mut self, position: Option<usize>) {
        self.anchor_position = position;
    }

    pub fn paging_state(&self) -> PagingState<T> {
        PagingState::new(self.pages.clone(), self.anchor_position)
    }

    /// Page to reload first on refresh, `None` for the first page.
    pub fn refresh_key(&self) -> Option<PageKey> {
        compute_refresh_key(&self.paging_state())
    }

    /// Switch to new parameters. Resets everything and returns `true` only
    /// if they differ from the current ones.
    pub fn set_params(&mut self, params: QueryParameters) -> bool {
        if params == self.params {
            return false;
        }
        tracing::debug!(generation = self.generation + 1, "Query parameters changed, resetting list");
        self.params = params;
        self.reset();
        true
    }

    /// Start a refresh at `key`, discarding accumulated items and
    /// superseding any in-flight load.
    pub fn begin_refresh(&mut self, key: Option<PageKey>) -> LoadRequest {
        self.reset();
        self.issue(LoadKind::Refresh, key)
    }

    /// Request the next page. `None` while a load is in flight, before
    /// anything is loaded, at the end of the stream, or after a failed
    /// append (use [`LoaderState::retry_request`] then).
    pub fn begin_append(&mut self) -> Option<LoadRequest> {
        if self.in_flight.is_some() || self.failed_with(LoadKind::Append) {
            return None;
        }
        let key = self.next_key()?;
        Some(self.issue(LoadKind::Append, Some(key)))
    }

    /// Request the page before the first loaded page, if any. `None` after a
    /// failed prepend until it is retried.
    pub fn begin_prepend(&mut self) -> Option<LoadRequest> {
        if self.in_flight.is_some() || self.failed_with(LoadKind::Prepend) {
            return None;
        }
        let key = self.prev_key()?;
        Some(self.issue(LoadKind::Prepend, Some(key)))
    }

    /// Re-issue the failed request with the same parameters and key.
    pub fn retry_request(&mut self) -> Option<LoadRequest> {
        if self.in_flight.is_some() {
            return None;
        }
        let failed = self.failed.take()?;
        if failed.generation != self.generation {
            return None;
        }
        Some(self.issue(failed.kind, failed.key))
    }

    /// Merge the outcome of `request`.
    ///
    /// Only the in-flight request is applied. It is matched on generation,
    /// kind and key; the generation already pins the parameters.
    pub fn apply(&mut self, request: &LoadRequest, outcome: LoadOutcome<T>) -> ApplyResult {
        if !self.is_in_flight(request) {
            tracing::debug!(
                request_generation = request.generation,
                current_generation = self.generation,
                kind = ?request.kind,
                "Discarding stale page result"
            );
            return ApplyResult::Discarded;
        }
        self.in_flight = None;

        match outcome {
            LoadOutcome::Page { items, prev_key, next_key } => {
                let fresh: Vec<T> = items
                    .into_iter()
                    .filter(|item| self.seen.insert(item.id().to_string()))
                    .collect();
                let added = fresh.len();
                let page = LoadedPage { items: fresh.clone(), prev_key, next_key };

                match request.kind {
                    LoadKind::Refresh => {
                        self.pages = vec![page];
                        self.items = fresh;
                    }
                    LoadKind::Append => {
                        self.pages.push(page);
                        self.items.extend(fresh);
                    }
                    LoadKind::Prepend => {
                        self.pages.insert(0, page);
                        let mut merged = fresh;
                        merged.append(&mut self.items);
                        self.items = merged;
                    }
                }

                self.last_loaded_key = Some(PageKey::or_first(request.key));
                self.failed = None;
                self.status = if self.next_key().is_none() {
                    LoadStatus::EndReached
                } else {
                    LoadStatus::Idle
                };
                ApplyResult::Applied { added }
            }
            LoadOutcome::Error { message } => {
                self.status = LoadStatus::Error { kind: request.kind, message };
                self.failed = Some(request.clone());
                ApplyResult::Failed
            }
        }
    }

    fn is_in_flight(&self, request: &LoadRequest) -> bool {
        self.in_flight.as_ref().is_some_and(|current| {
            current.generation == request.generation
                && current.kind == request.kind
                && current.key == request.key
        })
    }

    fn failed_with(&self, kind: LoadKind) -> bool {
        self.failed.as_ref().is_some_and(|failed| failed.kind == kind)
    }

    fn issue(&mut self, kind: LoadKind, key: Option<PageKey>) -> LoadRequest {
        let request = LoadRequest {
            generation: self.generation,
            params: self.params.clone(),
            key,
            kind,
        };
        self.status = LoadStatus::Loading(kind);
        self.in_flight = Some(request.clone());
        request
    }

    fn reset(&mut self) {
        self.generation += 1;
        self.pages.clear();
        self.items.clear();
        self.seen.clear();
        self.status = LoadStatus::Idle;
        self.in_flight = None;
        self.failed = None;
        self.last_loaded_key = None;
        self.anchor_position = None;
    }
}
