//! # Incremental Pagination
//!
//! Client-side paging over the filtered, sorted marketplace product listing.
//!
//! ## Module Structure
//!
//! ```text
//! paging/
//! ├── key.rs      - PageKey (1-based page numbers)
//! ├── query.rs    - QueryParameters (filters + sort, one result stream)
//! ├── outcome.rs  - LoadOutcome (Page | Error)
//! ├── loader.rs   - PagedCollectionLoader (one request per page)
//! ├── refresh.rs  - PagingState, compute_refresh_key
//! ├── state.rs    - LoaderState (accumulated items, stale-result discard)
//! └── pager.rs    - Pager (async driver over loader + state)
//! ```
//!
//! ## Flow
//!
//! ```text
//!  consumer ── begin_refresh/append ──▶ LoaderState ── LoadRequest ──┐
//!     ▲                                                              ▼
//!     └──── apply(request, outcome) ◀── LoadOutcome ◀── PagedCollectionLoader
//!                                                              │
//!                                                              ▼
//!                                                     ProductSource (HTTP)
//! ```

mod key;
mod loader;
mod outcome;
mod pager;
mod query;
mod refresh;
mod state;

#[cfg(test)]
pub(crate) mod testing;

pub use key::PageKey;
pub use loader::{PagedCollectionLoader, DEFAULT_PAGE_SIZE};
pub use outcome::LoadOutcome;
pub use pager::{Pager, PagerEvent, PagerSnapshot};
pub use query::QueryParameters;
pub use refresh::{compute_refresh_key, LoadedPage, PagingState};
pub use state::{ApplyResult, Identified, LoadKind, LoadRequest, LoadStatus, LoaderState};
