//! Result of a single page load.

use super::PageKey;

/// Outcome of [`PagedCollectionLoader::load_page`](super::PagedCollectionLoader::load_page).
///
/// Closed: every consumer handles both arms.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadOutcome<T> {
    /// A page was loaded. `next_key` is `None` at the end of the stream.
    Page {
        items: Vec<T>,
        prev_key: Option<PageKey>,
        next_key: Option<PageKey>,
    },
    /// The remote collaborator failed. `message` is never empty.
    Error { message: String },
}

impl<T> LoadOutcome<T> {
    pub fn is_page(&self) -> bool {
        matches!(self, LoadOutcome::Page { .. })
    }

    pub fn items(&self) -> Option<&[T]> {
        match self {
            LoadOutcome::Page { items, .. } => Some(items),
            LoadOutcome::Error { .. } => None,
        }
    }

    pub fn prev_key(&self) -> Option<PageKey> {
        match self {
            LoadOutcome::Page { prev_key, .. } => *prev_key,
            LoadOutcome::Error { .. } => None,
        }
    }

    pub fn next_key(&self) -> Option<PageKey> {
        match self {
            LoadOutcome::Page { next_key, .. } => *next_key,
            LoadOutcome::Error { .. } => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            LoadOutcome::Page { .. } => None,
            LoadOutcome::Error { message } => Some(message),
        }
    }
}
