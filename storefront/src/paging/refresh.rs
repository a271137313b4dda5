//! Refresh key selection.
//!
//! After a pull-to-refresh the consumer reloads the page around the user's
//! scroll position instead of jumping back to page 1.

use super::PageKey;

/// A successfully loaded page as held by a consumer.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedPage<T> {
    pub items: Vec<T>,
    pub prev_key: Option<PageKey>,
    pub next_key: Option<PageKey>,
}

impl<T> LoadedPage<T> {
    /// The key this page was loaded with, recovered from its neighbours.
    pub fn key(&self) -> Option<PageKey> {
        match (self.prev_key, self.next_key) {
            (Some(prev), _) => prev.get().checked_add(1).and_then(PageKey::new),
            (None, Some(next)) => next.prev(),
            (None, None) => None,
        }
    }
}

/// Snapshot of the loaded pages and the viewport anchor.
#[derive(Debug, Clone, PartialEq)]
pub struct PagingState<T> {
    pub pages: Vec<LoadedPage<T>>,
    /// Index of the item nearest the viewport; `None` if never scrolled.
    pub anchor_position: Option<usize>,
}

impl<T> PagingState<T> {
    pub fn new(pages: Vec<LoadedPage<T>>, anchor_position: Option<usize>) -> Self {
        Self { pages, anchor_position }
    }

    /// Page containing item `position`, or the last page when `position`
    /// lies past the loaded items. `None` when nothing is loaded.
    pub fn closest_page_to_position(&self, position: usize) -> Option<&LoadedPage<T>> {
        let mut seen = 0usize;
        for page in &self.pages {
            seen += page.items.len();
            if position < seen {
                return Some(page);
            }
        }
        self.pages.last()
    }
}

/// Key to reload first on refresh. `None` means start from the first page.
///
/// Prefers `prev_key + 1` of the anchor page and falls back to
/// `next_key - 1`. Pure and deterministic.
pub fn compute_refresh_key<T>(state: &PagingState<T>) -> Option<PageKey> {
    let anchor = state.anchor_position?;
    state.closest_page_to_position(anchor)?.key()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(n: u32) -> Option<PageKey> {
        PageKey::new(n)
    }

    fn page(n: u32, len: usize, last: bool) -> LoadedPage<usize> {
        LoadedPage {
            items: (0..len).collect(),
            prev_key: PageKey::new(n).and_then(PageKey::prev),
            next_key: if last { None } else { key(n + 1) },
        }
    }

    fn three_pages() -> Vec<LoadedPage<usize>> {
        vec![page(1, 20, false), page(2, 20, false), page(3, 5, true)]
    }

    #[test]
    fn test_no_anchor_is_initial() {
        let state = PagingState::new(three_pages(), None);
        assert_eq!(compute_refresh_key(&state), None);
    }

    #[test]
    fn test_nothing_loaded_is_initial() {
        let state: PagingState<usize> = PagingState::new(Vec::new(), Some(12));
        assert_eq!(compute_refresh_key(&state), None);
    }

    #[test]
    fn test_anchor_picks_containing_page() {
        assert_eq!(compute_refresh_key(&PagingState::new(three_pages(), Some(0))), key(1));
        assert_eq!(compute_refresh_key(&PagingState::new(three_pages(), Some(19))), key(1));
        assert_eq!(compute_refresh_key(&PagingState::new(three_pages(), Some(20))), key(2));
        assert_eq!(compute_refresh_key(&PagingState::new(three_pages(), Some(44))), key(3));
    }

    #[test]
    fn test_anchor_past_end_uses_last_page() {
        let state = PagingState::new(three_pages(), Some(1_000));
        assert_eq!(compute_refresh_key(&state), key(3));
    }

    #[test]
    fn test_first_page_falls_back_to_next_key() {
        let pages = vec![page(1, 20, false)];
        let state = PagingState::new(pages, Some(3));
        assert_eq!(compute_refresh_key(&state), key(1));
    }

    #[test]
    fn test_single_final_page_is_initial() {
        let pages = vec![page(1, 7, true)];
        let state = PagingState::new(pages, Some(3));
        assert_eq!(compute_refresh_key(&state), None);
    }

    #[test]
    fn test_deterministic() {
        let state = PagingState::new(three_pages(), Some(27));
        assert_eq!(compute_refresh_key(&state), compute_refresh_key(&state));
    }
}
