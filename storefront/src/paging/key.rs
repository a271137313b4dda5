//! Page keys: dense, 1-based page numbers.

use std::fmt;
use std::num::NonZeroU32;

/// Identifies one fixed-size page of a stably sorted remote collection.
///
/// Always `>= 1`. The first page is [`PageKey::FIRST`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PageKey(NonZeroU32);

impl PageKey {
    pub const FIRST: PageKey = PageKey(NonZeroU32::MIN);

    /// Returns `None` for 0.
    pub fn new(page: u32) -> Option<Self> {
        NonZeroU32::new(page).map(PageKey)
    }

    pub fn get(self) -> u32 {
        self.0.get()
    }

    pub fn is_first(self) -> bool {
        self == Self::FIRST
    }

    /// Key of the preceding page, `None` on the first page.
    pub fn prev(self) -> Option<PageKey> {
        PageKey::new(self.get() - 1)
    }

    /// Key of the following page if it exists in a collection of
    /// `total_pages` pages.
    pub fn next_within(self, total_pages: u32) -> Option<PageKey> {
        if self.get() < total_pages {
            self.get().checked_add(1).and_then(PageKey::new)
        } else {
            None
        }
    }

    /// Resolve an optional requested key, defaulting to the first page.
    pub fn or_first(key: Option<PageKey>) -> PageKey {
        key.unwrap_or(PageKey::FIRST)
    }
}

impl Default for PageKey {
    fn default() -> Self {
        PageKey::FIRST
    }
}

impl fmt::Display for PageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u32> for PageKey {
    type Error = crate::core::error::AppError;

    fn try_from(page: u32) -> Result<Self, Self::Error> {
        PageKey::new(page).ok_or_else(|| {
            crate::core::error::AppError::Validation("Page numbers start at 1".to_string())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(n: u32) -> PageKey {
        PageKey::new(n).unwrap()
    }

    #[test]
    fn test_zero_is_rejected() {
        assert!(PageKey::new(0).is_none());
        assert!(PageKey::try_from(0).is_err());
        assert_eq!(PageKey::try_from(3).unwrap(), key(3));
    }

    #[test]
    fn test_prev() {
        assert_eq!(PageKey::FIRST.prev(), None);
        assert_eq!(key(2).prev(), Some(PageKey::FIRST));
        assert_eq!(key(9).prev(), Some(key(8)));
    }

    #[test]
    fn test_next_within() {
        assert_eq!(key(1).next_within(3), Some(key(2)));
        assert_eq!(key(3).next_within(3), None);
        assert_eq!(key(1).next_within(0), None);
        assert_eq!(key(5).next_within(3), None);
        assert_eq!(key(u32::MAX).next_within(u32::MAX), None);
    }

    #[test]
    fn test_default_is_first() {
        assert_eq!(PageKey::or_first(None), PageKey::FIRST);
        assert_eq!(PageKey::or_first(Some(key(4))), key(4));
        assert!(PageKey::default().is_first());
    }
}
