//! Pagination bounds and page-window derivation.
//!
//! Listing endpoints take `(from, size)` query parameters. The bounds rule
//! and the page-index derivation are shared by every query family so the
//! repositories only ever see a validated [`Page`].

/// A validated page window handed to the repository layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    /// Zero-based page index.
    pub index: i64,
    /// Rows per page; always positive.
    pub size: i64,
}

impl Page {
    /// Row offset of this window.
    pub fn offset(&self) -> i64 {
        self.index * self.size
    }

    /// Row limit of this window.
    pub fn limit(&self) -> i64 {
        self.size
    }
}

/// Validate `(from, size)` bounds and derive the page window.
///
/// Requires `size > 0`, `from >= 0` and `from <= size`. The page index is
/// `from / size` (integer division): `from` is NOT an absolute row offset,
/// it selects which size-sized page the window starts on.
pub fn page_from_bounds(from: i64, size: i64) -> Result<Page, String> {
    if size <= 0 || from < 0 || from > size {
        return Err("Invalid pagination bounds".to_string());
    }
    Ok(Page {
        index: from / size,
        size,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_page_from_zero() {
        let page = page_from_bounds(0, 10).unwrap();
        assert_eq!(page, Page { index: 0, size: 10 });
        assert_eq!(page.offset(), 0);
        assert_eq!(page.limit(), 10);
    }

    #[test]
    fn from_below_size_stays_on_first_page() {
        // from=5, size=10 -> index 5/10 = 0, not offset 5.
        let page = page_from_bounds(5, 10).unwrap();
        assert_eq!(page.index, 0);
        assert_eq!(page.offset(), 0);
    }

    #[test]
    fn from_equal_to_size_selects_second_page() {
        let page = page_from_bounds(10, 10).unwrap();
        assert_eq!(page.index, 1);
        assert_eq!(page.offset(), 10);
    }

    #[test]
    fn negative_from_rejected() {
        assert!(page_from_bounds(-5, 10).is_err());
    }

    #[test]
    fn zero_size_rejected() {
        assert!(page_from_bounds(0, 0).is_err());
    }

    #[test]
    fn negative_size_rejected() {
        assert!(page_from_bounds(0, -1).is_err());
    }

    #[test]
    fn from_greater_than_size_rejected() {
        assert!(page_from_bounds(11, 10).is_err());
    }
}
