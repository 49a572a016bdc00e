//! Pagination types for list endpoints.
//!
//! Pagination only makes sense over a deterministically ordered query; the
//! ordering contract belongs to the caller.

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Default page size when the client does not specify one.
pub const DEFAULT_PAGE_SIZE: u64 = 10;
/// Maximum page size. Larger requests are clamped, not rejected.
pub const MAX_PAGE_SIZE: u64 = 50;

/// Request parameters for paginated queries (1-based page numbering).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    /// Page number (1-based).
    pub page: u64,
    /// Number of items per page (1..=[`MAX_PAGE_SIZE`]).
    pub page_size: u64,
}

impl PageRequest {
    /// Build a page request, clamping oversized pages to [`MAX_PAGE_SIZE`].
    ///
    /// A `page_size` of zero is rejected rather than clamped up: silently
    /// turning 0 into something positive would hide a malformed request, and
    /// letting it through would make the page-count math undefined.
    pub fn new(page: u64, page_size: u64) -> Result<Self, AppError> {
        if page_size == 0 {
            return Err(AppError::validation("page_size must be greater than zero"));
        }
        Ok(Self {
            page: page.max(1),
            page_size: page_size.min(MAX_PAGE_SIZE),
        })
    }

    /// The SQL `OFFSET` value for this page.
    pub fn offset(&self) -> u64 {
        (self.page.saturating_sub(1)) * self.page_size
    }

    /// The SQL `LIMIT` value for this page.
    pub fn limit(&self) -> u64 {
        self.page_size
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// A bounded slice of an ordered sequence plus its descriptive metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageResponse<T> {
    /// The items on this page.
    pub items: Vec<T>,
    /// Current page number (1-based).
    pub page: u64,
    /// Number of items per page.
    pub page_size: u64,
    /// Total number of items across all pages.
    pub total_items: u64,
    /// Total number of pages (ceiling division, minimum 1).
    pub total_pages: u64,
    /// Whether there is a next page.
    pub has_next: bool,
    /// Whether there is a previous page.
    pub has_previous: bool,
}

impl<T> PageResponse<T> {
    /// Wrap a materialized page of items with computed metadata.
    ///
    /// `page` is the *requested* page; a page number beyond `total_pages`
    /// yields an empty item list but metadata still describing the sequence.
    pub fn new(items: Vec<T>, request: &PageRequest, total_items: u64) -> Self {
        let total_pages = if total_items == 0 {
            1
        } else {
            total_items.div_ceil(request.page_size)
        };
        Self {
            items,
            page: request.page,
            page_size: request.page_size,
            total_items,
            total_pages,
            has_next: request.page < total_pages,
            has_previous: request.page > 1,
        }
    }

    /// Map the page's items, preserving all metadata.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> PageResponse<U> {
        PageResponse {
            items: self.items.into_iter().map(f).collect(),
            page: self.page,
            page_size: self.page_size,
            total_items: self.total_items,
            total_pages: self.total_pages,
            has_next: self.has_next,
            has_previous: self.has_previous,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(p: u64, size: u64) -> PageRequest {
        PageRequest::new(p, size).unwrap()
    }

    #[test]
    fn zero_page_size_is_rejected() {
        let err = PageRequest::new(1, 0).unwrap_err();
        assert_eq!(err.kind, crate::error::ErrorKind::Validation);
    }

    #[test]
    fn oversized_page_size_is_clamped() {
        assert_eq!(page(1, 500).page_size, MAX_PAGE_SIZE);
        assert_eq!(page(1, MAX_PAGE_SIZE).page_size, MAX_PAGE_SIZE);
    }

    #[test]
    fn page_zero_is_normalized_to_one() {
        assert_eq!(page(0, 10).page, 1);
    }

    #[test]
    fn offset_skips_previous_pages() {
        assert_eq!(page(1, 10).offset(), 0);
        assert_eq!(page(3, 10).offset(), 20);
        assert_eq!(page(3, 10).limit(), 10);
    }

    #[test]
    fn metadata_for_exact_multiple() {
        let resp = PageResponse::new(vec![1, 2, 3], &page(1, 3), 9);
        assert_eq!(resp.total_pages, 3);
        assert!(resp.has_next);
        assert!(!resp.has_previous);
    }

    #[test]
    fn last_page_holds_the_remainder() {
        // 10 items, page size 3 -> pages of 3,3,3,1
        let resp = PageResponse::new(vec![10], &page(4, 3), 10);
        assert_eq!(resp.total_pages, 4);
        assert_eq!(resp.items.len(), 1);
        assert!(!resp.has_next);
        assert!(resp.has_previous);
    }

    #[test]
    fn middle_page_has_both_neighbors() {
        let resp = PageResponse::new(vec![4, 5, 6], &page(2, 3), 10);
        assert!(resp.has_next);
        assert!(resp.has_previous);
    }

    #[test]
    fn out_of_range_page_keeps_metadata() {
        let resp: PageResponse<i32> = PageResponse::new(vec![], &page(9, 3), 10);
        assert!(resp.items.is_empty());
        assert_eq!(resp.total_items, 10);
        assert_eq!(resp.total_pages, 4);
        assert!(!resp.has_next);
        assert!(resp.has_previous);
    }

    #[test]
    fn empty_sequence_is_one_empty_page() {
        let resp: PageResponse<i32> = PageResponse::new(vec![], &page(1, 10), 0);
        assert_eq!(resp.total_pages, 1);
        assert!(!resp.has_next);
        assert!(!resp.has_previous);
    }

    #[test]
    fn map_preserves_metadata() {
        let resp = PageResponse::new(vec![1, 2], &page(2, 2), 5).map(|n| n * 10);
        assert_eq!(resp.items, vec![10, 20]);
        assert_eq!(resp.total_pages, 3);
        assert!(resp.has_previous);
    }
}
