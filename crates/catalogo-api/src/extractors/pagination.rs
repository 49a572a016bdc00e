//! Pagination query parameter extractor.

use serde::{Deserialize, Serialize};

use catalogo_core::error::AppError;
use catalogo_core::types::pagination::{PageRequest, DEFAULT_PAGE_SIZE};

/// Query parameters for paginated endpoints.
///
/// Used as `Query<PaginationParams>`; conversion into a [`PageRequest`]
/// applies the clamp and rejects a zero page size.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PaginationParams {
    /// Page number (1-based, default 1).
    #[serde(default = "default_page")]
    pub page: u64,
    /// Items per page (default 10, max 50).
    #[serde(default = "default_page_size")]
    pub page_size: u64,
}

fn default_page() -> u64 {
    1
}

fn default_page_size() -> u64 {
    DEFAULT_PAGE_SIZE
}

impl PaginationParams {
    /// Convert to a validated `PageRequest`.
    pub fn into_page_request(self) -> Result<PageRequest, AppError> {
        PageRequest::new(self.page, self.page_size)
    }
}

impl Default for PaginationParams {
    fn default() -> Self {
        Self {
            page: default_page(),
            page_size: default_page_size(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalogo_core::types::pagination::MAX_PAGE_SIZE;

    #[test]
    fn defaults_apply_when_query_is_empty() {
        let params: PaginationParams = serde_json::from_str("{}").unwrap();
        let page = params.into_page_request().unwrap();
        assert_eq!(page.page, 1);
        assert_eq!(page.page_size, DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn zero_page_size_is_a_validation_error() {
        let params = PaginationParams { page: 1, page_size: 0 };
        assert!(params.into_page_request().is_err());
    }

    #[test]
    fn oversized_page_size_is_clamped() {
        let params = PaginationParams { page: 1, page_size: 999 };
        assert_eq!(params.into_page_request().unwrap().page_size, MAX_PAGE_SIZE);
    }
}
