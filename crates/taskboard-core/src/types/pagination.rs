//! Pagination types for list endpoints.

use serde::{Deserialize, Serialize};

/// Default page size.
const DEFAULT_PAGE_SIZE: u64 = 25;
/// Maximum page size.
const MAX_PAGE_SIZE: u64 = 100;

/// Request parameters for paginated queries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageRequest {
    /// Page number (1-based).
    #[serde(default = "default_page")]
    pub page: u64,
    /// Number of items per page.
    #[serde(default = "default_page_size")]
    pub page_size: u64,
}

impl PageRequest {
    /// Create a new page request.
    pub fn new(page: u64, page_size: u64) -> Self {
        Self {
            page: page.max(1),
            page_size: page_size.clamp(1, MAX_PAGE_SIZE),
        }
    }

    /// Calculate the SQL `OFFSET` value.
    pub fn offset(&self) -> u64 {
        (self.page.saturating_sub(1)) * self.page_size
    }

    /// Return the SQL `LIMIT` value.
    pub fn limit(&self) -> u64 {
        self.page_size
    }

    /// Return a copy with `page` and `page_size` forced into their valid
    /// ranges. Deserialized requests bypass [`PageRequest::new`] (serde
    /// defaults only cover absent fields), so query code normalizes
    /// before computing offsets.
    pub fn normalized(&self) -> Self {
        Self::new(self.page, self.page_size)
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

/// Paginated response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageResponse<T: Serialize> {
    /// The items on this page.
    pub items: Vec<T>,
    /// Current page number (1-based).
    pub page: u64,
    /// Number of items per page.
    pub page_size: u64,
    /// Total number of items across all pages.
    pub total_items: u64,
    /// Total number of pages.
    pub total_pages: u64,
}

impl<T: Serialize> PageResponse<T> {
    /// Create a new paginated response. A zero `page_size` is treated as 1
    /// so the page arithmetic cannot divide by zero.
    pub fn new(items: Vec<T>, page: u64, page_size: u64, total_items: u64) -> Self {
        let page_size = page_size.max(1);
        let total_pages = if total_items == 0 {
            1
        } else {
            total_items.div_ceil(page_size)
        };
        Self {
            items,
            page,
            page_size,
            total_items,
            total_pages,
        }
    }
}

fn default_page() -> u64 {
    1
}

fn default_page_size() -> u64 {
    DEFAULT_PAGE_SIZE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_is_zero_based() {
        assert_eq!(PageRequest::new(1, 25).offset(), 0);
        assert_eq!(PageRequest::new(3, 10).offset(), 20);
    }

    #[test]
    fn test_page_size_clamped() {
        assert_eq!(PageRequest::new(1, 0).page_size, 1);
        assert_eq!(PageRequest::new(1, 5000).page_size, MAX_PAGE_SIZE);
    }

    #[test]
    fn test_normalized_repairs_deserialized_values() {
        let raw = PageRequest { page: 0, page_size: 0 };
        let fixed = raw.normalized();
        assert_eq!(fixed.page, 1);
        assert_eq!(fixed.page_size, 1);

        let huge = PageRequest { page: 2, page_size: u64::MAX }.normalized();
        assert_eq!(huge.page_size, MAX_PAGE_SIZE);
        assert_eq!(huge.offset(), MAX_PAGE_SIZE);
    }

    #[test]
    fn test_zero_page_size_does_not_divide_by_zero() {
        let page: PageResponse<u32> = PageResponse::new(vec![], 1, 0, 5);
        assert_eq!(page.page_size, 1);
        assert_eq!(page.total_pages, 5);
    }

    #[test]
    fn test_total_pages_rounds_up() {
        let page: PageResponse<u32> = PageResponse::new(vec![], 1, 10, 31);
        assert_eq!(page.total_pages, 4);
        let empty: PageResponse<u32> = PageResponse::new(vec![], 1, 10, 0);
        assert_eq!(empty.total_pages, 1);
    }
}
