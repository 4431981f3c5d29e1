//! Page-number pagination for order listings.

use serde::Serialize;

/// Page size used when the client does not ask for one.
pub const DEFAULT_PAGE_SIZE: i64 = 5;

/// Largest page size a client may request.
pub const MAX_PAGE_SIZE: i64 = 80;

/// A clamped `(page, page_size)` pair. Pages are 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: i64,
    pub page_size: i64,
}

impl PageRequest {
    /// Clamp raw query values: `page` to at least 1, `page_size` to
    /// `1..=MAX_PAGE_SIZE` with [`DEFAULT_PAGE_SIZE`] when absent.
    pub fn new(page: Option<i64>, page_size: Option<i64>) -> Self {
        Self {
            page: page.unwrap_or(1).max(1),
            page_size: page_size
                .unwrap_or(DEFAULT_PAGE_SIZE)
                .clamp(1, MAX_PAGE_SIZE),
        }
    }

    /// SQL `LIMIT` value.
    pub fn limit(&self) -> i64 {
        self.page_size
    }

    /// SQL `OFFSET` value.
    pub fn offset(&self) -> i64 {
        (self.page - 1).saturating_mul(self.page_size)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(None, None)
    }
}

/// One page of results plus the totals a client needs to navigate.
#[derive(Debug, Clone, Serialize)]
pub struct Page<T: Serialize> {
    pub count: i64,
    pub page: i64,
    pub page_size: i64,
    pub num_pages: i64,
    pub results: Vec<T>,
}

impl<T: Serialize> Page<T> {
    pub fn new(request: PageRequest, count: i64, results: Vec<T>) -> Self {
        let num_pages = if count == 0 {
            0
        } else {
            (count + request.page_size - 1) / request.page_size
        };
        Self {
            count,
            page: request.page,
            page_size: request.page_size,
            num_pages,
            results,
        }
    }
}
