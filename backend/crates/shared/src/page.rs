//! Pagination
//!
//! [`PageRequest`] carries already-clamped paging parameters into the domain;
//! [`Page`] carries one slice of results plus totals back out.

use serde::Serialize;

/// Page number used when none (or an invalid one) is supplied
pub const DEFAULT_PAGE_NUMBER: u32 = 1;
/// Page size used when none (or a non-positive one) is supplied
pub const DEFAULT_PAGE_SIZE: u32 = 10;
/// Upper bound for the page size
pub const MAX_PAGE_SIZE: u32 = 100;

/// Validated paging parameters (`page_number >= 1`, `1 <= page_size <= 100`)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page_number: u32,
    page_size: u32,
}

impl PageRequest {
    /// Clamp raw client input into a valid request.
    ///
    /// * missing or `< 1` page number becomes `1`
    /// * missing or `< 1` page size becomes the default (`10`)
    /// * page size above `100` becomes `100`
    pub fn clamped(page_number: Option<i64>, page_size: Option<i64>) -> Self {
        let page_number = match page_number {
            Some(n) if n >= 1 => u32::try_from(n).unwrap_or(u32::MAX),
            _ => DEFAULT_PAGE_NUMBER,
        };
        let page_size = match page_size {
            Some(s) if s > i64::from(MAX_PAGE_SIZE) => MAX_PAGE_SIZE,
            Some(s) if s >= 1 => s as u32,
            _ => DEFAULT_PAGE_SIZE,
        };
        Self {
            page_number,
            page_size,
        }
    }

    pub const fn page_number(&self) -> u32 {
        self.page_number
    }

    pub const fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Number of rows to skip
    pub const fn offset(&self) -> u64 {
        (self.page_number as u64 - 1) * self.page_size as u64
    }

    /// Number of rows to take
    pub const fn limit(&self) -> u64 {
        self.page_size as u64
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page_number: DEFAULT_PAGE_NUMBER,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// One page of results
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page_number: u32,
    pub page_size: u32,
    pub total_count: u64,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, request: PageRequest, total_count: u64) -> Self {
        Self {
            items,
            page_number: request.page_number(),
            page_size: request.page_size(),
            total_count,
        }
    }

    /// `ceil(total_count / page_size)`; zero when there are no rows
    pub fn total_pages(&self) -> u64 {
        self.total_count.div_ceil(u64::from(self.page_size.max(1)))
    }

    /// Convert the items, keeping the paging metadata
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            page_number: self.page_number,
            page_size: self.page_size,
            total_count: self.total_count,
        }
    }
}

/// Wire shape of a page: `{data, currentPage, totalPages, pageSize, totalCount}`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PagedResponse<T> {
    pub data: Vec<T>,
    pub current_page: u32,
    pub total_pages: u64,
    pub page_size: u32,
    pub total_count: u64,
}

impl<T> From<Page<T>> for PagedResponse<T> {
    fn from(page: Page<T>) -> Self {
        let total_pages = page.total_pages();
        Self {
            data: page.items,
            current_page: page.page_number,
            total_pages,
            page_size: page.page_size,
            total_count: page.total_count,
        }
    }
}
