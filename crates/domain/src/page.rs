//! Offset pagination over an ordered snapshot of records.

use serde::Serialize;
use utoipa::ToSchema;

/// Page size used when the caller gives none, or a non-positive one.
pub const DEFAULT_PAGE_SIZE: u64 = 100;

/// Largest page size a caller may request; bigger values are clamped.
pub const MAX_PAGE_SIZE: u64 = 1000;

/// A normalized `(page, size)` pair. `size` is always within
/// `1..=MAX_PAGE_SIZE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u64,
    size: u64,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 0,
            size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl PageRequest {
    /// Normalize raw query values.
    ///
    /// A missing or negative `page` becomes `0`. A missing or non-positive
    /// `size` becomes [`DEFAULT_PAGE_SIZE`], one above [`MAX_PAGE_SIZE`] is
    /// clamped to it.
    #[must_use]
    pub fn new(page: Option<i64>, size: Option<i64>) -> Self {
        let page = page.and_then(|p| u64::try_from(p).ok()).unwrap_or(0);
        let size = match size {
            Some(s) if s > 0 => s.unsigned_abs().min(MAX_PAGE_SIZE),
            _ => DEFAULT_PAGE_SIZE,
        };
        Self { page, size }
    }

    /// 0-based page index.
    #[must_use]
    pub fn page(self) -> u64 {
        self.page
    }

    #[must_use]
    pub fn size(self) -> u64 {
        self.size
    }

    /// Index of the first record on this page.
    #[must_use]
    pub fn offset(self) -> u64 {
        self.page.saturating_mul(self.size)
    }
}

/// One page of records plus the metadata clients use to navigate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub content: Vec<T>,
    pub last: bool,
    pub total_elements: u64,
    pub total_pages: u64,
    pub size: u64,
    pub number: u64,
    pub sort: Option<String>,
    pub number_of_elements: u64,
    pub first: bool,
}

impl<T> Page<T> {
    /// Slice `items` according to `request`.
    ///
    /// `sort` is echoed back untouched and has no effect on ordering.
    #[must_use]
    pub fn from_items(items: Vec<T>, request: PageRequest, sort: Option<String>) -> Self {
        let total = u64::try_from(items.len()).unwrap_or(u64::MAX);
        let start = request.offset();

        let content: Vec<T> = items
            .into_iter()
            .skip(usize::try_from(start).unwrap_or(usize::MAX))
            .take(usize::try_from(request.size).unwrap_or(usize::MAX))
            .collect();
        let number_of_elements = u64::try_from(content.len()).unwrap_or(u64::MAX);

        Self {
            content,
            last: start.saturating_add(number_of_elements) >= total,
            total_elements: total,
            total_pages: total.div_ceil(request.size),
            size: request.size,
            number: request.page,
            sort,
            number_of_elements,
            first: request.page == 0,
        }
    }
}
