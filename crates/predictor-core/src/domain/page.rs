//! Pagination types.

use serde::Serialize;
use thiserror::Error;

/// Errors raised when constructing a [`PageRequest`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PageRequestError {
    #[error("limit must be greater than zero")]
    ZeroLimit,

    #[error("page numbers start at 1")]
    ZeroPage,

    #[error("offset {0} is out of range")]
    OffsetOutOfRange(u64),
}

/// A bounded window over a filtered result set.
///
/// `limit` is always positive and `offset` always fits a signed 64-bit
/// SQL integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    limit: u32,
    offset: u64,
}

impl PageRequest {
    /// Page size used when the caller does not ask for one.
    pub const DEFAULT_LIMIT: u32 = 10;

    pub fn new(limit: u32, offset: u64) -> Result<Self, PageRequestError> {
        if limit == 0 {
            return Err(PageRequestError::ZeroLimit);
        }
        if i64::try_from(offset).is_err() {
            return Err(PageRequestError::OffsetOutOfRange(offset));
        }
        Ok(Self { limit, offset })
    }

    /// Build a request from a 1-based page number.
    pub fn from_page_number(page: u64, limit: u32) -> Result<Self, PageRequestError> {
        if page == 0 {
            return Err(PageRequestError::ZeroPage);
        }
        let offset = (page - 1)
            .checked_mul(u64::from(limit))
            .ok_or(PageRequestError::OffsetOutOfRange(u64::MAX))?;
        Self::new(limit, offset)
    }

    pub const fn limit(&self) -> u32 {
        self.limit
    }

    pub const fn offset(&self) -> u64 {
        self.offset
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            limit: Self::DEFAULT_LIMIT,
            offset: 0,
        }
    }
}

/// One page of results plus the total number of matches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: u64,
}

impl<T> Page<T> {
    pub const fn new(items: Vec<T>, total: u64) -> Self {
        Self { items, total }
    }

    /// A page with no items and a total of zero.
    pub const fn empty() -> Self {
        Self {
            items: Vec::new(),
            total: 0,
        }
    }

    pub fn map<U, F: FnMut(T) -> U>(self, f: F) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_limit_rejected() {
        assert_eq!(PageRequest::new(0, 0), Err(PageRequestError::ZeroLimit));
    }

    #[test]
    fn test_offset_must_fit_sql_integer() {
        assert_eq!(
            PageRequest::new(10, u64::MAX),
            Err(PageRequestError::OffsetOutOfRange(u64::MAX))
        );
    }

    #[test]
    fn test_from_page_number() {
        let page = PageRequest::from_page_number(3, 10).unwrap();
        assert_eq!(page.offset(), 20);
        assert_eq!(page.limit(), 10);

        assert_eq!(
            PageRequest::from_page_number(0, 10),
            Err(PageRequestError::ZeroPage)
        );
    }

    #[test]
    fn test_default_request() {
        let page = PageRequest::default();
        assert_eq!(page.limit(), PageRequest::DEFAULT_LIMIT);
        assert_eq!(page.offset(), 0);
    }

    #[test]
    fn test_page_map_keeps_total() {
        let page = Page::new(vec![1, 2], 7).map(|v| v * 10);
        assert_eq!(page.items, vec![10, 20]);
        assert_eq!(page.total, 7);
    }
}
