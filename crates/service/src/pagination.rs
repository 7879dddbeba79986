//! Page-number pagination.

use serde::Serialize;

use crate::ValidationError;

/// Page used when the caller gives none.
pub const DEFAULT_PAGE: i64 = 1;

/// Page size used when the caller gives none.
pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// Validated pagination parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    page: i64,
    page_size: i64,
}

impl Pagination {
    /// Build pagination from optional caller input.
    ///
    /// Out-of-range values are rejected rather than clamped, so a zero page
    /// size can never reach the page-count division.
    pub fn new(page: Option<i64>, page_size: Option<i64>) -> Result<Self, ValidationError> {
        let page = page.unwrap_or(DEFAULT_PAGE);
        let page_size = page_size.unwrap_or(DEFAULT_PAGE_SIZE);

        if page < 1 {
            return Err(ValidationError::OutOfRange {
                field: "page",
                reason: "must be at least 1",
            });
        }
        if page_size < 1 {
            return Err(ValidationError::OutOfRange {
                field: "page_size",
                reason: "must be at least 1",
            });
        }

        Ok(Self { page, page_size })
    }

    /// 1-indexed page number.
    pub fn page(&self) -> i64 {
        self.page
    }

    pub fn page_size(&self) -> i64 {
        self.page_size
    }

    /// SQL OFFSET for this page.
    pub fn offset(&self) -> i64 {
        (self.page - 1).saturating_mul(self.page_size)
    }

    /// Number of pages needed to hold `total_records`.
    pub fn total_pages(&self, total_records: i64) -> i64 {
        total_records / self.page_size + i64::from(total_records % self.page_size != 0)
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// One page of results plus totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page<T> {
    pub data: Vec<T>,
    pub total_records: i64,
    pub total_pages: i64,
    pub current_page: i64,
    pub page_size: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_when_absent() {
        let p = Pagination::new(None, None).unwrap();
        assert_eq!(p, Pagination::default());
        assert_eq!((p.page(), p.page_size()), (1, 10));
    }

    #[test]
    fn offset_calculation() {
        assert_eq!(Pagination::new(Some(1), Some(10)).unwrap().offset(), 0);
        assert_eq!(Pagination::new(Some(2), Some(10)).unwrap().offset(), 10);
        assert_eq!(Pagination::new(Some(3), Some(25)).unwrap().offset(), 50);
    }

    #[test]
    fn total_pages_rounds_up() {
        let p = Pagination::new(Some(1), Some(10)).unwrap();
        assert_eq!(p.total_pages(25), 3);
        assert_eq!(p.total_pages(20), 2);
        assert_eq!(p.total_pages(1), 1);
        assert_eq!(p.total_pages(0), 0);
    }

    #[test]
    fn rejects_zero_and_negative_values() {
        assert!(matches!(
            Pagination::new(Some(1), Some(0)),
            Err(ValidationError::OutOfRange { field: "page_size", .. })
        ));
        assert!(matches!(
            Pagination::new(Some(1), Some(-5)),
            Err(ValidationError::OutOfRange { field: "page_size", .. })
        ));
        assert!(matches!(
            Pagination::new(Some(0), None),
            Err(ValidationError::OutOfRange { field: "page", .. })
        ));
    }

    #[test]
    fn large_page_sizes_are_accepted() {
        let p = Pagination::new(Some(2), Some(200)).unwrap();
        assert_eq!(p.page_size(), 200);
        assert_eq!(p.offset(), 200);
        assert_eq!(p.total_pages(450), 3);
    }
}
