//! Pagination arithmetic for the paged product listing.

use crate::errors::ServiceError;

/// Requested page window, 1-based.
///
/// Zero values are rejected rather than passed through to the store; negative
/// values never reach this type because the HTTP layer deserializes the query
/// into unsigned integers.
#[derive(Clone, Copy, Debug)]
pub struct PageRequest {
    /// 1-based page index
    pub page: u64,
    /// items per page
    pub page_size: u64,
}

impl PageRequest {
    pub fn validate(self) -> Result<Self, ServiceError> {
        if self.page == 0 {
            return Err(ServiceError::Validation("page must be >= 1".into()));
        }
        if self.page_size == 0 {
            return Err(ServiceError::Validation("pageSize must be >= 1".into()));
        }
        Ok(self)
    }

    /// Number of records to skip before the requested page.
    pub fn skip(&self) -> u64 {
        (self.page - 1).saturating_mul(self.page_size)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self { page: 1, page_size: 10 }
    }
}

/// Ceiling division: any remainder adds one more page. Empty store yields 0.
pub fn total_pages(total_count: u64, page_size: u64) -> u64 {
    total_count.div_ceil(page_size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_pages_rounds_up() {
        assert_eq!(total_pages(25, 10), 3);
        assert_eq!(total_pages(11, 10), 2);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(0, 10), 0);
        assert_eq!(total_pages(1, 10), 1);
    }

    #[test]
    fn skip_is_zero_based_window_start() {
        assert_eq!(PageRequest { page: 1, page_size: 10 }.skip(), 0);
        assert_eq!(PageRequest { page: 3, page_size: 10 }.skip(), 20);
    }

    #[test]
    fn rejects_zero_page_and_page_size() {
        assert!(PageRequest { page: 0, page_size: 10 }.validate().is_err());
        assert!(PageRequest { page: 1, page_size: 0 }.validate().is_err());
        assert!(PageRequest { page: 1, page_size: 1 }.validate().is_ok());
    }

    #[test]
    fn default_matches_api_defaults() {
        let d = PageRequest::default();
        assert_eq!(d.page, 1);
        assert_eq!(d.page_size, 10);
    }
}
