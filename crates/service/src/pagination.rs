//! Pagination parameters for listing endpoints.
//!
//! Clients send a 0-based `page` index; envelopes report it 1-based
//! (see [`crate::response::PagingMetadata`]).

use serde::Deserialize;

use crate::errors::ServiceError;
use crate::response::ErrorDetail;

pub const DEFAULT_PAGE_SIZE: u64 = 10;
pub const MAX_PAGE_SIZE: u64 = 100;

/// Pagination parameters
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
pub struct PageRequest {
    /// 0-based page index
    #[serde(default)]
    pub page: u64,
    /// items per page
    #[serde(default = "default_size")]
    pub size: u64,
}

fn default_size() -> u64 { DEFAULT_PAGE_SIZE }

impl PageRequest {
    pub fn new(page: u64, size: u64) -> Self { Self { page, size } }

    /// Size is echoed back to the client, so out-of-range values are rejected rather than clamped.
    pub fn validate(&self) -> Result<(), ServiceError> {
        if self.size == 0 || self.size > MAX_PAGE_SIZE {
            return Err(ServiceError::Validation(vec![ErrorDetail::invalid_field(
                "size",
                format!("size must be between 1 and {MAX_PAGE_SIZE}"),
            )]));
        }
        // SQL offsets are signed 64-bit.
        let in_range = self.page.checked_mul(self.size).is_some_and(|o| o <= i64::MAX as u64);
        if !in_range {
            return Err(ServiceError::Validation(vec![ErrorDetail::invalid_field(
                "page",
                "page is out of range for the requested size",
            )]));
        }
        Ok(())
    }

    /// Row offset of the first element of this page; call after [`PageRequest::validate`].
    pub fn offset(&self) -> u64 { self.page.saturating_mul(self.size) }
}

impl Default for PageRequest {
    fn default() -> Self { Self { page: 0, size: DEFAULT_PAGE_SIZE } }
}

#[cfg(test)]
mod tests {
    use super::PageRequest;

    #[test]
    fn zero_and_oversized_pages_are_rejected() {
        assert!(PageRequest::new(0, 0).validate().is_err());
        assert!(PageRequest::new(0, 101).validate().is_err());
        assert!(PageRequest::new(5, 100).validate().is_ok());
    }

    #[test]
    fn page_index_that_overflows_the_offset_is_rejected() {
        let err = PageRequest::new(u64::MAX / 2, 10).validate().unwrap_err();
        let crate::errors::ServiceError::Validation(details) = err else { panic!("expected Validation") };
        assert_eq!(details[0].field.as_deref(), Some("page"));
        assert!(PageRequest::new(i64::MAX as u64 / 10 + 1, 10).validate().is_err());
        assert!(PageRequest::new(i64::MAX as u64 / 10, 10).validate().is_ok());
    }

    #[test]
    fn offset_uses_zero_based_index() {
        assert_eq!(PageRequest::new(0, 20).offset(), 0);
        assert_eq!(PageRequest::new(3, 20).offset(), 60);
    }

    #[test]
    fn default_values_are_sane() {
        let d = PageRequest::default();
        assert_eq!(d.page, 0);
        assert_eq!(d.size, 10);
        let parsed: PageRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed, d);
    }
}
