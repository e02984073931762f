//! Pagination window types shared between the service and repositories.

use crate::domain::{DomainError, DomainResult};

/// Raw pagination arguments as they arrive from the API boundary.
///
/// Kept signed on purpose: negative values must reach validation and fail
/// with `InvalidArgument` instead of being clamped or mangled by parsing.
#[derive(Debug, Clone, Copy)]
pub struct PageRequest {
    pub page: i64,
    pub size: i64,
}

impl PageRequest {
    pub fn new(page: i64, size: i64) -> Self {
        Self { page, size }
    }

    /// Reject negative page/size before any storage work happens.
    pub fn validate(self) -> DomainResult<PageWindow> {
        if self.page < 0 {
            return Err(DomainError::InvalidArgument(format!(
                "page must be >= 0, got {}",
                self.page
            )));
        }
        if self.size < 0 {
            return Err(DomainError::InvalidArgument(format!(
                "size must be >= 0, got {}",
                self.size
            )));
        }
        Ok(PageWindow {
            page: self.page as u64,
            size: self.size as u64,
        })
    }
}

/// Validated, 0-indexed scan window handed to repositories.
#[derive(Debug, Clone, Copy)]
pub struct PageWindow {
    pub page: u64,
    pub size: u64,
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DomainError;

    #[test]
    fn valid_request_passes_through() {
        let window = PageRequest::new(2, 10).validate().unwrap();
        assert_eq!(window.page, 2);
        assert_eq!(window.size, 10);
    }

    #[test]
    fn zero_is_valid() {
        let window = PageRequest::new(0, 0).validate().unwrap();
        assert_eq!(window.page, 0);
        assert_eq!(window.size, 0);
    }

    #[test]
    fn negative_page_is_rejected() {
        let err = PageRequest::new(-1, 0).validate().unwrap_err();
        assert!(matches!(err, DomainError::InvalidArgument(_)));
    }

    #[test]
    fn negative_size_is_rejected() {
        let err = PageRequest::new(0, -1).validate().unwrap_err();
        assert!(matches!(err, DomainError::InvalidArgument(_)));
    }
}
