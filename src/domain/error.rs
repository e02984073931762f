use thiserror::Error;

/// Domain-level error kinds.
///
/// A missing record is not an error: lookups return `Ok(None)` and the API
/// layer decides what a 404 looks like.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Already exists: {0}")]
    Conflict(String),

    #[error("Storage unavailable: {0}")]
    Storage(String),

    #[error("Quote provider failure: {0}")]
    QuoteProvider(String),
}

/// Result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;
