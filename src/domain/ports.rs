//! Outbound ports (capabilities the application layer depends on).

use async_trait::async_trait;

use crate::domain::error::DomainResult;

/// External quote source consulted when records are read.
///
/// The service depends on this interface only; concrete transports live in
/// `infrastructure::quotes` and test doubles substitute freely.
#[async_trait]
pub trait QuoteProvider: Send + Sync {
    async fn get_quote(&self) -> DomainResult<String>;
}
