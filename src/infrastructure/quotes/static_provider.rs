//! Static quote provider
//!
//! Serves quotes round-robin from a configured list. Used when no provider
//! URL is configured, and as a deterministic double in tests.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::domain::{DomainError, DomainResult, QuoteProvider};

pub struct StaticQuoteProvider {
    quotes: Vec<String>,
    cursor: AtomicUsize,
}

impl StaticQuoteProvider {
    pub fn new(quotes: Vec<String>) -> Self {
        Self {
            quotes,
            cursor: AtomicUsize::new(0),
        }
    }

    /// Provider that always answers with the same quote.
    pub fn fixed(quote: impl Into<String>) -> Self {
        Self::new(vec![quote.into()])
    }
}

#[async_trait]
impl QuoteProvider for StaticQuoteProvider {
    async fn get_quote(&self) -> DomainResult<String> {
        if self.quotes.is_empty() {
            return Err(DomainError::QuoteProvider("no quotes configured".to_string()));
        }
        let idx = self.cursor.fetch_add(1, Ordering::Relaxed) % self.quotes.len();
        Ok(self.quotes[idx].clone())
    }
}

// ── Tests ──────────────────────────────────────────────────────
