//! HTTP quote provider client

use async_trait::async_trait;
use serde::Deserialize;

use crate::domain::{DomainError, DomainResult, QuoteProvider};

/// Wire shape expected from the quote endpoint.
#[derive(Debug, Deserialize)]
struct QuoteResponse {
    quote: String,
}

/// Fetches a quote from a configured HTTP endpoint on every call.
///
/// Failures map to `DomainError::QuoteProvider` and propagate; there is no
/// fallback quote and no retry here.
pub struct HttpQuoteProvider {
    client: reqwest::Client,
    url: String,
}

impl HttpQuoteProvider {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.into(),
        }
    }
}

#[async_trait]
impl QuoteProvider for HttpQuoteProvider {
    async fn get_quote(&self) -> DomainResult<String> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| DomainError::QuoteProvider(format!("request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(DomainError::QuoteProvider(format!(
                "HTTP {}",
                response.status()
            )));
        }

        let body: QuoteResponse = response
            .json()
            .await
            .map_err(|e| DomainError::QuoteProvider(format!("invalid response body: {}", e)))?;

        Ok(body.quote)
    }
}
