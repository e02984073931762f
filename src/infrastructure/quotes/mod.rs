//! Quote provider implementations.

pub mod http;
pub mod static_provider;

pub use http::HttpQuoteProvider;
pub use static_provider::StaticQuoteProvider;
