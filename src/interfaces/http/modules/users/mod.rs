//! Users module — create, lookup and enriched listing over HTTP.

pub mod dto;
pub mod handlers;

pub use dto::*;
pub use handlers::*;
