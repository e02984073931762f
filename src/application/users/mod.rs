//! Users module — create, lookup and enriched listing.

pub mod service;

pub use service::UserService;
