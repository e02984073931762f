//! # User Quotes Service
//!
//! Small user-record service: persist users, retrieve them individually or
//! in filtered, paginated batches, and decorate every record read with a
//! quote fetched from an external provider at response time.
//!
//! ## Architecture
//!
//! The project follows Clean Architecture principles:
//!
//! - **domain**: Core entities, the generic repository trait and ports
//! - **application**: Business logic (user service with quote enrichment)
//! - **infrastructure**: External concerns (database, in-memory storage, quote clients)
//! - **interfaces**: REST API with Swagger documentation
//! - **shared**: Pagination types and graceful shutdown

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;
pub mod shared;

pub use config::{default_config_path, AppConfig};

// Re-export database types for easy access
pub use infrastructure::{init_database, DatabaseConfig};

// Re-export API router
pub use interfaces::http::create_api_router;
