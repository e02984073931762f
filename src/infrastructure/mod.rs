//! Infrastructure layer: storage backends and outbound clients.

pub mod database;
pub mod quotes;
pub mod storage;

pub use database::{init_database, DatabaseConfig};
