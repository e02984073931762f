//! Database repository implementations
//!
//! SeaORM-backed implementation of the generic repository contract.

pub mod user_repository;

pub use user_repository::SeaOrmUserRepository;
