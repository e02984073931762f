//! Application layer: use-case orchestration on top of the domain traits.

pub mod users;

pub use users::UserService;
