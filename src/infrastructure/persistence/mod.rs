//! PostgreSQL repository implementations.
//!
//! Concrete implementations of the domain repository traits using SQLx
//! prepared statements with runtime parameter binding.

pub mod pg_link_repository;
pub mod pg_user_repository;

pub use pg_link_repository::PgLinkRepository;
pub use pg_user_repository::PgUserRepository;
