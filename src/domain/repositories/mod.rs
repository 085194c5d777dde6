//! Repository trait definitions for the domain layer.
//!
//! Traits define the contract for data operations; concrete
//! implementations live in [`crate::infrastructure::persistence`], and
//! `mockall` mocks are generated for unit tests.

pub mod link_repository;
pub mod user_repository;

pub use link_repository::LinkRepository;
pub use user_repository::UserRepository;

#[cfg(test)]
pub use link_repository::MockLinkRepository;
#[cfg(test)]
pub use user_repository::MockUserRepository;
