//! Application layer services implementing business logic.
//!
//! Services consume repository traits and provide a clean API for HTTP
//! handlers.
//!
//! - [`services::LinkService`] - Short link creation, lookup, mutation,
//!   and click accounting
//! - [`services::AuthService`] - Credential validation and bearer tokens
//! - [`services::UserService`] - Account registration and lookup

pub mod services;
