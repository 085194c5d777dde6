//! Shared application state injected into all handlers.

use std::sync::Arc;

use crate::application::services::{AuthService, LinkService, UserService};

/// Application state shared across request handlers.
///
/// Services are behind `Arc` so the state stays cheap to clone per
/// request; there is no other in-process shared mutable state beyond the
/// connection pool the repositories hold.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService>,
    pub auth_service: Arc<AuthService>,
    pub user_service: Arc<UserService>,
}
