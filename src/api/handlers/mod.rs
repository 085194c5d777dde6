//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod auth;
pub mod health;
pub mod links;
pub mod redirect;
pub mod users;

pub use auth::{login_handler, register_handler};
pub use health::health_handler;
pub use links::{
    create_link_handler, delete_link_handler, list_links_handler, update_link_handler,
};
pub use redirect::redirect_handler;
pub use users::get_user_handler;
