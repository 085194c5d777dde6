#![allow(dead_code)]

//! Shared test fixtures: in-memory repository fakes and state wiring.
//!
//! The repository traits make the store substitutable, so handler tests
//! run against in-memory fakes that mirror the Postgres query semantics
//! (unique short codes, ownership-scoped mutations, soft deletes).

use async_trait::async_trait;
use axum::http::StatusCode;
use axum_test::TestServer;
use chrono::Utc;
use serde_json::json;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

use linksnip::application::services::{AuthService, LinkService, UserService};
use linksnip::domain::entities::{Link, NewLink, NewUser, User};
use linksnip::domain::repositories::{LinkRepository, UserRepository};
use linksnip::error::AppError;
use linksnip::routes::api_router;
use linksnip::state::AppState;

pub const TEST_BASE_URL: &str = "http://sho.rt";
pub const TEST_CODE_LENGTH: usize = 6;

/// In-memory user store backing handler tests.
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: Mutex<Vec<User>>,
}

impl InMemoryUserRepository {
    pub fn user_count(&self) -> usize {
        self.users.lock().unwrap().len()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn insert(&self, new_user: NewUser) -> Result<User, AppError> {
        let mut users = self.users.lock().unwrap();

        if users.iter().any(|u| u.email == new_user.email) {
            return Err(AppError::conflict(
                "Email already registered",
                json!({ "email": new_user.email }),
            ));
        }

        let now = Utc::now();
        let user = User {
            id: Uuid::new_v4(),
            email: new_user.email,
            password_hash: new_user.password_hash,
            name: new_user.name,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        };
        users.push(user.clone());

        Ok(user)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|u| u.email == email).cloned())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, AppError> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|u| u.id == id).cloned())
    }
}

/// In-memory link store with the same semantics as the Postgres queries.
#[derive(Default)]
pub struct InMemoryLinkRepository {
    links: Mutex<Vec<Link>>,
}

impl InMemoryLinkRepository {
    /// Returns a snapshot of a row by id, soft-deleted rows included.
    pub fn get(&self, id: Uuid) -> Option<Link> {
        let links = self.links.lock().unwrap();
        links.iter().find(|l| l.id == id).cloned()
    }

    /// Returns the row id for a short code.
    pub fn find_id_by_code(&self, code: &str) -> Option<Uuid> {
        let links = self.links.lock().unwrap();
        links.iter().find(|l| l.short_code == code).map(|l| l.id)
    }

    /// Returns the click counter for a code, or zero when absent.
    pub fn clicks(&self, code: &str) -> i64 {
        let links = self.links.lock().unwrap();
        links
            .iter()
            .find(|l| l.short_code == code)
            .map(|l| l.clicks)
            .unwrap_or(0)
    }
}

#[async_trait]
impl LinkRepository for InMemoryLinkRepository {
    async fn insert(&self, new_link: NewLink) -> Result<Link, AppError> {
        let mut links = self.links.lock().unwrap();

        // The code column is unique across live and deleted rows.
        if links.iter().any(|l| l.short_code == new_link.short_code) {
            return Err(AppError::conflict(
                "Short code already exists",
                json!({ "code": new_link.short_code }),
            ));
        }

        let now = Utc::now();
        let link = Link {
            id: Uuid::new_v4(),
            original_url: new_link.original_url,
            short_code: new_link.short_code,
            clicks: 0,
            user_id: new_link.user_id,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        };
        links.push(link.clone());

        Ok(link)
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, AppError> {
        let links = self.links.lock().unwrap();
        Ok(links.iter().find(|l| l.short_code == code).cloned())
    }

    async fn list_by_owner(&self, owner_id: Uuid) -> Result<Vec<Link>, AppError> {
        let links = self.links.lock().unwrap();

        let mut owned: Vec<Link> = links
            .iter()
            .filter(|l| l.user_id == Some(owner_id) && !l.is_deleted())
            .cloned()
            .collect();
        owned.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        Ok(owned)
    }

    async fn increment_clicks(&self, id: Uuid) -> Result<u64, AppError> {
        let mut links = self.links.lock().unwrap();

        match links.iter_mut().find(|l| l.id == id) {
            Some(link) => {
                link.clicks += 1;
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn update_original_url(
        &self,
        id: Uuid,
        owner_id: Uuid,
        original_url: &str,
    ) -> Result<Option<Link>, AppError> {
        let mut links = self.links.lock().unwrap();

        match links
            .iter_mut()
            .find(|l| l.id == id && l.user_id == Some(owner_id) && !l.is_deleted())
        {
            Some(link) => {
                link.original_url = original_url.to_string();
                link.updated_at = Utc::now();
                Ok(Some(link.clone()))
            }
            None => Ok(None),
        }
    }

    async fn soft_delete(&self, id: Uuid, owner_id: Uuid) -> Result<bool, AppError> {
        let mut links = self.links.lock().unwrap();

        match links
            .iter_mut()
            .find(|l| l.id == id && l.user_id == Some(owner_id) && !l.is_deleted())
        {
            Some(link) => {
                let now = Utc::now();
                link.deleted_at = Some(now);
                link.updated_at = now;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

/// Builds an [`AppState`] wired to fresh in-memory stores, returning the
/// store handles for direct inspection.
pub fn test_state() -> (
    AppState,
    Arc<InMemoryUserRepository>,
    Arc<InMemoryLinkRepository>,
) {
    let user_repo = Arc::new(InMemoryUserRepository::default());
    let link_repo = Arc::new(InMemoryLinkRepository::default());

    let user_service = Arc::new(UserService::new(user_repo.clone()));
    let auth_service = Arc::new(AuthService::new(
        user_service.clone(),
        "test-signing-secret".to_string(),
        24,
    ));
    let link_service = Arc::new(LinkService::new(
        link_repo.clone(),
        TEST_BASE_URL.to_string(),
        TEST_CODE_LENGTH,
    ));

    let state = AppState {
        link_service,
        auth_service,
        user_service,
    };

    (state, user_repo, link_repo)
}

pub fn test_server(state: AppState) -> TestServer {
    TestServer::new(api_router(state)).unwrap()
}

/// Registers an account and returns `(access_token, user_id)`.
pub async fn register(server: &TestServer, name: &str, email: &str, password: &str) -> (String, Uuid) {
    let response = server
        .post("/auth/register")
        .json(&json!({ "name": name, "email": email, "password": password }))
        .await;

    response.assert_status(StatusCode::CREATED);

    let body = response.json::<serde_json::Value>();
    let token = body["access_token"].as_str().unwrap().to_string();
    let user_id = body["user"]["id"].as_str().unwrap().parse().unwrap();

    (token, user_id)
}

/// Shortens a URL, optionally authenticated, returning the short code.
pub async fn create_link(server: &TestServer, url: &str, token: Option<&str>) -> String {
    let mut request = server.post("/urls").json(&json!({ "originalUrl": url }));

    if let Some(token) = token {
        request = request.authorization_bearer(token);
    }

    let response = request.await;
    response.assert_status(StatusCode::CREATED);

    let body = response.json::<serde_json::Value>();
    body["shortCode"].as_str().unwrap().to_string()
}
