//! Application state shared across all request handlers.
//!
//! `AppState` is built once during startup and cloned into every handler
//! through Axum's state extraction. Both fields are cheap to clone: the
//! database connection is a pool handle and the token service holds
//! reference-counted keys.

use sea_orm::DatabaseConnection;

use crate::server::service::auth::token::TokenService;

#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Issues and verifies the bearer tokens handed out at signup and login.
    pub tokens: TokenService,
}

impl AppState {
    pub fn new(db: DatabaseConnection, tokens: TokenService) -> Self {
        Self { db, tokens }
    }
}
