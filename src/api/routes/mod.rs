//! API routes module

pub mod chat;
pub mod profile;

use std::sync::Arc;

use axum::Router;

use crate::api::state::AppState;

type SharedState = Arc<AppState>;

/// Create the combined API router
pub fn router() -> Router<SharedState> {
    Router::new()
        // Profile intake routes
        .nest("/profile", profile::router())
        // Chat routes
        .nest("/chat", chat::router())
}
