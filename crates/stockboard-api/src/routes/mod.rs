//! Route definitions
//!
//! Comment routes under `/api/controller`, account routes under `/api/account`.

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::{account, comments, health};
use crate::state::AppState;

/// Create the main API router (health routes are mounted separately)
pub fn create_router() -> Router<AppState> {
    Router::new()
        .nest("/api/controller", comment_routes())
        .nest("/api/account", account_routes())
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// Comment routes
///
/// The single path segment is a comment id for GET/PUT/DELETE and a ticker
/// symbol for POST; the extractors type it per handler.
fn comment_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(comments::list_comments))
        .route(
            "/:id",
            get(comments::get_comment)
                .put(comments::update_comment)
                .delete(comments::delete_comment)
                .post(comments::create_comment),
        )
}

/// Account routes
fn account_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(account::register))
        .route("/login", post(account::login))
        .route("/refresh", post(account::refresh))
}
