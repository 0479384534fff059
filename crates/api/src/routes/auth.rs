//! Route definitions for the `/auth` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::auth;
use crate::state::AppState;

/// Routes for the `/auth` resource, relative to `/api`.
///
/// ```text
/// POST /auth/register/  -> register
/// POST /auth/login/     -> login
/// POST /auth/refresh/   -> refresh
/// POST /auth/logout/    -> logout (requires auth)
/// GET  /auth/user/      -> current_user (requires auth)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/auth/register/", post(auth::register))
        .route("/auth/login/", post(auth::login))
        .route("/auth/refresh/", post(auth::refresh))
        .route("/auth/logout/", post(auth::logout))
        .route("/auth/user/", get(auth::current_user))
}
