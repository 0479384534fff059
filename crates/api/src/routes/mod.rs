pub mod auth;
pub mod categories;
pub mod health;
pub mod notes;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/register/                register (public)
/// /auth/login/                   login (public)
/// /auth/refresh/                 refresh (public)
/// /auth/logout/                  logout (requires auth)
/// /auth/user/                    current account (requires auth)
///
/// /categories/                   list, create
/// /categories/{id}/              get, replace, update, delete
///
/// /notes/                        list (?category=), create
/// /notes/{id}/                   get, update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(auth::router())
        .merge(categories::router())
        .merge(notes::router())
}
