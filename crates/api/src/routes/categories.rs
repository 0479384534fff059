//! Route definitions for the `/categories` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::categories;
use crate::state::AppState;

/// Routes for the `/categories` resource, relative to `/api`.
///
/// ```text
/// GET, POST                /categories/       -> list, create
/// GET, PUT, PATCH, DELETE  /categories/{id}/  -> get, replace, update, delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/categories/",
            get(categories::list_categories).post(categories::create_category),
        )
        .route(
            "/categories/{id}/",
            get(categories::get_category)
                .put(categories::replace_category)
                .patch(categories::update_category)
                .delete(categories::delete_category),
        )
}
