//! Route definitions for the `/notes` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::notes;
use crate::state::AppState;

/// Routes for the `/notes` resource, relative to `/api`.
///
/// ```text
/// GET, POST                /notes/       -> list (?category=), create
/// GET, PUT, PATCH, DELETE  /notes/{id}/  -> get, update, update, delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/notes/", get(notes::list_notes).post(notes::create_note))
        .route(
            "/notes/{id}/",
            get(notes::get_note)
                .put(notes::update_note)
                .patch(notes::update_note)
                .delete(notes::delete_note),
        )
}
