//! Handlers for the `/notes` resource.
//!
//! Writes accept the `{title, content, category}` shape; every response is
//! re-read through the joined read shape so it carries the category's name
//! and color.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use jotter_core::error::CoreError;
use jotter_core::types::DbId;
use jotter_db::models::note::{NoteDetail, NoteInput, NoteListParams};
use jotter_db::repositories::{CategoryRepo, NoteRepo};
use sqlx::PgPool;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::extract::{JsonBody, PathParams, QueryParams};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "Note", id })
}

/// GET /api/notes/
///
/// Optional `?category={id}` narrows the caller's notes to one category.
pub async fn list_notes(
    user: AuthUser,
    State(state): State<AppState>,
    QueryParams(params): QueryParams<NoteListParams>,
) -> AppResult<Json<Vec<NoteDetail>>> {
    let notes = NoteRepo::list(&state.pool, user.scope(), params.category).await?;
    Ok(Json(notes))
}

/// POST /api/notes/
///
/// Any `category` in the body is ignored: new notes land in the caller's
/// earliest-created category, or in none if the caller has no categories.
pub async fn create_note(
    user: AuthUser,
    State(state): State<AppState>,
    JsonBody(input): JsonBody<NoteInput>,
) -> AppResult<(StatusCode, Json<NoteDetail>)> {
    input.validate().map_err(CoreError::InvalidFields)?;

    let scope = user.scope();
    let category_id = CategoryRepo::first(&state.pool, scope)
        .await?
        .map(|category| category.id);
    let note = NoteRepo::create(&state.pool, scope, category_id, &input).await?;

    tracing::info!(
        note_id = note.id,
        account_id = user.account_id(),
        category_id = ?note.category_id,
        "Note created"
    );

    let detail = NoteRepo::find(&state.pool, scope, note.id)
        .await?
        .ok_or_else(|| not_found(note.id))?;
    Ok((StatusCode::CREATED, Json(detail)))
}

/// GET /api/notes/{id}/
pub async fn get_note(
    user: AuthUser,
    State(state): State<AppState>,
    PathParams(id): PathParams<DbId>,
) -> AppResult<Json<NoteDetail>> {
    let note = NoteRepo::find(&state.pool, user.scope(), id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(note))
}

/// PUT /api/notes/{id}/ and PATCH /api/notes/{id}/
///
/// Every field is optional on both verbs; absent fields keep their value.
/// The note is resolved before the body is checked, so another account's
/// note is a 404 whatever the payload.
pub async fn update_note(
    user: AuthUser,
    State(state): State<AppState>,
    PathParams(id): PathParams<DbId>,
    JsonBody(input): JsonBody<NoteInput>,
) -> AppResult<Json<NoteDetail>> {
    NoteRepo::find(&state.pool, user.scope(), id)
        .await?
        .ok_or_else(|| not_found(id))?;

    input.validate().map_err(CoreError::InvalidFields)?;
    apply_update(&state.pool, &user, id, &input).await.map(Json)
}

/// DELETE /api/notes/{id}/
pub async fn delete_note(
    user: AuthUser,
    State(state): State<AppState>,
    PathParams(id): PathParams<DbId>,
) -> AppResult<StatusCode> {
    if !NoteRepo::delete(&state.pool, user.scope(), id).await? {
        return Err(not_found(id));
    }

    tracing::info!(note_id = id, account_id = user.account_id(), "Note deleted");
    Ok(StatusCode::NO_CONTENT)
}

async fn apply_update(
    pool: &PgPool,
    user: &AuthUser,
    id: DbId,
    input: &NoteInput,
) -> AppResult<NoteDetail> {
    let scope = user.scope();

    if let Some(Some(category_id)) = input.category {
        if !CategoryRepo::exists(pool, scope, category_id).await? {
            return Err(CoreError::field(
                "category",
                format!("Invalid pk \"{category_id}\" - object does not exist."),
            )
            .into());
        }
    }

    NoteRepo::update(pool, scope, id, input)
        .await?
        .ok_or_else(|| not_found(id))?;

    tracing::info!(note_id = id, account_id = user.account_id(), "Note updated");

    NoteRepo::find(pool, scope, id)
        .await?
        .ok_or_else(|| not_found(id))
}
