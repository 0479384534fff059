//! Handlers for the `/categories` resource.
//!
//! Every store call is scoped to the caller, so another account's category
//! is indistinguishable from a missing one (404).

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use jotter_core::error::CoreError;
use jotter_core::types::DbId;
use jotter_db::models::category::{CategoryInput, CategorySummary};
use jotter_db::repositories::CategoryRepo;
use jotter_db::scope::OwnerScope;
use sqlx::PgPool;

use crate::error::{AppError, AppResult};
use crate::extract::{JsonBody, PathParams};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Category",
        id,
    })
}

/// GET /api/categories/
pub async fn list_categories(
    user: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<CategorySummary>>> {
    let categories = CategoryRepo::list(&state.pool, user.scope()).await?;
    Ok(Json(categories))
}

/// POST /api/categories/
///
/// The new category always belongs to the caller.
pub async fn create_category(
    user: AuthUser,
    State(state): State<AppState>,
    JsonBody(input): JsonBody<CategoryInput>,
) -> AppResult<(StatusCode, Json<CategorySummary>)> {
    let input = input.into_create()?;
    let category = CategoryRepo::create(&state.pool, user.scope(), &input).await?;

    tracing::info!(
        category_id = category.id,
        account_id = user.account_id(),
        "Category created"
    );

    Ok((StatusCode::CREATED, Json(CategorySummary::new_empty(category))))
}

/// GET /api/categories/{id}/
pub async fn get_category(
    user: AuthUser,
    State(state): State<AppState>,
    PathParams(id): PathParams<DbId>,
) -> AppResult<Json<CategorySummary>> {
    let category = CategoryRepo::find(&state.pool, user.scope(), id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(category))
}

/// PUT /api/categories/{id}/
///
/// Full replacement: both `name` and `color` are required.
pub async fn replace_category(
    user: AuthUser,
    State(state): State<AppState>,
    PathParams(id): PathParams<DbId>,
    JsonBody(input): JsonBody<CategoryInput>,
) -> AppResult<Json<CategorySummary>> {
    ensure_owned(&state.pool, &user, id).await?;
    let input = CategoryInput::from(input.into_create()?);
    apply_update(&state.pool, &user, id, &input).await.map(Json)
}

/// PATCH /api/categories/{id}/
pub async fn update_category(
    user: AuthUser,
    State(state): State<AppState>,
    PathParams(id): PathParams<DbId>,
    JsonBody(input): JsonBody<CategoryInput>,
) -> AppResult<Json<CategorySummary>> {
    ensure_owned(&state.pool, &user, id).await?;
    let input = input.validated()?;
    apply_update(&state.pool, &user, id, &input).await.map(Json)
}

/// DELETE /api/categories/{id}/
///
/// Notes in the category survive with no category.
pub async fn delete_category(
    user: AuthUser,
    State(state): State<AppState>,
    PathParams(id): PathParams<DbId>,
) -> AppResult<StatusCode> {
    if !CategoryRepo::delete(&state.pool, user.scope(), id).await? {
        return Err(not_found(id));
    }

    tracing::info!(category_id = id, account_id = user.account_id(), "Category deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// 404 unless the caller owns category `id`. Runs before body validation.
async fn ensure_owned(pool: &PgPool, user: &AuthUser, id: DbId) -> AppResult<()> {
    if !CategoryRepo::exists(pool, user.scope(), id).await? {
        return Err(not_found(id));
    }
    Ok(())
}

/// Apply a validated update and re-read the category with its note count.
async fn apply_update(
    pool: &PgPool,
    user: &AuthUser,
    id: DbId,
    input: &CategoryInput,
) -> AppResult<CategorySummary> {
    let scope: OwnerScope = user.scope();
    CategoryRepo::update(pool, scope, id, input)
        .await?
        .ok_or_else(|| not_found(id))?;

    tracing::info!(category_id = id, account_id = user.account_id(), "Category updated");

    CategoryRepo::find(pool, scope, id)
        .await?
        .ok_or_else(|| not_found(id))
}
