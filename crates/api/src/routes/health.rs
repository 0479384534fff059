use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

/// GET /health
///
/// 200 when the database answers; otherwise 503 with the usual
/// `{error, code}` body so load balancers and clients parse one shape.
async fn health(State(state): State<AppState>) -> AppResult<Json<HealthResponse>> {
    jotter_db::health_check(&state.pool).await.map_err(|e| {
        tracing::warn!(error = %e, "Health check could not reach the database");
        AppError::Unavailable("Database is unreachable".into())
    })?;

    Ok(Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    }))
}

/// Mounted at the root, outside `/api`.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}
