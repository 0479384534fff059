//! JWT-based authentication extractor for Axum handlers.

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use jotter_core::error::CoreError;
use jotter_core::types::DbId;
use jotter_db::models::account::Account;
use jotter_db::repositories::AccountRepo;
use jotter_db::scope::OwnerScope;

use crate::auth::jwt::validate_token;
use crate::error::AppError;
use crate::state::AppState;

/// Authenticated account extracted from a JWT Bearer token in the `Authorization` header.
///
/// The token must be valid and unexpired, and the account it names must
/// still exist and be active.
///
/// ```ignore
/// async fn my_handler(user: AuthUser) -> AppResult<Json<()>> {
///     tracing::info!(account_id = user.account_id(), "handling request");
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub account: Account,
}

impl AuthUser {
    pub fn account_id(&self) -> DbId {
        self.account.id
    }

    /// Ownership scope for every store call made on this account's behalf.
    pub fn scope(&self) -> OwnerScope {
        OwnerScope::new(self.account.id)
    }
}

fn unauthorized(message: &str) -> AppError {
    AppError::Core(CoreError::Unauthorized(message.into()))
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| unauthorized("Authentication credentials were not provided."))?;

        let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
            unauthorized("Invalid Authorization format. Expected: Bearer <token>")
        })?;

        let claims = validate_token(token, &state.config.jwt)
            .map_err(|_| unauthorized("Invalid or expired token"))?;

        let account = AccountRepo::find_by_id(&state.pool, claims.sub)
            .await?
            .filter(|account| account.is_active)
            .ok_or_else(|| unauthorized("Account not found or inactive"))?;

        Ok(AuthUser { account })
    }
}
