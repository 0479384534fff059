//! Handlers for the `/auth` resource (register, login, refresh, logout, user).

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use jotter_core::accounts::{normalize_email, validate_password_strength, MIN_PASSWORD_LENGTH};
use jotter_core::error::{field_error, CoreError};
use jotter_db::models::account::{Account, AccountResponse, CreateAccount};
use jotter_db::models::session::CreateSession;
use jotter_db::repositories::{AccountRepo, SessionRepo};
use serde::{Deserialize, Serialize};
use validator::ValidationErrors;

use crate::auth::jwt::{generate_access_token, generate_refresh_token, hash_refresh_token};
use crate::auth::password::{hash_password, verify_password};
use crate::error::{AppError, AppResult};
use crate::extract::JsonBody;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Login failures share one message so the response never reveals whether
/// the email is registered.
const INVALID_CREDENTIALS: &str = "Invalid email or password";

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /auth/register/`.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Request body for `POST /auth/login/`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Request body for `POST /auth/refresh/`.
#[derive(Debug, Deserialize)]
pub struct RefreshRequest {
    pub refresh: String,
}

/// Access + refresh token pair.
#[derive(Debug, Serialize)]
pub struct TokenPair {
    pub access: String,
    pub refresh: String,
}

/// Response for register and login.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub tokens: TokenPair,
    pub user: AccountResponse,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/auth/register/
///
/// Create an account (which also receives the default categories) and sign
/// it in. All field problems are reported together.
pub async fn register(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<RegisterRequest>,
) -> AppResult<(StatusCode, Json<AuthResponse>)> {
    let mut errors = ValidationErrors::new();

    let email = match input.email.as_deref().map(normalize_email) {
        None => {
            errors.add("email", field_error("This field is required."));
            None
        }
        Some(Err(e)) => {
            errors.add("email", e);
            None
        }
        Some(Ok(email)) => Some(email),
    };

    match input.password.as_deref() {
        None => errors.add("password", field_error("This field is required.")),
        Some(password) => {
            if let Err(msg) = validate_password_strength(password, MIN_PASSWORD_LENGTH) {
                errors.add("password", field_error(msg));
            }
        }
    }

    if let Some(email) = email.as_deref() {
        if AccountRepo::find_by_email(&state.pool, email).await?.is_some() {
            errors.add(
                "email",
                field_error("An account with this email already exists."),
            );
        }
    }

    let (Some(email), Some(password)) = (email, input.password) else {
        return Err(CoreError::InvalidFields(errors).into());
    };
    if !errors.is_empty() {
        return Err(CoreError::InvalidFields(errors).into());
    }

    let password_hash = hash_password(&password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    // A concurrent registration for the same email surfaces as a violation
    // of uq_accounts_email, which maps to the same field error.
    let account = AccountRepo::create(&state.pool, &CreateAccount::new(&email, password_hash)?)
        .await?;

    let tokens = issue_tokens(&state, &account).await?;

    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            tokens,
            user: AccountResponse::from(&account),
        }),
    ))
}

/// POST /api/auth/login/
///
/// Authenticate with email + password. Unknown emails, wrong passwords, and
/// inactive accounts are indistinguishable to the caller.
pub async fn login(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<LoginRequest>,
) -> AppResult<Json<AuthResponse>> {
    let invalid = || AppError::Core(CoreError::Unauthorized(INVALID_CREDENTIALS.into()));

    let email = normalize_email(&input.email).map_err(|_| invalid())?;
    let account = AccountRepo::find_by_email(&state.pool, &email)
        .await?
        .ok_or_else(invalid)?;

    let password_valid = verify_password(&input.password, &account.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;

    if !password_valid || !account.is_active {
        tracing::info!(account_id = account.id, "Rejected login attempt");
        return Err(invalid());
    }

    AccountRepo::record_login(&state.pool, account.id).await?;
    let tokens = issue_tokens(&state, &account).await?;

    Ok(Json(AuthResponse {
        tokens,
        user: AccountResponse::from(&account),
    }))
}

/// POST /api/auth/refresh/
///
/// Exchange a valid refresh token for a new token pair. The presented
/// token is revoked, so each refresh token works once.
pub async fn refresh(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<RefreshRequest>,
) -> AppResult<Json<TokenPair>> {
    let invalid = || {
        AppError::Core(CoreError::Unauthorized(
            "Invalid or expired refresh token".into(),
        ))
    };

    let token_hash = hash_refresh_token(&input.refresh);
    let session = SessionRepo::find_by_refresh_token_hash(&state.pool, &token_hash)
        .await?
        .ok_or_else(invalid)?;

    if !SessionRepo::revoke(&state.pool, session.id).await? {
        return Err(invalid());
    }

    let account = AccountRepo::find_by_id(&state.pool, session.account_id)
        .await?
        .filter(|account| account.is_active)
        .ok_or_else(invalid)?;

    Ok(Json(issue_tokens(&state, &account).await?))
}

/// POST /api/auth/logout/
///
/// Revoke all refresh sessions for the authenticated account. Returns 204 No Content.
pub async fn logout(State(state): State<AppState>, user: AuthUser) -> AppResult<StatusCode> {
    let revoked = SessionRepo::revoke_all_for_account(&state.pool, user.account_id()).await?;
    tracing::info!(account_id = user.account_id(), revoked, "Account logged out");
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/auth/user/
pub async fn current_user(user: AuthUser) -> Json<AccountResponse> {
    Json(AccountResponse::from(&user.account))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Generate access + refresh tokens and persist the refresh session.
async fn issue_tokens(state: &AppState, account: &Account) -> AppResult<TokenPair> {
    let access = generate_access_token(account.id, &account.email, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    let (refresh, refresh_token_hash) = generate_refresh_token();

    SessionRepo::create(
        &state.pool,
        &CreateSession {
            account_id: account.id,
            refresh_token_hash,
            expires_at: Utc::now() + state.config.jwt.refresh_token_ttl(),
        },
    )
    .await?;

    Ok(TokenPair { access, refresh })
}
