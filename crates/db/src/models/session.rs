//! Refresh-token session model and DTOs.

use jotter_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A session row from the `account_sessions` table.
#[derive(Debug, Clone, FromRow)]
pub struct AccountSession {
    pub id: DbId,
    pub account_id: DbId,
    pub refresh_token_hash: String,
    pub expires_at: Timestamp,
    pub is_revoked: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new session.
pub struct CreateSession {
    pub account_id: DbId,
    pub refresh_token_hash: String,
    pub expires_at: Timestamp,
}
