//! Account entity model and DTOs.

use jotter_core::accounts::normalize_email;
use jotter_core::error::CoreError;
use jotter_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// Full account row from the `accounts` table.
///
/// Contains the password hash -- NEVER serialize this to API responses directly.
/// Use [`AccountResponse`] for external-facing output.
#[derive(Debug, Clone, FromRow)]
pub struct Account {
    pub id: DbId,
    pub email: String,
    pub password_hash: String,
    pub is_active: bool,
    pub is_staff: bool,
    pub is_superuser: bool,
    pub last_login_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Safe account summary for API responses (no password hash).
#[derive(Debug, Clone, Serialize)]
pub struct AccountResponse {
    pub id: DbId,
    pub email: String,
    pub is_staff: bool,
    pub created_at: Timestamp,
}

impl From<&Account> for AccountResponse {
    fn from(account: &Account) -> Self {
        Self {
            id: account.id,
            email: account.email.clone(),
            is_staff: account.is_staff,
            created_at: account.created_at,
        }
    }
}

/// DTO for creating a new account.
///
/// Build through [`CreateAccount::new`], which normalizes the email and
/// rejects a blank one.
#[derive(Debug)]
pub struct CreateAccount {
    pub email: String,
    pub password_hash: String,
}

impl CreateAccount {
    pub fn new(email: &str, password_hash: String) -> Result<Self, CoreError> {
        Ok(Self {
            email: normalize_email(email).map_err(|e| CoreError::from_field("email", e))?,
            password_hash,
        })
    }
}
