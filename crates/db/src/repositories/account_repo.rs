//! Repository for the `accounts` table.

use jotter_core::types::DbId;
use sqlx::{PgConnection, PgPool};

use crate::models::account::{Account, CreateAccount};
use crate::provisioning::provision_default_categories;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, email, password_hash, is_active, is_staff, is_superuser, \
                        last_login_at, created_at, updated_at";

/// Provides CRUD operations for accounts.
pub struct AccountRepo;

impl AccountRepo {
    /// Insert a regular account and provision its default categories.
    ///
    /// Both happen in one transaction: either the account exists with its
    /// three default categories, or neither was written.
    pub async fn create(pool: &PgPool, input: &CreateAccount) -> Result<Account, sqlx::Error> {
        Self::create_with_flags(pool, input, false).await
    }

    /// Insert a staff + superuser account and provision its default categories.
    pub async fn create_superuser(
        pool: &PgPool,
        input: &CreateAccount,
    ) -> Result<Account, sqlx::Error> {
        Self::create_with_flags(pool, input, true).await
    }

    async fn create_with_flags(
        pool: &PgPool,
        input: &CreateAccount,
        superuser: bool,
    ) -> Result<Account, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let account = Self::insert(&mut tx, input, superuser).await?;
        provision_default_categories(&mut tx, account.id).await?;

        tx.commit().await?;
        tracing::info!(account_id = account.id, superuser, "Account created");
        Ok(account)
    }

    async fn insert(
        conn: &mut PgConnection,
        input: &CreateAccount,
        superuser: bool,
    ) -> Result<Account, sqlx::Error> {
        let query = format!(
            "INSERT INTO accounts (email, password_hash, is_staff, is_superuser)
             VALUES ($1, $2, $3, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Account>(&query)
            .bind(&input.email)
            .bind(&input.password_hash)
            .bind(superuser)
            .fetch_one(conn)
            .await
    }

    /// Find an account by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Account>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM accounts WHERE id = $1");
        sqlx::query_as::<_, Account>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find an account by email. Callers pass an already-normalized address.
    pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<Account>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM accounts WHERE email = $1");
        sqlx::query_as::<_, Account>(&query)
            .bind(email)
            .fetch_optional(pool)
            .await
    }

    /// Persist the mutable flags of an existing account.
    ///
    /// This is a plain update: it never provisions categories. Returns
    /// `None` if the account no longer exists.
    pub async fn save(pool: &PgPool, account: &Account) -> Result<Option<Account>, sqlx::Error> {
        let query = format!(
            "UPDATE accounts SET
                is_active = $2,
                is_staff = $3,
                is_superuser = $4
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Account>(&query)
            .bind(account.id)
            .bind(account.is_active)
            .bind(account.is_staff)
            .bind(account.is_superuser)
            .fetch_optional(pool)
            .await
    }

    /// Record a successful login by setting `last_login_at` to now.
    pub async fn record_login(pool: &PgPool, id: DbId) -> Result<(), sqlx::Error> {
        sqlx::query("UPDATE accounts SET last_login_at = NOW() WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(())
    }

    /// Delete an account and, by cascade, its categories, notes, and sessions.
    ///
    /// Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM accounts WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
