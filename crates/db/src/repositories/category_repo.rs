//! Repository for the `categories` table.

use jotter_core::types::DbId;
use sqlx::PgPool;

use crate::models::category::{Category, CategoryInput, CategorySummary, CreateCategory};
use crate::scope::{OwnerScope, OWNED};

/// Column list for categories queries.
pub(crate) const COLUMNS: &str = "id, account_id, name, color, created_at, updated_at";

/// Summary columns, with the note count computed at read time.
const SUMMARY_COLUMNS: &str = "id, name, color, \
    (SELECT COUNT(*) FROM notes n WHERE n.category_id = categories.id) AS notes_count";

/// Provides owner-scoped CRUD operations for categories.
pub struct CategoryRepo;

impl CategoryRepo {
    /// List the scoped account's categories in creation order.
    pub async fn list(
        pool: &PgPool,
        scope: OwnerScope,
    ) -> Result<Vec<CategorySummary>, sqlx::Error> {
        let query = format!(
            "SELECT {SUMMARY_COLUMNS} FROM categories
             WHERE {OWNED}
             ORDER BY created_at ASC, id ASC"
        );
        sqlx::query_as::<_, CategorySummary>(&query)
            .bind(scope.account_id())
            .fetch_all(pool)
            .await
    }

    /// Find one of the scoped account's categories by ID.
    pub async fn find(
        pool: &PgPool,
        scope: OwnerScope,
        id: DbId,
    ) -> Result<Option<CategorySummary>, sqlx::Error> {
        let query = format!("SELECT {SUMMARY_COLUMNS} FROM categories WHERE {OWNED} AND id = $2");
        sqlx::query_as::<_, CategorySummary>(&query)
            .bind(scope.account_id())
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// The scoped account's earliest-created category, if any.
    pub async fn first(pool: &PgPool, scope: OwnerScope) -> Result<Option<Category>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM categories
             WHERE {OWNED}
             ORDER BY created_at ASC, id ASC
             LIMIT 1"
        );
        sqlx::query_as::<_, Category>(&query)
            .bind(scope.account_id())
            .fetch_optional(pool)
            .await
    }

    /// Whether `id` names one of the scoped account's categories.
    pub async fn exists(pool: &PgPool, scope: OwnerScope, id: DbId) -> Result<bool, sqlx::Error> {
        let query = format!("SELECT EXISTS (SELECT 1 FROM categories WHERE {OWNED} AND id = $2)");
        let (exists,): (bool,) = sqlx::query_as(&query)
            .bind(scope.account_id())
            .bind(id)
            .fetch_one(pool)
            .await?;
        Ok(exists)
    }

    /// Create a category owned by the scoped account, returning the created row.
    pub async fn create(
        pool: &PgPool,
        scope: OwnerScope,
        input: &CreateCategory,
    ) -> Result<Category, sqlx::Error> {
        let query = format!(
            "INSERT INTO categories (account_id, name, color)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Category>(&query)
            .bind(scope.account_id())
            .bind(&input.name)
            .bind(&input.color)
            .fetch_one(pool)
            .await
    }

    /// Update one of the scoped account's categories. Only supplied fields change.
    ///
    /// Returns `None` if no such category exists for this account.
    pub async fn update(
        pool: &PgPool,
        scope: OwnerScope,
        id: DbId,
        input: &CategoryInput,
    ) -> Result<Option<Category>, sqlx::Error> {
        let query = format!(
            "UPDATE categories SET
                name = COALESCE($3, name),
                color = COALESCE($4, color)
             WHERE {OWNED} AND id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Category>(&query)
            .bind(scope.account_id())
            .bind(id)
            .bind(&input.name)
            .bind(&input.color)
            .fetch_optional(pool)
            .await
    }

    /// Delete one of the scoped account's categories.
    ///
    /// Notes that referenced it keep existing with a null category.
    /// Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, scope: OwnerScope, id: DbId) -> Result<bool, sqlx::Error> {
        let query = format!("DELETE FROM categories WHERE {OWNED} AND id = $2");
        let result = sqlx::query(&query)
            .bind(scope.account_id())
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
