//! Repository for the `notes` table.

use jotter_core::types::DbId;
use sqlx::PgPool;

use crate::models::note::{Note, NoteDetail, NoteInput};
use crate::scope::{OwnerScope, OWNED};

/// Column list for notes queries.
const COLUMNS: &str = "id, account_id, category_id, title, content, created_at, updated_at";

/// Read-shape projection: note columns plus the category's name and color.
const DETAIL_SELECT: &str = "SELECT n.id, n.title, n.content, n.category_id AS category, \
    c.name AS category_name, c.color AS category_color, n.created_at, n.updated_at \
    FROM notes n LEFT JOIN categories c ON c.id = n.category_id";

/// Provides owner-scoped CRUD operations for notes.
pub struct NoteRepo;

impl NoteRepo {
    /// List the scoped account's notes, most recently updated first.
    ///
    /// `category` narrows the list to notes in that exact category; it is
    /// applied after the ownership filter.
    pub async fn list(
        pool: &PgPool,
        scope: OwnerScope,
        category: Option<DbId>,
    ) -> Result<Vec<NoteDetail>, sqlx::Error> {
        let query = format!(
            "{DETAIL_SELECT}
             WHERE n.{OWNED} AND ($2::BIGINT IS NULL OR n.category_id = $2)
             ORDER BY n.updated_at DESC, n.id DESC"
        );
        sqlx::query_as::<_, NoteDetail>(&query)
            .bind(scope.account_id())
            .bind(category)
            .fetch_all(pool)
            .await
    }

    /// Find one of the scoped account's notes by ID, in read shape.
    pub async fn find(
        pool: &PgPool,
        scope: OwnerScope,
        id: DbId,
    ) -> Result<Option<NoteDetail>, sqlx::Error> {
        let query = format!("{DETAIL_SELECT} WHERE n.{OWNED} AND n.id = $2");
        sqlx::query_as::<_, NoteDetail>(&query)
            .bind(scope.account_id())
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Create a note owned by the scoped account in `category_id`.
    ///
    /// The `category` field of `input` is not consulted; the caller decides
    /// which category the note lands in.
    pub async fn create(
        pool: &PgPool,
        scope: OwnerScope,
        category_id: Option<DbId>,
        input: &NoteInput,
    ) -> Result<Note, sqlx::Error> {
        let query = format!(
            "INSERT INTO notes (account_id, category_id, title, content)
             VALUES ($1, $2, COALESCE($3, ''), COALESCE($4, ''))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Note>(&query)
            .bind(scope.account_id())
            .bind(category_id)
            .bind(input.title())
            .bind(input.content())
            .fetch_one(pool)
            .await
    }

    /// Update one of the scoped account's notes. Only supplied fields change.
    ///
    /// Returns `None` if no such note exists for this account.
    pub async fn update(
        pool: &PgPool,
        scope: OwnerScope,
        id: DbId,
        input: &NoteInput,
    ) -> Result<Option<Note>, sqlx::Error> {
        // Outer `Some` means the field was sent; the inner value may be null.
        let category_provided = input.category.is_some();
        let category_value = input.category.flatten();

        let query = format!(
            "UPDATE notes SET
                title = COALESCE($3, title),
                content = COALESCE($4, content),
                category_id = CASE WHEN $5 THEN $6 ELSE category_id END
             WHERE {OWNED} AND id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Note>(&query)
            .bind(scope.account_id())
            .bind(id)
            .bind(input.title())
            .bind(input.content())
            .bind(category_provided)
            .bind(category_value)
            .fetch_optional(pool)
            .await
    }

    /// Delete one of the scoped account's notes. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, scope: OwnerScope, id: DbId) -> Result<bool, sqlx::Error> {
        let query = format!("DELETE FROM notes WHERE {OWNED} AND id = $2");
        let result = sqlx::query(&query)
            .bind(scope.account_id())
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
