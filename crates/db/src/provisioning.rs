//! Default-category provisioning for new accounts.
//!
//! Runs as the last step of the account-creation transaction in
//! [`AccountRepo`](crate::repositories::AccountRepo). Nothing else calls it,
//! so re-saving an existing account never seeds categories again.

use jotter_core::notes::DEFAULT_CATEGORIES;
use jotter_core::types::DbId;
use sqlx::PgConnection;

use crate::models::category::Category;
use crate::repositories::category_repo::COLUMNS;

/// Insert the default categories for `account_id`, in order.
pub async fn provision_default_categories(
    conn: &mut PgConnection,
    account_id: DbId,
) -> Result<Vec<Category>, sqlx::Error> {
    let query = format!(
        "INSERT INTO categories (account_id, name, color)
         VALUES ($1, $2, $3)
         RETURNING {COLUMNS}"
    );

    let mut created = Vec::with_capacity(DEFAULT_CATEGORIES.len());
    for default in DEFAULT_CATEGORIES {
        let category = sqlx::query_as::<_, Category>(&query)
            .bind(account_id)
            .bind(default.name)
            .bind(default.color)
            .fetch_one(&mut *conn)
            .await?;
        created.push(category);
    }

    tracing::debug!(account_id, count = created.len(), "Default categories provisioned");
    Ok(created)
}
