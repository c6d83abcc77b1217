//! Repository for the `messages` table.

use folio_core::types::DbId;
use sqlx::PgPool;

use crate::models::message::{CreateMessage, Message};

pub(crate) const COLUMNS: &str = "id, name, email, message, created_at";

/// Stores contact-form submissions. There is no update path.
pub struct MessageRepo;

impl MessageRepo {
    /// Append a submission exactly as received. `created_at` is set by the
    /// database.
    pub async fn create(pool: &PgPool, input: &CreateMessage) -> Result<Message, sqlx::Error> {
        let query = format!(
            "INSERT INTO messages (name, email, message)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Message>(&query)
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.message)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Message>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM messages WHERE id = $1");
        sqlx::query_as::<_, Message>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List messages newest first. `limit` and `offset` must already be clamped.
    pub async fn list(pool: &PgPool, limit: i64, offset: i64) -> Result<Vec<Message>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM messages
             ORDER BY created_at DESC, id DESC
             LIMIT $1 OFFSET $2"
        );
        sqlx::query_as::<_, Message>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM messages")
            .fetch_one(pool)
            .await?;
        Ok(row.0)
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM messages WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
