//! Repository for the `info_items` table.

use folio_core::patch::patched_str;
use folio_core::types::DbId;
use sqlx::PgPool;

use crate::models::get_in_touch::{ContactChildFilter, CreateInfoItem, InfoItem, UpdateInfoItem};

pub(crate) const COLUMNS: &str =
    "id, key, value, link, icon, get_in_touch_id, is_active, created_at, updated_at";

/// Provides CRUD operations for contact info items.
pub struct InfoItemRepo;

impl InfoItemRepo {
    pub async fn create(pool: &PgPool, input: &CreateInfoItem) -> Result<InfoItem, sqlx::Error> {
        let query = format!(
            "INSERT INTO info_items (key, value, link, icon, get_in_touch_id, is_active)
             VALUES ($1, $2, $3, $4, $5, COALESCE($6, true))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, InfoItem>(&query)
            .bind(&input.key)
            .bind(&input.value)
            .bind(&input.link)
            .bind(&input.icon)
            .bind(input.get_in_touch_id)
            .bind(input.is_active)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<InfoItem>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM info_items WHERE id = $1");
        sqlx::query_as::<_, InfoItem>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List info items in insertion order, optionally filtered.
    pub async fn list(
        pool: &PgPool,
        filter: &ContactChildFilter,
    ) -> Result<Vec<InfoItem>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM info_items
             WHERE ($1::BOOLEAN IS NULL OR is_active = $1)
               AND ($2::BIGINT IS NULL OR get_in_touch_id = $2)
               AND ($3::TEXT IS NULL OR key ILIKE $3 OR value ILIKE $3)
             ORDER BY id"
        );
        sqlx::query_as::<_, InfoItem>(&query)
            .bind(filter.is_active)
            .bind(filter.get_in_touch_id)
            .bind(filter.pattern())
            .fetch_all(pool)
            .await
    }

    /// Patch an info item. `get_in_touch_id: null` detaches it from its section.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateInfoItem,
    ) -> Result<Option<InfoItem>, sqlx::Error> {
        let query = format!(
            "UPDATE info_items SET
                key = CASE WHEN $2 THEN $3 ELSE key END,
                value = CASE WHEN $4 THEN $5 ELSE value END,
                link = CASE WHEN $6 THEN $7 ELSE link END,
                icon = CASE WHEN $8 THEN $9 ELSE icon END,
                get_in_touch_id = CASE WHEN $10 THEN $11 ELSE get_in_touch_id END,
                is_active = COALESCE($12, is_active)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, InfoItem>(&query)
            .bind(id)
            .bind(input.key.is_some())
            .bind(patched_str(&input.key))
            .bind(input.value.is_some())
            .bind(patched_str(&input.value))
            .bind(input.link.is_some())
            .bind(patched_str(&input.link))
            .bind(input.icon.is_some())
            .bind(patched_str(&input.icon))
            .bind(input.get_in_touch_id.is_some())
            .bind(input.get_in_touch_id.flatten())
            .bind(input.is_active)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM info_items WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
