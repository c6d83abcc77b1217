//! Repository for the `get_in_touch` table.

use folio_core::patch::patched_str;
use folio_core::singleton::{self, SingletonKind};
use folio_core::types::DbId;
use sqlx::PgPool;

use crate::models::filter::ListFilter;
use crate::models::get_in_touch::{
    CreateGetInTouch, GetInTouch, GetInTouchSummary, UpdateGetInTouch,
};
use crate::repositories::SingletonRepo;

pub(crate) const COLUMNS: &str = "id, title, description, is_active, created_at, updated_at";

const KIND: SingletonKind = SingletonKind::GetInTouch;

/// Provides CRUD operations for contact sections (singleton content).
///
/// Deleting a contact section keeps its info items and social links; their
/// `get_in_touch_id` is set to NULL by the foreign key.
pub struct GetInTouchRepo;

impl GetInTouchRepo {
    pub async fn create(pool: &PgPool, input: &CreateGetInTouch) -> Result<GetInTouch, sqlx::Error> {
        let mut tx = pool.begin().await?;

        if singleton::activates(input.is_active, true) {
            SingletonRepo::demote_siblings(&mut *tx, KIND, None).await?;
        }

        let query = format!(
            "INSERT INTO get_in_touch (title, description, is_active)
             VALUES ($1, $2, COALESCE($3, true))
             RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, GetInTouch>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.is_active)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(row)
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<GetInTouch>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM get_in_touch WHERE id = $1");
        sqlx::query_as::<_, GetInTouch>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List contact sections, newest first, each with the number of its
    /// active info items and social links.
    pub async fn list(
        pool: &PgPool,
        filter: &ListFilter,
    ) -> Result<Vec<GetInTouchSummary>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS},
                (SELECT COUNT(*) FROM info_items i
                 WHERE i.get_in_touch_id = get_in_touch.id AND i.is_active) AS active_info_count,
                (SELECT COUNT(*) FROM social_links l
                 WHERE l.get_in_touch_id = get_in_touch.id AND l.is_active) AS active_social_count
             FROM get_in_touch
             WHERE ($1::BOOLEAN IS NULL OR is_active = $1)
               AND ($2::TEXT IS NULL OR title ILIKE $2 OR description ILIKE $2)
             ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, GetInTouchSummary>(&query)
            .bind(filter.is_active)
            .bind(filter.pattern())
            .fetch_all(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateGetInTouch,
    ) -> Result<Option<GetInTouch>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        if singleton::activates(input.is_active, false) {
            SingletonRepo::demote_siblings(&mut *tx, KIND, Some(id)).await?;
        }

        let query = format!(
            "UPDATE get_in_touch SET
                title = CASE WHEN $2 THEN $3 ELSE title END,
                description = CASE WHEN $4 THEN $5 ELSE description END,
                is_active = COALESCE($6, is_active)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, GetInTouch>(&query)
            .bind(id)
            .bind(input.title.is_some())
            .bind(patched_str(&input.title))
            .bind(input.description.is_some())
            .bind(patched_str(&input.description))
            .bind(input.is_active)
            .fetch_optional(&mut *tx)
            .await?;

        if row.is_some() {
            tx.commit().await?;
        }
        Ok(row)
    }

    pub async fn activate(pool: &PgPool, id: DbId) -> Result<Option<GetInTouch>, sqlx::Error> {
        SingletonRepo::activate_returning(pool, KIND, id, COLUMNS).await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM get_in_touch WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
