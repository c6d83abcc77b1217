//! Repository for the `abouts` table.

use folio_core::patch::patched_str;
use folio_core::singleton::{self, SingletonKind};
use folio_core::types::DbId;
use sqlx::PgPool;

use crate::models::filter::ListFilter;
use crate::models::about::{About, CreateAbout, UpdateAbout};
use crate::repositories::SingletonRepo;

pub(crate) const COLUMNS: &str = "id, about, avatar_url, is_active, created_at, updated_at";

const KIND: SingletonKind = SingletonKind::About;

/// Provides CRUD operations for about sections (singleton content).
pub struct AboutRepo;

impl AboutRepo {
    /// Insert a new about section; active by default, demoting any other.
    pub async fn create(pool: &PgPool, input: &CreateAbout) -> Result<About, sqlx::Error> {
        let mut tx = pool.begin().await?;

        if singleton::activates(input.is_active, true) {
            SingletonRepo::demote_siblings(&mut *tx, KIND, None).await?;
        }

        let query = format!(
            "INSERT INTO abouts (about, avatar_url, is_active)
             VALUES ($1, $2, COALESCE($3, true))
             RETURNING {COLUMNS}"
        );
        let about = sqlx::query_as::<_, About>(&query)
            .bind(&input.about)
            .bind(&input.avatar_url)
            .bind(input.is_active)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(about)
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<About>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM abouts WHERE id = $1");
        sqlx::query_as::<_, About>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(pool: &PgPool, filter: &ListFilter) -> Result<Vec<About>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM abouts
             WHERE ($1::BOOLEAN IS NULL OR is_active = $1)
               AND ($2::TEXT IS NULL OR about ILIKE $2)
             ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, About>(&query)
            .bind(filter.is_active)
            .bind(filter.pattern())
            .fetch_all(pool)
            .await
    }

    /// Patch an about section. `is_active: true` demotes the others atomically.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateAbout,
    ) -> Result<Option<About>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        if singleton::activates(input.is_active, false) {
            SingletonRepo::demote_siblings(&mut *tx, KIND, Some(id)).await?;
        }

        let query = format!(
            "UPDATE abouts SET
                about = CASE WHEN $2 THEN $3 ELSE about END,
                avatar_url = CASE WHEN $4 THEN $5 ELSE avatar_url END,
                is_active = COALESCE($6, is_active)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let about = sqlx::query_as::<_, About>(&query)
            .bind(id)
            .bind(input.about.is_some())
            .bind(patched_str(&input.about))
            .bind(input.avatar_url.is_some())
            .bind(patched_str(&input.avatar_url))
            .bind(input.is_active)
            .fetch_optional(&mut *tx)
            .await?;

        if about.is_some() {
            tx.commit().await?;
        }
        Ok(about)
    }

    pub async fn activate(pool: &PgPool, id: DbId) -> Result<Option<About>, sqlx::Error> {
        SingletonRepo::activate_returning(pool, KIND, id, COLUMNS).await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM abouts WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
