//! Repository for the `site_metadata` table.

use folio_core::patch::patched_str;
use folio_core::singleton::{self, SingletonKind};
use folio_core::types::DbId;
use sqlx::PgPool;

use crate::models::filter::ListFilter;
use crate::models::site_metadata::{CreateSiteMetadata, SiteMetadata, UpdateSiteMetadata};
use crate::repositories::SingletonRepo;

pub(crate) const COLUMNS: &str =
    "id, title, description, keywords, logo_character, is_active, created_at, updated_at";

const KIND: SingletonKind = SingletonKind::SiteMetadata;

/// Provides CRUD operations for site metadata (singleton content).
pub struct SiteMetadataRepo;

impl SiteMetadataRepo {
    /// Insert a new metadata row; active by default, demoting any other.
    pub async fn create(
        pool: &PgPool,
        input: &CreateSiteMetadata,
    ) -> Result<SiteMetadata, sqlx::Error> {
        let mut tx = pool.begin().await?;

        if singleton::activates(input.is_active, true) {
            SingletonRepo::demote_siblings(&mut *tx, KIND, None).await?;
        }

        let query = format!(
            "INSERT INTO site_metadata (title, description, keywords, logo_character, is_active)
             VALUES ($1, $2, $3, $4, COALESCE($5, true))
             RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, SiteMetadata>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.keywords)
            .bind(&input.logo_character)
            .bind(input.is_active)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(row)
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<SiteMetadata>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM site_metadata WHERE id = $1");
        sqlx::query_as::<_, SiteMetadata>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List metadata rows, newest first, optionally filtered by `is_active`
    /// and a search over title, description and keywords.
    pub async fn list(
        pool: &PgPool,
        filter: &ListFilter,
    ) -> Result<Vec<SiteMetadata>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM site_metadata
             WHERE ($1::BOOLEAN IS NULL OR is_active = $1)
               AND ($2::TEXT IS NULL
                    OR title ILIKE $2 OR description ILIKE $2 OR keywords ILIKE $2)
             ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, SiteMetadata>(&query)
            .bind(filter.is_active)
            .bind(filter.pattern())
            .fetch_all(pool)
            .await
    }

    /// Patch a metadata row. `is_active: true` demotes the others atomically.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateSiteMetadata,
    ) -> Result<Option<SiteMetadata>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        if singleton::activates(input.is_active, false) {
            SingletonRepo::demote_siblings(&mut *tx, KIND, Some(id)).await?;
        }

        let query = format!(
            "UPDATE site_metadata SET
                title = CASE WHEN $2 THEN $3 ELSE title END,
                description = CASE WHEN $4 THEN $5 ELSE description END,
                keywords = CASE WHEN $6 THEN $7 ELSE keywords END,
                logo_character = CASE WHEN $8 THEN $9 ELSE logo_character END,
                is_active = COALESCE($10, is_active)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, SiteMetadata>(&query)
            .bind(id)
            .bind(input.title.is_some())
            .bind(patched_str(&input.title))
            .bind(input.description.is_some())
            .bind(patched_str(&input.description))
            .bind(input.keywords.is_some())
            .bind(patched_str(&input.keywords))
            .bind(input.logo_character.is_some())
            .bind(patched_str(&input.logo_character))
            .bind(input.is_active)
            .fetch_optional(&mut *tx)
            .await?;

        if row.is_some() {
            tx.commit().await?;
        }
        Ok(row)
    }

    pub async fn activate(pool: &PgPool, id: DbId) -> Result<Option<SiteMetadata>, sqlx::Error> {
        SingletonRepo::activate_returning(pool, KIND, id, COLUMNS).await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM site_metadata WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
