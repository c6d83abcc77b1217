//! Repository for the `social_links` table.

use folio_core::patch::patched_str;
use folio_core::types::DbId;
use sqlx::PgPool;

use crate::models::get_in_touch::{
    ContactChildFilter, CreateSocialLink, SocialLink, UpdateSocialLink,
};

pub(crate) const COLUMNS: &str =
    "id, title, link, icon, get_in_touch_id, is_active, created_at, updated_at";

/// Provides CRUD operations for social links.
pub struct SocialLinkRepo;

impl SocialLinkRepo {
    pub async fn create(pool: &PgPool, input: &CreateSocialLink) -> Result<SocialLink, sqlx::Error> {
        let query = format!(
            "INSERT INTO social_links (title, link, icon, get_in_touch_id, is_active)
             VALUES ($1, $2, $3, $4, COALESCE($5, true))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, SocialLink>(&query)
            .bind(&input.title)
            .bind(&input.link)
            .bind(&input.icon)
            .bind(input.get_in_touch_id)
            .bind(input.is_active)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<SocialLink>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM social_links WHERE id = $1");
        sqlx::query_as::<_, SocialLink>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(
        pool: &PgPool,
        filter: &ContactChildFilter,
    ) -> Result<Vec<SocialLink>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM social_links
             WHERE ($1::BOOLEAN IS NULL OR is_active = $1)
               AND ($2::BIGINT IS NULL OR get_in_touch_id = $2)
               AND ($3::TEXT IS NULL OR title ILIKE $3)
             ORDER BY id"
        );
        sqlx::query_as::<_, SocialLink>(&query)
            .bind(filter.is_active)
            .bind(filter.get_in_touch_id)
            .bind(filter.pattern())
            .fetch_all(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateSocialLink,
    ) -> Result<Option<SocialLink>, sqlx::Error> {
        let query = format!(
            "UPDATE social_links SET
                title = CASE WHEN $2 THEN $3 ELSE title END,
                link = CASE WHEN $4 THEN $5 ELSE link END,
                icon = CASE WHEN $6 THEN $7 ELSE icon END,
                get_in_touch_id = CASE WHEN $8 THEN $9 ELSE get_in_touch_id END,
                is_active = COALESCE($10, is_active)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, SocialLink>(&query)
            .bind(id)
            .bind(input.title.is_some())
            .bind(patched_str(&input.title))
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
        let result = sqlx::query("DELETE FROM social_links WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
