//! Repository for the `skills` table.

use folio_core::patch::patched_str;
use folio_core::types::DbId;
use sqlx::PgPool;

use crate::models::skill::{CreateSkill, Skill, SkillFilter, UpdateSkill};

pub(crate) const COLUMNS: &str = "id, title, icon, group_id, is_active, created_at, updated_at";

/// Provides CRUD operations for skills.
pub struct SkillRepo;

impl SkillRepo {
    pub async fn create(pool: &PgPool, input: &CreateSkill) -> Result<Skill, sqlx::Error> {
        let query = format!(
            "INSERT INTO skills (title, icon, group_id, is_active)
             VALUES ($1, $2, $3, COALESCE($4, true))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Skill>(&query)
            .bind(&input.title)
            .bind(&input.icon)
            .bind(input.group_id)
            .bind(input.is_active)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Skill>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM skills WHERE id = $1");
        sqlx::query_as::<_, Skill>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List skills ordered by id, optionally filtered by status, group and
    /// a title search.
    pub async fn list(pool: &PgPool, filter: &SkillFilter) -> Result<Vec<Skill>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM skills
             WHERE ($1::BOOLEAN IS NULL OR is_active = $1)
               AND ($2::BIGINT IS NULL OR group_id = $2)
               AND ($3::TEXT IS NULL OR title ILIKE $3)
             ORDER BY id"
        );
        sqlx::query_as::<_, Skill>(&query)
            .bind(filter.is_active)
            .bind(filter.group_id)
            .bind(filter.pattern())
            .fetch_all(pool)
            .await
    }

    /// Patch a skill. `group_id: null` moves it back to the ungrouped list.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateSkill,
    ) -> Result<Option<Skill>, sqlx::Error> {
        let query = format!(
            "UPDATE skills SET
                title = CASE WHEN $2 THEN $3 ELSE title END,
                icon = CASE WHEN $4 THEN $5 ELSE icon END,
                group_id = CASE WHEN $6 THEN $7 ELSE group_id END,
                is_active = COALESCE($8, is_active)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Skill>(&query)
            .bind(id)
            .bind(input.title.is_some())
            .bind(patched_str(&input.title))
            .bind(input.icon.is_some())
            .bind(patched_str(&input.icon))
            .bind(input.group_id.is_some())
            .bind(input.group_id.flatten())
            .bind(input.is_active)
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete a skill. Its project links are removed by cascade.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM skills WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
