//! Repository for the `skill_groups` table.

use folio_core::patch::patched_str;
use folio_core::types::DbId;
use sqlx::PgPool;

use crate::models::filter::ListFilter;
use crate::models::skill::{CreateSkillGroup, SkillGroup, SkillGroupSummary, UpdateSkillGroup};

pub(crate) const COLUMNS: &str = "id, title, is_active, created_at, updated_at";

/// Provides CRUD operations for skill groups.
///
/// Deleting a group leaves its skills in place with `group_id` set to NULL.
pub struct SkillGroupRepo;

impl SkillGroupRepo {
    pub async fn create(pool: &PgPool, input: &CreateSkillGroup) -> Result<SkillGroup, sqlx::Error> {
        let query = format!(
            "INSERT INTO skill_groups (title, is_active)
             VALUES ($1, COALESCE($2, true))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, SkillGroup>(&query)
            .bind(&input.title)
            .bind(input.is_active)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<SkillGroup>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM skill_groups WHERE id = $1");
        sqlx::query_as::<_, SkillGroup>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List groups ordered by id, each with the number of its active skills.
    pub async fn list(
        pool: &PgPool,
        filter: &ListFilter,
    ) -> Result<Vec<SkillGroupSummary>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS},
                (SELECT COUNT(*) FROM skills s
                 WHERE s.group_id = skill_groups.id AND s.is_active) AS active_skill_count
             FROM skill_groups
             WHERE ($1::BOOLEAN IS NULL OR is_active = $1)
               AND ($2::TEXT IS NULL OR title ILIKE $2)
             ORDER BY id"
        );
        sqlx::query_as::<_, SkillGroupSummary>(&query)
            .bind(filter.is_active)
            .bind(filter.pattern())
            .fetch_all(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateSkillGroup,
    ) -> Result<Option<SkillGroup>, sqlx::Error> {
        let query = format!(
            "UPDATE skill_groups SET
                title = CASE WHEN $2 THEN $3 ELSE title END,
                is_active = COALESCE($4, is_active)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, SkillGroup>(&query)
            .bind(id)
            .bind(input.title.is_some())
            .bind(patched_str(&input.title))
            .bind(input.is_active)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM skill_groups WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
