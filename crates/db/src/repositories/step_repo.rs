//! Repository for the `steps` table.

use folio_core::patch::patched_str;
use folio_core::types::DbId;
use sqlx::PgPool;

use crate::models::process::{CreateStep, Step, StepFilter, UpdateStep};

pub(crate) const COLUMNS: &str =
    "id, title, description, process_id, is_active, created_at, updated_at";

/// Provides CRUD operations for process steps.
pub struct StepRepo;

impl StepRepo {
    pub async fn create(pool: &PgPool, input: &CreateStep) -> Result<Step, sqlx::Error> {
        let query = format!(
            "INSERT INTO steps (title, description, process_id, is_active)
             VALUES ($1, $2, $3, COALESCE($4, true))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Step>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.process_id)
            .bind(input.is_active)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Step>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM steps WHERE id = $1");
        sqlx::query_as::<_, Step>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(pool: &PgPool, filter: &StepFilter) -> Result<Vec<Step>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM steps
             WHERE ($1::BOOLEAN IS NULL OR is_active = $1)
               AND ($2::BIGINT IS NULL OR process_id = $2)
               AND ($3::TEXT IS NULL OR title ILIKE $3)
             ORDER BY id"
        );
        sqlx::query_as::<_, Step>(&query)
            .bind(filter.is_active)
            .bind(filter.process_id)
            .bind(filter.pattern())
            .fetch_all(pool)
            .await
    }

    /// Patch a step. `process_id: null` detaches it from its process.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateStep,
    ) -> Result<Option<Step>, sqlx::Error> {
        let query = format!(
            "UPDATE steps SET
                title = CASE WHEN $2 THEN $3 ELSE title END,
                description = CASE WHEN $4 THEN $5 ELSE description END,
                process_id = CASE WHEN $6 THEN $7 ELSE process_id END,
                is_active = COALESCE($8, is_active)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Step>(&query)
            .bind(id)
            .bind(input.title.is_some())
            .bind(patched_str(&input.title))
            .bind(input.description.is_some())
            .bind(patched_str(&input.description))
            .bind(input.process_id.is_some())
            .bind(input.process_id.flatten())
            .bind(input.is_active)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM steps WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
