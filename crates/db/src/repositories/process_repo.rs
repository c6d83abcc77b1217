//! Repository for the `processes` table.

use folio_core::patch::patched_str;
use folio_core::types::DbId;
use sqlx::PgPool;

use crate::models::filter::ListFilter;
use crate::models::process::{CreateProcess, Process, ProcessSummary, UpdateProcess};

pub(crate) const COLUMNS: &str = "id, description, is_active, created_at, updated_at";

/// Provides CRUD operations for processes.
///
/// Several processes may be active; the page renders the one with the lowest id.
pub struct ProcessRepo;

impl ProcessRepo {
    pub async fn create(pool: &PgPool, input: &CreateProcess) -> Result<Process, sqlx::Error> {
        let query = format!(
            "INSERT INTO processes (description, is_active)
             VALUES ($1, COALESCE($2, true))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Process>(&query)
            .bind(&input.description)
            .bind(input.is_active)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Process>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM processes WHERE id = $1");
        sqlx::query_as::<_, Process>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List processes ordered by id, each with the number of its active steps.
    pub async fn list(
        pool: &PgPool,
        filter: &ListFilter,
    ) -> Result<Vec<ProcessSummary>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS},
                (SELECT COUNT(*) FROM steps st
                 WHERE st.process_id = processes.id AND st.is_active) AS active_step_count
             FROM processes
             WHERE ($1::BOOLEAN IS NULL OR is_active = $1)
               AND ($2::TEXT IS NULL OR description ILIKE $2)
             ORDER BY id"
        );
        sqlx::query_as::<_, ProcessSummary>(&query)
            .bind(filter.is_active)
            .bind(filter.pattern())
            .fetch_all(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateProcess,
    ) -> Result<Option<Process>, sqlx::Error> {
        let query = format!(
            "UPDATE processes SET
                description = CASE WHEN $2 THEN $3 ELSE description END,
                is_active = COALESCE($4, is_active)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Process>(&query)
            .bind(id)
            .bind(input.description.is_some())
            .bind(patched_str(&input.description))
            .bind(input.is_active)
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete a process. Its steps survive with `process_id` NULL.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM processes WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
