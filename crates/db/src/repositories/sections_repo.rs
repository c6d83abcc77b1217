//! Repository for the `sections` table (single configuration row).

use sqlx::PgPool;

use crate::models::sections::{Sections, UpdateSections};

pub(crate) const COLUMNS: &str =
    "id, about_me, projects, skills, process, get_in_touch, created_at, updated_at";

/// Reads and writes the page section toggles.
pub struct SectionsRepo;

impl SectionsRepo {
    /// The row the page uses: the first by id, if any row exists.
    pub async fn find_current(pool: &PgPool) -> Result<Option<Sections>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM sections ORDER BY id LIMIT 1");
        sqlx::query_as::<_, Sections>(&query)
            .fetch_optional(pool)
            .await
    }

    /// Update the current row, creating it first if the table is empty.
    ///
    /// The table lock keeps two concurrent first saves from inserting two rows.
    pub async fn upsert(pool: &PgPool, input: &UpdateSections) -> Result<Sections, sqlx::Error> {
        let mut tx = pool.begin().await?;

        sqlx::query("LOCK TABLE sections IN SHARE ROW EXCLUSIVE MODE")
            .execute(&mut *tx)
            .await?;

        let current: Option<(i64,)> = sqlx::query_as("SELECT id FROM sections ORDER BY id LIMIT 1")
            .fetch_optional(&mut *tx)
            .await?;

        let sections = match current {
            Some((id,)) => {
                let query = format!(
                    "UPDATE sections SET
                        about_me = COALESCE($2, about_me),
                        projects = COALESCE($3, projects),
                        skills = COALESCE($4, skills),
                        process = COALESCE($5, process),
                        get_in_touch = COALESCE($6, get_in_touch)
                     WHERE id = $1
                     RETURNING {COLUMNS}"
                );
                sqlx::query_as::<_, Sections>(&query)
                    .bind(id)
                    .bind(input.about_me)
                    .bind(input.projects)
                    .bind(input.skills)
                    .bind(input.process)
                    .bind(input.get_in_touch)
                    .fetch_one(&mut *tx)
                    .await?
            }
            None => {
                let query = format!(
                    "INSERT INTO sections (about_me, projects, skills, process, get_in_touch)
                     VALUES (COALESCE($1, true), COALESCE($2, true), COALESCE($3, true),
                             COALESCE($4, true), COALESCE($5, true))
                     RETURNING {COLUMNS}"
                );
                sqlx::query_as::<_, Sections>(&query)
                    .bind(input.about_me)
                    .bind(input.projects)
                    .bind(input.skills)
                    .bind(input.process)
                    .bind(input.get_in_touch)
                    .fetch_one(&mut *tx)
                    .await?
            }
        };

        tx.commit().await?;
        Ok(sections)
    }
}
