//! Repository for the `projects` table and its `project_skills` links.

use std::collections::HashMap;

use folio_core::patch::patched_str;
use folio_core::types::DbId;
use sqlx::{PgConnection, PgPool};

use crate::models::filter::ListFilter;
use crate::models::project::{
    CreateProject, Project, ProjectSkillRow, ProjectWithSkills, UpdateProject, DEFAULT_SOURCE_URL,
};
use crate::models::skill::Skill;

/// Column list shared across queries to avoid repetition.
pub(crate) const COLUMNS: &str = "id, title, description, image_url, demo_url, source_url, \
    ordering_index, is_active, created_at, updated_at";

/// Listing order: explicit position first (unset last), newest first on ties.
pub(crate) const ORDER_BY: &str = "ordering_index ASC NULLS LAST, created_at DESC, id DESC";

/// Skill columns qualified for joins against `project_skills`.
const SKILL_COLUMNS: &str =
    "s.id, s.title, s.icon, s.group_id, s.is_active, s.created_at, s.updated_at";

/// Provides CRUD operations for projects and their skill links.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert a new project and link `input.skill_ids` in one transaction.
    ///
    /// An unknown skill id fails the whole insert with a foreign key violation.
    pub async fn create(pool: &PgPool, input: &CreateProject) -> Result<Project, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "INSERT INTO projects
                (title, description, image_url, demo_url, source_url, ordering_index, is_active)
             VALUES ($1, $2, $3, $4, COALESCE($5, $8), $6, COALESCE($7, true))
             RETURNING {COLUMNS}"
        );
        let project = sqlx::query_as::<_, Project>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.image_url)
            .bind(&input.demo_url)
            .bind(&input.source_url)
            .bind(input.ordering_index)
            .bind(input.is_active)
            .bind(DEFAULT_SOURCE_URL)
            .fetch_one(&mut *tx)
            .await?;

        Self::replace_skills(&mut *tx, project.id, &input.skill_ids).await?;

        tx.commit().await?;
        Ok(project)
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE id = $1");
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a project together with all of its linked skills.
    pub async fn find_with_skills(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<ProjectWithSkills>, sqlx::Error> {
        let Some(project) = Self::find_by_id(pool, id).await? else {
            return Ok(None);
        };
        let skills = Self::list_skills(pool, id).await?;
        Ok(Some(ProjectWithSkills { project, skills }))
    }

    /// List projects in display order, optionally filtered by `is_active`
    /// and a search over title and description.
    pub async fn list(pool: &PgPool, filter: &ListFilter) -> Result<Vec<Project>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM projects
             WHERE ($1::BOOLEAN IS NULL OR is_active = $1)
               AND ($2::TEXT IS NULL OR title ILIKE $2 OR description ILIKE $2)
             ORDER BY {ORDER_BY}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(filter.is_active)
            .bind(filter.pattern())
            .fetch_all(pool)
            .await
    }

    /// All skills linked to a project, regardless of their status.
    pub async fn list_skills(pool: &PgPool, project_id: DbId) -> Result<Vec<Skill>, sqlx::Error> {
        let query = format!(
            "SELECT {SKILL_COLUMNS}
             FROM project_skills ps
             JOIN skills s ON s.id = ps.skill_id
             WHERE ps.project_id = $1
             ORDER BY s.title, s.id"
        );
        sqlx::query_as::<_, Skill>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }

    /// Update a project. Omitted fields are kept and `null` fields are
    /// cleared; a present `skill_ids` replaces the whole link set in the same
    /// transaction.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateProject,
    ) -> Result<Option<Project>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "UPDATE projects SET
                title = CASE WHEN $2 THEN $3 ELSE title END,
                description = CASE WHEN $4 THEN $5 ELSE description END,
                image_url = CASE WHEN $6 THEN $7 ELSE image_url END,
                demo_url = CASE WHEN $8 THEN $9 ELSE demo_url END,
                source_url = CASE WHEN $10 THEN $11 ELSE source_url END,
                ordering_index = CASE WHEN $12 THEN $13 ELSE ordering_index END,
                is_active = COALESCE($14, is_active)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let project = sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .bind(input.title.is_some())
            .bind(patched_str(&input.title))
            .bind(input.description.is_some())
            .bind(patched_str(&input.description))
            .bind(input.image_url.is_some())
            .bind(patched_str(&input.image_url))
            .bind(input.demo_url.is_some())
            .bind(patched_str(&input.demo_url))
            .bind(input.source_url.is_some())
            .bind(patched_str(&input.source_url))
            .bind(input.ordering_index.is_some())
            .bind(input.ordering_index.flatten())
            .bind(input.is_active)
            .fetch_optional(&mut *tx)
            .await?;

        let Some(project) = project else {
            return Ok(None);
        };

        if let Some(skill_ids) = &input.skill_ids {
            Self::replace_skills(&mut *tx, id, skill_ids).await?;
        }

        tx.commit().await?;
        Ok(Some(project))
    }

    /// Permanently delete a project. Its skill links are removed by cascade.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM projects WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Replace the skill links of a project. Duplicate ids are ignored.
    pub(crate) async fn replace_skills(
        conn: &mut PgConnection,
        project_id: DbId,
        skill_ids: &[DbId],
    ) -> Result<(), sqlx::Error> {
        sqlx::query("DELETE FROM project_skills WHERE project_id = $1")
            .bind(project_id)
            .execute(&mut *conn)
            .await?;

        if skill_ids.is_empty() {
            return Ok(());
        }

        sqlx::query(
            "INSERT INTO project_skills (project_id, skill_id)
             SELECT $1, UNNEST($2::BIGINT[])
             ON CONFLICT DO NOTHING",
        )
        .bind(project_id)
        .bind(skill_ids)
        .execute(&mut *conn)
        .await?;
        Ok(())
    }

    /// Active skills for each of `project_ids`, keyed by project.
    pub(crate) async fn active_skills_by_project(
        conn: &mut PgConnection,
        project_ids: &[DbId],
    ) -> Result<HashMap<DbId, Vec<Skill>>, sqlx::Error> {
        if project_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let query = format!(
            "SELECT ps.project_id, {SKILL_COLUMNS}
             FROM project_skills ps
             JOIN skills s ON s.id = ps.skill_id
             WHERE ps.project_id = ANY($1) AND s.is_active
             ORDER BY s.title, s.id"
        );
        let rows = sqlx::query_as::<_, ProjectSkillRow>(&query)
            .bind(project_ids)
            .fetch_all(&mut *conn)
            .await?;

        let mut by_project: HashMap<DbId, Vec<Skill>> = HashMap::new();
        for row in rows {
            by_project.entry(row.project_id).or_default().push(row.skill);
        }
        Ok(by_project)
    }
}
