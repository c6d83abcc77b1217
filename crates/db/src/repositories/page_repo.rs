//! Read path for the public page.
//!
//! All queries of one render run in a single read-only `REPEATABLE READ`
//! transaction, so the view model never mixes rows from before and after a
//! concurrent activation.

use std::collections::HashMap;

use folio_core::page::SectionVisibility;
use folio_core::types::{DbId, Timestamp};
use sqlx::{PgConnection, PgPool};

use crate::models::about::About;
use crate::models::get_in_touch::{GetInTouch, InfoItem, SocialLink};
use crate::models::hero::Hero;
use crate::models::page::{
    ContactSection, PageContent, PageView, ProcessWithSteps, SkillGroupWithSkills,
};
use crate::models::process::{Process, Step};
use crate::models::project::{Project, ProjectWithSkills};
use crate::models::sections::Sections;
use crate::models::site_metadata::SiteMetadata;
use crate::models::skill::{Skill, SkillGroup};
use crate::repositories::{
    about_repo, get_in_touch_repo, hero_repo, info_item_repo, process_repo, project_repo,
    sections_repo, site_metadata_repo, skill_group_repo, skill_repo, social_link_repo, step_repo,
    ProjectRepo,
};

/// Assembles the page view model from the active content.
pub struct PageRepo;

impl PageRepo {
    /// Load everything the page shows and apply the section toggles.
    ///
    /// Missing singletons come back as `None` rather than an error.
    pub async fn load(pool: &PgPool) -> Result<PageView, sqlx::Error> {
        let mut tx = pool.begin().await?;
        sqlx::query("SET TRANSACTION ISOLATION LEVEL REPEATABLE READ, READ ONLY")
            .execute(&mut *tx)
            .await?;

        let sections = first_row::<Sections>(
            &mut tx,
            &format!("SELECT {} FROM sections ORDER BY id LIMIT 1", sections_repo::COLUMNS),
        )
        .await?;
        let visibility = sections
            .as_ref()
            .map(SectionVisibility::from)
            .unwrap_or_default();

        let content = PageContent {
            metadata: first_active::<SiteMetadata>(&mut tx, "site_metadata", site_metadata_repo::COLUMNS)
                .await?,
            hero: first_active::<Hero>(&mut tx, "heroes", hero_repo::COLUMNS).await?,
            about: first_active::<About>(&mut tx, "abouts", about_repo::COLUMNS).await?,
            skill_groups: load_skill_groups(&mut tx).await?,
            projects: load_projects(&mut tx).await?,
            process: load_process(&mut tx).await?,
            get_in_touch: load_contact(&mut tx).await?,
        };

        tx.commit().await?;
        Ok(PageView::assemble(content, visibility))
    }

    /// Newest `updated_at` across the content the page shows, if any.
    pub async fn last_modified(pool: &PgPool) -> Result<Option<Timestamp>, sqlx::Error> {
        let row: (Option<Timestamp>,) = sqlx::query_as(
            "SELECT MAX(updated_at) FROM (
                SELECT updated_at FROM site_metadata WHERE is_active
                UNION ALL SELECT updated_at FROM heroes WHERE is_active
                UNION ALL SELECT updated_at FROM abouts WHERE is_active
                UNION ALL SELECT updated_at FROM get_in_touch WHERE is_active
                UNION ALL SELECT updated_at FROM projects WHERE is_active
                UNION ALL SELECT updated_at FROM skill_groups WHERE is_active
                UNION ALL SELECT updated_at FROM processes WHERE is_active
                UNION ALL SELECT updated_at FROM sections
             ) AS content",
        )
        .fetch_one(pool)
        .await?;
        Ok(row.0)
    }
}

async fn first_row<T>(conn: &mut PgConnection, query: &str) -> Result<Option<T>, sqlx::Error>
where
    T: for<'r> sqlx::FromRow<'r, sqlx::postgres::PgRow> + Send + Unpin,
{
    sqlx::query_as::<_, T>(query).fetch_optional(&mut *conn).await
}

/// The active row of `table` with the lowest id.
async fn first_active<T>(
    conn: &mut PgConnection,
    table: &str,
    columns: &str,
) -> Result<Option<T>, sqlx::Error>
where
    T: for<'r> sqlx::FromRow<'r, sqlx::postgres::PgRow> + Send + Unpin,
{
    let query = format!("SELECT {columns} FROM {table} WHERE is_active ORDER BY id LIMIT 1");
    first_row(conn, &query).await
}

async fn load_skill_groups(
    conn: &mut PgConnection,
) -> Result<Vec<SkillGroupWithSkills>, sqlx::Error> {
    let query = format!(
        "SELECT {} FROM skill_groups WHERE is_active ORDER BY id",
        skill_group_repo::COLUMNS
    );
    let groups = sqlx::query_as::<_, SkillGroup>(&query)
        .fetch_all(&mut *conn)
        .await?;
    if groups.is_empty() {
        return Ok(Vec::new());
    }

    let ids: Vec<DbId> = groups.iter().map(|g| g.id).collect();
    let query = format!(
        "SELECT {} FROM skills WHERE is_active AND group_id = ANY($1) ORDER BY id",
        skill_repo::COLUMNS
    );
    let skills = sqlx::query_as::<_, Skill>(&query)
        .bind(&ids)
        .fetch_all(&mut *conn)
        .await?;

    let mut by_group: HashMap<DbId, Vec<Skill>> = HashMap::new();
    for skill in skills {
        if let Some(group_id) = skill.group_id {
            by_group.entry(group_id).or_default().push(skill);
        }
    }

    Ok(groups
        .into_iter()
        .map(|group| SkillGroupWithSkills {
            skills: by_group.remove(&group.id).unwrap_or_default(),
            group,
        })
        .collect())
}

async fn load_projects(conn: &mut PgConnection) -> Result<Vec<ProjectWithSkills>, sqlx::Error> {
    let query = format!(
        "SELECT {} FROM projects WHERE is_active ORDER BY {}",
        project_repo::COLUMNS,
        project_repo::ORDER_BY
    );
    let projects = sqlx::query_as::<_, Project>(&query)
        .fetch_all(&mut *conn)
        .await?;

    let ids: Vec<DbId> = projects.iter().map(|p| p.id).collect();
    let mut skills = ProjectRepo::active_skills_by_project(conn, &ids).await?;

    Ok(projects
        .into_iter()
        .map(|project| ProjectWithSkills {
            skills: skills.remove(&project.id).unwrap_or_default(),
            project,
        })
        .collect())
}

async fn load_process(conn: &mut PgConnection) -> Result<Option<ProcessWithSteps>, sqlx::Error> {
    let Some(process) = first_active::<Process>(conn, "processes", process_repo::COLUMNS).await?
    else {
        return Ok(None);
    };

    let query = format!(
        "SELECT {} FROM steps WHERE is_active AND process_id = $1 ORDER BY id",
        step_repo::COLUMNS
    );
    let steps = sqlx::query_as::<_, Step>(&query)
        .bind(process.id)
        .fetch_all(&mut *conn)
        .await?;

    Ok(Some(ProcessWithSteps { process, steps }))
}

async fn load_contact(conn: &mut PgConnection) -> Result<Option<ContactSection>, sqlx::Error> {
    let Some(get_in_touch) =
        first_active::<GetInTouch>(conn, "get_in_touch", get_in_touch_repo::COLUMNS).await?
    else {
        return Ok(None);
    };

    let query = format!(
        "SELECT {} FROM info_items WHERE is_active AND get_in_touch_id = $1 ORDER BY id",
        info_item_repo::COLUMNS
    );
    let info_items = sqlx::query_as::<_, InfoItem>(&query)
        .bind(get_in_touch.id)
        .fetch_all(&mut *conn)
        .await?;

    let query = format!(
        "SELECT {} FROM social_links WHERE is_active AND get_in_touch_id = $1 ORDER BY id",
        social_link_repo::COLUMNS
    );
    let social_links = sqlx::query_as::<_, SocialLink>(&query)
        .bind(get_in_touch.id)
        .fetch_all(&mut *conn)
        .await?;

    Ok(Some(ContactSection {
        get_in_touch,
        info_items,
        social_links,
    }))
}
