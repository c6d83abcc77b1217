//! Integration tests for patch semantics on update.
//!
//! An omitted field keeps its stored value; an explicit `null` clears it.

use folio_db::models::about::{CreateAbout, UpdateAbout};
use folio_db::models::get_in_touch::{CreateGetInTouch, CreateInfoItem, UpdateInfoItem};
use folio_db::models::hero::{CreateHero, UpdateHero};
use folio_db::models::process::{CreateProcess, CreateStep, UpdateStep};
use folio_db::models::project::{CreateProject, UpdateProject};
use folio_db::models::skill::{CreateSkill, CreateSkillGroup, UpdateSkill};
use folio_db::repositories::{
    AboutRepo, GetInTouchRepo, HeroRepo, InfoItemRepo, ProcessRepo, ProjectRepo, SkillGroupRepo,
    SkillRepo, StepRepo,
};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Foreign keys
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_skill_can_be_ungrouped(pool: PgPool) {
    let group = SkillGroupRepo::create(&pool, &CreateSkillGroup::default())
        .await
        .unwrap();
    let skill = SkillRepo::create(
        &pool,
        &CreateSkill {
            title: Some("Rust".to_string()),
            group_id: Some(group.id),
            ..Default::default()
        },
    )
    .await
    .unwrap();

    // Renaming alone keeps the group.
    let renamed = SkillRepo::update(
        &pool,
        skill.id,
        &UpdateSkill {
            title: Some(Some("Rust 2024".to_string())),
            ..Default::default()
        },
    )
    .await
    .unwrap()
    .unwrap();
    assert_eq!(renamed.group_id, Some(group.id));

    let ungrouped = SkillRepo::update(
        &pool,
        skill.id,
        &UpdateSkill {
            group_id: Some(None),
            ..Default::default()
        },
    )
    .await
    .unwrap()
    .unwrap();
    assert_eq!(ungrouped.group_id, None);
    assert_eq!(ungrouped.title.as_deref(), Some("Rust 2024"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_step_and_info_item_can_be_detached(pool: PgPool) {
    let process = ProcessRepo::create(&pool, &CreateProcess::default()).await.unwrap();
    let step = StepRepo::create(
        &pool,
        &CreateStep {
            title: Some("Discover".to_string()),
            process_id: Some(process.id),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    let contact = GetInTouchRepo::create(&pool, &CreateGetInTouch::default())
        .await
        .unwrap();
    let item = InfoItemRepo::create(
        &pool,
        &CreateInfoItem {
            key: Some("Email".to_string()),
            link: Some("https://example.com".to_string()),
            get_in_touch_id: Some(contact.id),
            ..Default::default()
        },
    )
    .await
    .unwrap();

    let step = StepRepo::update(
        &pool,
        step.id,
        &UpdateStep {
            process_id: Some(None),
            ..Default::default()
        },
    )
    .await
    .unwrap()
    .unwrap();
    assert_eq!(step.process_id, None);
    assert_eq!(step.title.as_deref(), Some("Discover"));

    let item = InfoItemRepo::update(
        &pool,
        item.id,
        &UpdateInfoItem {
            link: Some(None),
            get_in_touch_id: Some(None),
            ..Default::default()
        },
    )
    .await
    .unwrap()
    .unwrap();
    assert_eq!(item.get_in_touch_id, None);
    assert_eq!(item.link, None);
    assert_eq!(item.key.as_deref(), Some("Email"));
}

// ---------------------------------------------------------------------------
// Optional content fields
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_project_fields_can_be_cleared(pool: PgPool) {
    let project = ProjectRepo::create(
        &pool,
        &CreateProject {
            title: Some("Folio".to_string()),
            demo_url: Some("https://x.io".to_string()),
            ordering_index: Some(3),
            ..Default::default()
        },
    )
    .await
    .unwrap();

    let cleared = ProjectRepo::update(
        &pool,
        project.id,
        &UpdateProject {
            demo_url: Some(None),
            ordering_index: Some(None),
            ..Default::default()
        },
    )
    .await
    .unwrap()
    .unwrap();

    assert_eq!(cleared.ordering_index, None);
    assert_eq!(cleared.demo_url, None);
    assert_eq!(cleared.title.as_deref(), Some("Folio"));
    assert_eq!(cleared.source_url, project.source_url);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_singleton_fields_can_be_cleared(pool: PgPool) {
    let hero = HeroRepo::create(
        &pool,
        &CreateHero {
            full_name: Some("Ada Lovelace".to_string()),
            bio: Some("Analyst".to_string()),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    let about = AboutRepo::create(
        &pool,
        &CreateAbout {
            about: Some("Hi".to_string()),
            avatar_url: Some("https://cdn.example.com/me.png".to_string()),
            ..Default::default()
        },
    )
    .await
    .unwrap();

    let hero = HeroRepo::update(
        &pool,
        hero.id,
        &UpdateHero {
            bio: Some(None),
            ..Default::default()
        },
    )
    .await
    .unwrap()
    .unwrap();
    assert_eq!(hero.bio, None);
    assert_eq!(hero.full_name.as_deref(), Some("Ada Lovelace"));
    assert!(hero.is_active);

    let about = AboutRepo::update(
        &pool,
        about.id,
        &UpdateAbout {
            avatar_url: Some(None),
            ..Default::default()
        },
    )
    .await
    .unwrap()
    .unwrap();
    assert_eq!(about.avatar_url, None);
    assert_eq!(about.about.as_deref(), Some("Hi"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_empty_patch_changes_nothing(pool: PgPool) {
    let project = ProjectRepo::create(
        &pool,
        &CreateProject {
            title: Some("Folio".to_string()),
            description: Some("Portfolio backend".to_string()),
            ordering_index: Some(1),
            ..Default::default()
        },
    )
    .await
    .unwrap();

    let after = ProjectRepo::update(&pool, project.id, &UpdateProject::default())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(after.title, project.title);
    assert_eq!(after.description, project.description);
    assert_eq!(after.ordering_index, project.ordering_index);
    assert_eq!(after.demo_url, project.demo_url);
    assert_eq!(after.is_active, project.is_active);
}
