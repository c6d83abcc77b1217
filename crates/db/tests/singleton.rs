//! Integration tests for the at-most-one-active rule on singleton content.
//!
//! Exercises create, update and explicit activation paths for every
//! singleton kind, plus concurrent activation and rollback behaviour.

use folio_core::singleton::SingletonKind;
use folio_db::models::about::CreateAbout;
use folio_db::models::filter::ListFilter;
use folio_db::models::get_in_touch::{CreateGetInTouch, UpdateGetInTouch};
use folio_db::models::hero::{CreateHero, UpdateHero, DEFAULT_GREETING};
use folio_db::models::site_metadata::{CreateSiteMetadata, UpdateSiteMetadata};
use folio_db::repositories::{
    AboutRepo, GetInTouchRepo, HeroRepo, SingletonRepo, SiteMetadataRepo,
};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn hero(name: &str, is_active: Option<bool>) -> CreateHero {
    CreateHero {
        full_name: Some(name.to_string()),
        is_active,
        ..Default::default()
    }
}

async fn active_hero_ids(pool: &PgPool) -> Vec<i64> {
    let filter = ListFilter {
        is_active: Some(true),
        ..Default::default()
    };
    HeroRepo::list(pool, &filter)
        .await
        .unwrap()
        .into_iter()
        .map(|h| h.id)
        .collect()
}

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_defaults_to_active_and_demotes_previous(pool: PgPool) {
    let a = HeroRepo::create(&pool, &hero("Ada", None)).await.unwrap();
    assert!(a.is_active);
    assert_eq!(a.greeting.as_deref(), Some(DEFAULT_GREETING));

    let b = HeroRepo::create(&pool, &hero("Grace", None)).await.unwrap();
    assert!(b.is_active);

    let a = HeroRepo::find_by_id(&pool, a.id).await.unwrap().unwrap();
    assert!(!a.is_active, "previously active hero must be demoted");
    assert_eq!(active_hero_ids(&pool).await, vec![b.id]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_inactive_leaves_siblings_untouched(pool: PgPool) {
    let a = HeroRepo::create(&pool, &hero("Ada", Some(true))).await.unwrap();
    let b = HeroRepo::create(&pool, &hero("Draft", Some(false))).await.unwrap();
    assert!(!b.is_active);

    assert_eq!(active_hero_ids(&pool).await, vec![a.id]);
}

// ---------------------------------------------------------------------------
// Update
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_to_active_switches_active_row(pool: PgPool) {
    let a = HeroRepo::create(&pool, &hero("Ada", Some(true))).await.unwrap();
    let b = HeroRepo::create(&pool, &hero("Grace", Some(false))).await.unwrap();

    let input = UpdateHero {
        is_active: Some(true),
        ..Default::default()
    };
    let b = HeroRepo::update(&pool, b.id, &input).await.unwrap().unwrap();
    assert!(b.is_active);

    let a = HeroRepo::find_by_id(&pool, a.id).await.unwrap().unwrap();
    assert!(!a.is_active);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_without_flag_keeps_status(pool: PgPool) {
    let a = HeroRepo::create(&pool, &hero("Ada", Some(true))).await.unwrap();
    let b = HeroRepo::create(&pool, &hero("Grace", Some(false))).await.unwrap();

    let input = UpdateHero {
        title: Some(Some("Engineer".to_string())),
        ..Default::default()
    };
    let b = HeroRepo::update(&pool, b.id, &input).await.unwrap().unwrap();
    assert_eq!(b.title.as_deref(), Some("Engineer"));
    assert!(!b.is_active);
    assert_eq!(active_hero_ids(&pool).await, vec![a.id]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_missing_row_rolls_back_demotion(pool: PgPool) {
    let a = HeroRepo::create(&pool, &hero("Ada", Some(true))).await.unwrap();

    let input = UpdateHero {
        is_active: Some(true),
        ..Default::default()
    };
    let result = HeroRepo::update(&pool, 999_999, &input).await.unwrap();
    assert!(result.is_none());

    assert_eq!(active_hero_ids(&pool).await, vec![a.id]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_deactivating_the_active_row_leaves_none_active(pool: PgPool) {
    let meta = SiteMetadataRepo::create(&pool, &CreateSiteMetadata::default())
        .await
        .unwrap();

    let input = UpdateSiteMetadata {
        is_active: Some(false),
        ..Default::default()
    };
    SiteMetadataRepo::update(&pool, meta.id, &input).await.unwrap();

    assert_eq!(
        SingletonRepo::count_active(&pool, SingletonKind::SiteMetadata)
            .await
            .unwrap(),
        0
    );
}

// ---------------------------------------------------------------------------
// Explicit activation
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_activate_switches_active_row(pool: PgPool) {
    let a = GetInTouchRepo::create(&pool, &CreateGetInTouch::default())
        .await
        .unwrap();
    let b = GetInTouchRepo::create(
        &pool,
        &CreateGetInTouch {
            is_active: Some(false),
            ..Default::default()
        },
    )
    .await
    .unwrap();

    let activated = GetInTouchRepo::activate(&pool, b.id).await.unwrap().unwrap();
    assert!(activated.is_active);
    assert_eq!(
        SingletonRepo::active_id(&pool, SingletonKind::GetInTouch)
            .await
            .unwrap(),
        Some(b.id)
    );

    let a = GetInTouchRepo::find_by_id(&pool, a.id).await.unwrap().unwrap();
    assert!(!a.is_active);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_activate_missing_row_changes_nothing(pool: PgPool) {
    let a = AboutRepo::create(&pool, &CreateAbout::default()).await.unwrap();

    let found = SingletonRepo::activate(&pool, SingletonKind::About, 424_242)
        .await
        .unwrap();
    assert!(!found);

    assert_eq!(
        SingletonRepo::active_id(&pool, SingletonKind::About)
            .await
            .unwrap(),
        Some(a.id)
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_activate_already_active_is_idempotent(pool: PgPool) {
    let a = HeroRepo::create(&pool, &hero("Ada", None)).await.unwrap();
    assert!(SingletonRepo::activate(&pool, SingletonKind::Hero, a.id)
        .await
        .unwrap());
    assert_eq!(active_hero_ids(&pool).await, vec![a.id]);
}

// ---------------------------------------------------------------------------
// Invariant across kinds and sequences
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_at_most_one_active_after_mixed_saves(pool: PgPool) {
    let mut ids = Vec::new();
    for i in 0..5 {
        let g = GetInTouchRepo::create(
            &pool,
            &CreateGetInTouch {
                title: Some(format!("Contact {i}")),
                is_active: Some(i % 2 == 0),
                ..Default::default()
            },
        )
        .await
        .unwrap();
        ids.push(g.id);
    }

    GetInTouchRepo::update(
        &pool,
        ids[1],
        &UpdateGetInTouch {
            is_active: Some(true),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    GetInTouchRepo::activate(&pool, ids[3]).await.unwrap();
    GetInTouchRepo::delete(&pool, ids[3]).await.unwrap();
    GetInTouchRepo::activate(&pool, ids[0]).await.unwrap();

    for kind in SingletonKind::ALL {
        let count = SingletonRepo::count_active(&pool, kind).await.unwrap();
        assert!(count <= 1, "{kind:?} has {count} active rows");
    }
    assert_eq!(
        SingletonRepo::active_id(&pool, SingletonKind::GetInTouch)
            .await
            .unwrap(),
        Some(ids[0])
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_kinds_are_independent(pool: PgPool) {
    let h = HeroRepo::create(&pool, &hero("Ada", None)).await.unwrap();
    let a = AboutRepo::create(&pool, &CreateAbout::default()).await.unwrap();

    assert!(HeroRepo::find_by_id(&pool, h.id).await.unwrap().unwrap().is_active);
    assert!(AboutRepo::find_by_id(&pool, a.id).await.unwrap().unwrap().is_active);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_storage_rejects_second_active_row_written_directly(pool: PgPool) {
    HeroRepo::create(&pool, &hero("Ada", None)).await.unwrap();

    let result = sqlx::query("INSERT INTO heroes (full_name, is_active) VALUES ('Rogue', true)")
        .execute(&pool)
        .await;

    let err = result.expect_err("partial unique index must reject a second active row");
    let db_err = err.as_database_error().expect("database error");
    assert_eq!(db_err.code().as_deref(), Some("23505"));
    assert_eq!(db_err.constraint(), Some("uq_heroes_single_active"));
}

// ---------------------------------------------------------------------------
// Concurrency
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_concurrent_activations_leave_exactly_one_active(pool: PgPool) {
    let mut ids = Vec::new();
    for i in 0..8 {
        let h = HeroRepo::create(&pool, &hero(&format!("H{i}"), Some(false)))
            .await
            .unwrap();
        ids.push(h.id);
    }

    let mut handles = Vec::new();
    for id in ids.clone() {
        let pool = pool.clone();
        handles.push(tokio::spawn(async move {
            SingletonRepo::activate(&pool, SingletonKind::Hero, id).await
        }));
    }
    for handle in handles {
        assert!(handle.await.unwrap().unwrap());
    }

    let active = active_hero_ids(&pool).await;
    assert_eq!(active.len(), 1);
    assert!(ids.contains(&active[0]));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_concurrent_creates_leave_exactly_one_active(pool: PgPool) {
    let mut handles = Vec::new();
    for i in 0..8 {
        let pool = pool.clone();
        handles.push(tokio::spawn(async move {
            HeroRepo::create(&pool, &hero(&format!("H{i}"), None)).await
        }));
    }
    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    assert_eq!(
        SingletonRepo::count_active(&pool, SingletonKind::Hero)
            .await
            .unwrap(),
        1
    );
}
