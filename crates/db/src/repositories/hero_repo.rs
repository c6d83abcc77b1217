//! Repository for the `heroes` table.

use folio_core::patch::patched_str;
use folio_core::singleton::{self, SingletonKind};
use folio_core::types::DbId;
use sqlx::PgPool;

use crate::models::filter::ListFilter;
use crate::models::hero::{CreateHero, Hero, UpdateHero, DEFAULT_GREETING};
use crate::repositories::SingletonRepo;

/// Column list shared across queries to avoid repetition.
pub(crate) const COLUMNS: &str =
    "id, greeting, full_name, title, bio, is_active, created_at, updated_at";

const KIND: SingletonKind = SingletonKind::Hero;

/// Provides CRUD operations for heroes. Saving an active hero deactivates
/// every other hero in the same transaction.
pub struct HeroRepo;

impl HeroRepo {
    /// Insert a new hero, returning the created row.
    ///
    /// `is_active` defaults to `true`, in which case the previously active
    /// hero (if any) is deactivated.
    pub async fn create(pool: &PgPool, input: &CreateHero) -> Result<Hero, sqlx::Error> {
        let mut tx = pool.begin().await?;

        if singleton::activates(input.is_active, true) {
            SingletonRepo::demote_siblings(&mut *tx, KIND, None).await?;
        }

        let query = format!(
            "INSERT INTO heroes (greeting, full_name, title, bio, is_active)
             VALUES (COALESCE($1, $6), $2, $3, $4, COALESCE($5, true))
             RETURNING {COLUMNS}"
        );
        let hero = sqlx::query_as::<_, Hero>(&query)
            .bind(&input.greeting)
            .bind(&input.full_name)
            .bind(&input.title)
            .bind(&input.bio)
            .bind(input.is_active)
            .bind(DEFAULT_GREETING)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(hero)
    }

    /// Find a hero by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Hero>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM heroes WHERE id = $1");
        sqlx::query_as::<_, Hero>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List heroes, newest first, optionally filtered by `is_active` and
    /// a search over name, title and greeting.
    pub async fn list(pool: &PgPool, filter: &ListFilter) -> Result<Vec<Hero>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM heroes
             WHERE ($1::BOOLEAN IS NULL OR is_active = $1)
               AND ($2::TEXT IS NULL
                    OR full_name ILIKE $2 OR title ILIKE $2 OR greeting ILIKE $2)
             ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, Hero>(&query)
            .bind(filter.is_active)
            .bind(filter.pattern())
            .fetch_all(pool)
            .await
    }

    /// Update a hero. Omitted fields are kept and `null` fields are cleared.
    ///
    /// Setting `is_active` to `true` deactivates every other hero in the same
    /// transaction. Returns `None` (and changes nothing) if no row with the
    /// given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateHero,
    ) -> Result<Option<Hero>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        if singleton::activates(input.is_active, false) {
            SingletonRepo::demote_siblings(&mut *tx, KIND, Some(id)).await?;
        }

        let query = format!(
            "UPDATE heroes SET
                greeting = CASE WHEN $2 THEN $3 ELSE greeting END,
                full_name = CASE WHEN $4 THEN $5 ELSE full_name END,
                title = CASE WHEN $6 THEN $7 ELSE title END,
                bio = CASE WHEN $8 THEN $9 ELSE bio END,
                is_active = COALESCE($10, is_active)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let hero = sqlx::query_as::<_, Hero>(&query)
            .bind(id)
            .bind(input.greeting.is_some())
            .bind(patched_str(&input.greeting))
            .bind(input.full_name.is_some())
            .bind(patched_str(&input.full_name))
            .bind(input.title.is_some())
            .bind(patched_str(&input.title))
            .bind(input.bio.is_some())
            .bind(patched_str(&input.bio))
            .bind(input.is_active)
            .fetch_optional(&mut *tx)
            .await?;

        if hero.is_some() {
            tx.commit().await?;
        }
        Ok(hero)
    }

    /// Make this hero the single active one. Returns `None` if it does not exist.
    pub async fn activate(pool: &PgPool, id: DbId) -> Result<Option<Hero>, sqlx::Error> {
        SingletonRepo::activate_returning(pool, KIND, id, COLUMNS).await
    }

    /// Permanently delete a hero by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM heroes WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
