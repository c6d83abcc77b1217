//! At-most-one-active enforcement shared by the singleton content tables.
//!
//! Every write that leaves a singleton row active runs inside one transaction:
//!
//! 1. take `pg_advisory_xact_lock` for the kind, serialising activations;
//! 2. flip every other active row of the kind to inactive;
//! 3. write the row itself.
//!
//! The lock is released at commit or rollback, so a failure in any step
//! leaves both the row and its siblings unchanged, and concurrent activations
//! resolve in commit order.

use folio_core::singleton::SingletonKind;
use folio_core::types::DbId;
use sqlx::postgres::PgRow;
use sqlx::{FromRow, PgConnection, PgPool};

/// Provides the transactional building blocks for singleton content types.
pub struct SingletonRepo;

impl SingletonRepo {
    /// Lock `kind` for the rest of the current transaction and deactivate all
    /// of its active rows except `keep_id`.
    ///
    /// Must be called on a connection that is inside a transaction, before
    /// the row being activated is written. Returns the number of rows demoted.
    pub async fn demote_siblings(
        conn: &mut PgConnection,
        kind: SingletonKind,
        keep_id: Option<DbId>,
    ) -> Result<u64, sqlx::Error> {
        sqlx::query("SELECT pg_advisory_xact_lock($1)")
            .bind(kind.lock_key())
            .execute(&mut *conn)
            .await?;

        let query = format!(
            "UPDATE {} SET is_active = false
             WHERE is_active AND ($1::BIGINT IS NULL OR id <> $1)",
            kind.table()
        );
        let result = sqlx::query(&query)
            .bind(keep_id)
            .execute(&mut *conn)
            .await?;

        if result.rows_affected() > 0 {
            tracing::debug!(
                entity = kind.entity_name(),
                demoted = result.rows_affected(),
                "Demoted previously active rows"
            );
        }
        Ok(result.rows_affected())
    }

    /// Make row `id` the single active row of `kind`, returning it.
    ///
    /// Returns `None` if no such row exists; the transaction is then rolled
    /// back and the previously active row stays active.
    pub async fn activate_returning<T>(
        pool: &PgPool,
        kind: SingletonKind,
        id: DbId,
        columns: &str,
    ) -> Result<Option<T>, sqlx::Error>
    where
        T: for<'r> FromRow<'r, PgRow> + Send + Unpin,
    {
        let mut tx = pool.begin().await?;

        Self::demote_siblings(&mut *tx, kind, Some(id)).await?;

        let query = format!(
            "UPDATE {} SET is_active = true WHERE id = $1 RETURNING {columns}",
            kind.table()
        );
        let row = sqlx::query_as::<_, T>(&query)
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?;

        if row.is_some() {
            tx.commit().await?;
            tracing::info!(entity = kind.entity_name(), id, "Activated");
        }
        Ok(row)
    }

    /// Make row `id` the single active row of `kind`.
    ///
    /// Returns `false` if no such row exists (nothing is changed).
    pub async fn activate(
        pool: &PgPool,
        kind: SingletonKind,
        id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let row: Option<(DbId,)> = Self::activate_returning(pool, kind, id, "id").await?;
        Ok(row.is_some())
    }

    /// Id of the active row of `kind`, if any.
    pub async fn active_id(pool: &PgPool, kind: SingletonKind) -> Result<Option<DbId>, sqlx::Error> {
        let query = format!(
            "SELECT id FROM {} WHERE is_active ORDER BY id LIMIT 1",
            kind.table()
        );
        let row: Option<(DbId,)> = sqlx::query_as(&query).fetch_optional(pool).await?;
        Ok(row.map(|r| r.0))
    }

    /// Number of active rows of `kind`. Never more than one.
    pub async fn count_active(pool: &PgPool, kind: SingletonKind) -> Result<i64, sqlx::Error> {
        let query = format!("SELECT COUNT(*) FROM {} WHERE is_active", kind.table());
        let row: (i64,) = sqlx::query_as(&query).fetch_one(pool).await?;
        Ok(row.0)
    }
}
