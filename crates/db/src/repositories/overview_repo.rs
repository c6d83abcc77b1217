//! Repository backing the admin overview.

use folio_core::singleton::SingletonKind;
use sqlx::PgPool;

use crate::models::overview::{ActiveSingleton, ContentCounts, Overview};
use crate::repositories::SingletonRepo;

pub struct OverviewRepo;

impl OverviewRepo {
    /// Row counts for every content table plus the active id of each singleton kind.
    pub async fn load(pool: &PgPool) -> Result<Overview, sqlx::Error> {
        let counts = sqlx::query_as::<_, ContentCounts>(
            "SELECT
                (SELECT COUNT(*) FROM site_metadata) AS site_metadata,
                (SELECT COUNT(*) FROM heroes) AS heroes,
                (SELECT COUNT(*) FROM abouts) AS abouts,
                (SELECT COUNT(*) FROM get_in_touch) AS get_in_touch,
                (SELECT COUNT(*) FROM info_items) AS info_items,
                (SELECT COUNT(*) FROM social_links) AS social_links,
                (SELECT COUNT(*) FROM projects) AS projects,
                (SELECT COUNT(*) FROM skill_groups) AS skill_groups,
                (SELECT COUNT(*) FROM skills) AS skills,
                (SELECT COUNT(*) FROM processes) AS processes,
                (SELECT COUNT(*) FROM steps) AS steps,
                (SELECT COUNT(*) FROM messages) AS messages",
        )
        .fetch_one(pool)
        .await?;

        let mut singletons = Vec::with_capacity(SingletonKind::ALL.len());
        for kind in SingletonKind::ALL {
            singletons.push(ActiveSingleton {
                kind,
                active_id: SingletonRepo::active_id(pool, kind).await?,
            });
        }

        Ok(Overview { counts, singletons })
    }
}
