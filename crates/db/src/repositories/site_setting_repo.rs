//! Repository for the `site_settings` key/value table.

use std::collections::BTreeMap;

use sqlx::PgPool;

use crate::models::site_setting::SiteSetting;

pub struct SiteSettingRepo;

impl SiteSettingRepo {
    /// All settings as a key → value map. Missing keys are simply absent;
    /// callers apply their own defaults.
    pub async fn get_all(pool: &PgPool) -> Result<BTreeMap<String, Option<String>>, sqlx::Error> {
        let rows = sqlx::query_as::<_, SiteSetting>("SELECT key, value FROM site_settings")
            .fetch_all(pool)
            .await?;
        Ok(rows.into_iter().map(|s| (s.key, s.value)).collect())
    }

    /// Upsert every key/value pair in one transaction: insert when the key
    /// is absent, overwrite the value when it exists. Idempotent.
    pub async fn set_many(
        pool: &PgPool,
        settings: &BTreeMap<String, String>,
    ) -> Result<(), sqlx::Error> {
        let mut tx = pool.begin().await?;

        for (key, value) in settings {
            sqlx::query(
                "INSERT INTO site_settings (key, value) VALUES ($1, $2)
                 ON CONFLICT (key) DO UPDATE SET value = EXCLUDED.value",
            )
            .bind(key)
            .bind(value)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        Ok(())
    }

    /// All settings rows, for the admin export.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<SiteSetting>, sqlx::Error> {
        sqlx::query_as::<_, SiteSetting>("SELECT key, value FROM site_settings")
            .fetch_all(pool)
            .await
    }
}
