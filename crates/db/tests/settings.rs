//! Integration tests for the site settings key/value store.

use std::collections::BTreeMap;

use sqlx::PgPool;

use lectern_db::repositories::SiteSettingRepo;

fn map(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_upsert_round_trip(pool: PgPool) {
    SiteSettingRepo::set_many(&pool, &map(&[("hero_title", "X")]))
        .await
        .unwrap();

    let settings = SiteSettingRepo::get_all(&pool).await.unwrap();
    assert_eq!(
        settings.get("hero_title"),
        Some(&Some("X".to_string()))
    );
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_upsert_overwrites_existing_key(pool: PgPool) {
    SiteSettingRepo::set_many(&pool, &map(&[("hero_title", "X")]))
        .await
        .unwrap();
    SiteSettingRepo::set_many(&pool, &map(&[("hero_title", "Y")]))
        .await
        .unwrap();

    let settings = SiteSettingRepo::get_all(&pool).await.unwrap();
    // Latest value only, no duplicate entries.
    assert_eq!(settings.len(), 1);
    assert_eq!(settings.get("hero_title"), Some(&Some("Y".to_string())));
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_set_many_writes_all_keys(pool: PgPool) {
    SiteSettingRepo::set_many(
        &pool,
        &map(&[
            ("hero_title", "Medical Lectures"),
            ("about_content", "# About\n..."),
            ("ada_content", "# ADA 2026\n..."),
        ]),
    )
    .await
    .unwrap();

    let settings = SiteSettingRepo::get_all(&pool).await.unwrap();
    assert_eq!(settings.len(), 3);
    assert_eq!(
        settings.get("about_content"),
        Some(&Some("# About\n...".to_string()))
    );
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_get_all_empty_store(pool: PgPool) {
    let settings = SiteSettingRepo::get_all(&pool).await.unwrap();
    assert!(settings.is_empty());
}
