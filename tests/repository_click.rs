//! DB-backed tests for the Postgres click repository, covering the
//! optional-column merge that lives in the upsert statement.

use std::sync::Arc;

use chrono::{TimeZone, Utc};
use sqlx::PgPool;

use click_tracker::domain::optional_fields::OptionalFields;
use click_tracker::domain::repositories::{ClickRepository, ClickWrite};
use click_tracker::infrastructure::persistence::PgClickRepository;

fn base_write(public_id: &str) -> ClickWrite {
    let t = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
    ClickWrite {
        public_id: public_id.to_string(),
        external_id: String::new(),
        cost: 0,
        revenue: 0,
        view_time: t,
        view_output_url: String::new(),
        tokens: "[]".to_string(),
        ip: "203.0.113.9".to_string(),
        user_agent: "Mozilla/5.0".to_string(),
        language: "en".to_string(),
        device_type: "desktop".to_string(),
        device: String::new(),
        screen_resolution: String::new(),
        os: String::new(),
        os_version: String::new(),
        browser_name: String::new(),
        browser_version: String::new(),
        campaign_id: 7,
        traffic_source_id: 3,
        optional: OptionalFields::default(),
    }
}

#[sqlx::test]
async fn test_create_assigns_id_and_stores_optional_subset(pool: PgPool) {
    let repo = PgClickRepository::new(Arc::new(pool));

    let mut write = base_write("pub-create-1");
    write.optional.country = Some("US".to_string());

    let record = repo.create(write).await.unwrap();

    assert!(record.id >= 1);
    assert_eq!(record.public_id, "pub-create-1");
    assert_eq!(record.country.as_deref(), Some("US"));
    assert!(record.click_time.is_none());
    assert_eq!(record.tokens, "[]");
}

#[sqlx::test]
async fn test_upsert_sentinel_keeps_previous_optional_value(pool: PgPool) {
    let repo = PgClickRepository::new(Arc::new(pool));

    let mut write = base_write("pub-merge-1");
    write.optional.country = Some("US".to_string());
    let created = repo.create(write).await.unwrap();

    let t = Utc.with_ymd_and_hms(2024, 6, 2, 8, 0, 0).unwrap();
    let mut update = base_write("pub-merge-1");
    update.revenue = 150;
    update.optional.click_time = Some(t);

    let updated = repo.upsert(created.id, update).await.unwrap();

    // Unset optional columns merge; mandatory columns are re-asserted.
    assert_eq!(updated.click_time, Some(t));
    assert_eq!(updated.country.as_deref(), Some("US"));
    assert_eq!(updated.revenue, 150);
}

#[sqlx::test]
async fn test_upsert_set_value_overwrites_previous_optional_value(pool: PgPool) {
    let repo = PgClickRepository::new(Arc::new(pool));

    let mut write = base_write("pub-merge-2");
    write.optional.country = Some("US".to_string());
    let created = repo.create(write).await.unwrap();

    let mut update = base_write("pub-merge-2");
    update.optional.country = Some("DE".to_string());

    let updated = repo.upsert(created.id, update).await.unwrap();

    assert_eq!(updated.country.as_deref(), Some("DE"));
}

#[sqlx::test]
async fn test_upsert_never_replaces_stored_public_id(pool: PgPool) {
    let repo = PgClickRepository::new(Arc::new(pool));

    let created = repo.create(base_write("pub-keep-1")).await.unwrap();

    let update = base_write("pub-other");
    let updated = repo.upsert(created.id, update).await.unwrap();

    assert_eq!(updated.public_id, "pub-keep-1");
}

#[sqlx::test]
async fn test_upsert_missing_id_inserts_with_caller_public_id(pool: PgPool) {
    let repo = PgClickRepository::new(Arc::new(pool));

    let record = repo.upsert(42, base_write("pub-insert-42")).await.unwrap();

    assert_eq!(record.id, 42);
    assert_eq!(record.public_id, "pub-insert-42");

    let found = repo.find_by_id(42).await.unwrap();
    assert_eq!(found.unwrap().public_id, "pub-insert-42");
}

#[sqlx::test]
async fn test_find_by_public_id(pool: PgPool) {
    let repo = PgClickRepository::new(Arc::new(pool));

    let created = repo.create(base_write("pub-find-1")).await.unwrap();

    let found = repo.find_by_public_id("pub-find-1").await.unwrap();
    assert_eq!(found.unwrap().id, created.id);

    let missing = repo.find_by_public_id("pub-missing").await.unwrap();
    assert!(missing.is_none());
}
