//! Click record lifecycle service.

use std::sync::Arc;

use serde_json::json;

use crate::domain::entities::{Click, ClickCreation, decode_tokens, encode_tokens};
use crate::domain::repositories::{ClickRecord, ClickRepository, ClickWrite};
use crate::error::AppError;
use crate::utils::public_id::new_public_click_id;

/// Service owning the click record lifecycle: create, fetch by id, fetch by
/// public id, and upsert by id.
///
/// Composes the record store with token encoding and the optional-field merge
/// policy. No click state is cached here: every operation goes to the store,
/// whose row-level atomicity serializes concurrent upserts to the same id.
pub struct ClickService {
    repository: Arc<dyn ClickRepository>,
}

impl ClickService {
    /// Creates a new click service.
    pub fn new(repository: Arc<dyn ClickRepository>) -> Self {
        Self { repository }
    }

    /// Retrieves a click by its internal id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no record matches.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn get_by_id(&self, id: i64) -> Result<Click, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .map(materialize)
            .ok_or_else(|| AppError::not_found("Click not found", json!({ "id": id })))
    }

    /// Retrieves a click by its public identifier.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no record matches.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn get_by_public_id(&self, public_id: &str) -> Result<Click, AppError> {
        self.repository
            .find_by_public_id(public_id)
            .await?
            .map(materialize)
            .ok_or_else(|| {
                AppError::not_found("Click not found", json!({ "public_id": public_id }))
            })
    }

    /// Creates a new click record.
    ///
    /// Assigns a fresh 36-character public identifier, writes all mandatory
    /// attributes plus the supplied optional subset, and encodes custom
    /// tokens. Token encoding never blocks the write.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if a mandatory relation is missing.
    /// Returns [`AppError::Store`] if a mandatory relation is unresolvable.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn create(&self, creation: ClickCreation) -> Result<Click, AppError> {
        ensure_mandatory_relations(creation.campaign_id, creation.traffic_source_id)?;

        let write = ClickWrite {
            public_id: new_public_click_id(),
            external_id: creation.external_id,
            cost: creation.cost,
            revenue: creation.revenue,
            view_time: creation.view_time,
            view_output_url: creation.view_output_url,
            tokens: encode_tokens(&creation.tokens),
            ip: creation.ip,
            user_agent: creation.user_agent,
            language: creation.language,
            device_type: creation.device_type,
            device: creation.device,
            screen_resolution: creation.screen_resolution,
            os: creation.os,
            os_version: creation.os_version,
            browser_name: creation.browser_name,
            browser_version: creation.browser_version,
            campaign_id: creation.campaign_id,
            traffic_source_id: creation.traffic_source_id,
            optional: creation.optional,
        };

        let record = self.repository.create(write).await?;
        Ok(materialize(record))
    }

    /// Creates-or-updates the click with the given id.
    ///
    /// On update, mandatory attributes are re-asserted in full and optional
    /// attributes merge: unset entries leave the stored values untouched.
    /// On insert, the caller-supplied public id is written as-is so a
    /// funnel-stage event can be re-delivered idempotently. The stored public
    /// id is never regenerated either way.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if a mandatory relation is missing.
    /// Returns [`AppError::Store`] if a mandatory relation is unresolvable.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn upsert_by_id(&self, id: i64, click: Click) -> Result<Click, AppError> {
        ensure_mandatory_relations(click.campaign_id, click.traffic_source_id)?;

        let write = ClickWrite {
            public_id: click.public_id.clone(),
            external_id: click.external_id.clone(),
            cost: click.cost,
            revenue: click.revenue,
            view_time: click.view_time,
            view_output_url: click.view_output_url.clone(),
            tokens: encode_tokens(&click.tokens),
            ip: click.ip.clone(),
            user_agent: click.user_agent.clone(),
            language: click.language.clone(),
            device_type: click.device_type.clone(),
            device: click.device.clone(),
            screen_resolution: click.screen_resolution.clone(),
            os: click.os.clone(),
            os_version: click.os_version.clone(),
            browser_name: click.browser_name.clone(),
            browser_version: click.browser_version.clone(),
            campaign_id: click.campaign_id,
            traffic_source_id: click.traffic_source_id,
            optional: click.optional_fields(),
        };

        let record = self.repository.upsert(id, write).await?;
        Ok(materialize(record))
    }
}

/// Checks that the mandatory relations are present.
///
/// A zero id is the wire sentinel for "not supplied", which for campaign and
/// traffic source is a caller error rather than a default-fill situation.
fn ensure_mandatory_relations(campaign_id: i64, traffic_source_id: i64) -> Result<(), AppError> {
    if campaign_id == 0 || traffic_source_id == 0 {
        return Err(AppError::bad_request(
            "campaign_id and traffic_source_id are mandatory",
            json!({ "campaign_id": campaign_id, "traffic_source_id": traffic_source_id }),
        ));
    }
    Ok(())
}

/// Converts a stored record into the typed entity, decoding the token blob.
///
/// A malformed blob degrades to an empty token sequence so legacy data never
/// blocks reads.
fn materialize(record: ClickRecord) -> Click {
    let tokens = decode_tokens(&record.tokens).into_tokens();
    Click {
        id: record.id,
        public_id: record.public_id,
        external_id: record.external_id,
        cost: record.cost,
        revenue: record.revenue,
        view_time: record.view_time,
        click_time: record.click_time,
        conv_time: record.conv_time,
        view_output_url: record.view_output_url,
        click_output_url: record.click_output_url,
        ip: record.ip,
        isp: record.isp,
        user_agent: record.user_agent,
        language: record.language,
        country: record.country,
        region: record.region,
        city: record.city,
        device_type: record.device_type,
        device: record.device,
        screen_resolution: record.screen_resolution,
        os: record.os,
        os_version: record.os_version,
        browser_name: record.browser_name,
        browser_version: record.browser_version,
        campaign_id: record.campaign_id,
        traffic_source_id: record.traffic_source_id,
        affiliate_network_id: record.affiliate_network_id,
        landing_page_id: record.landing_page_id,
        offer_id: record.offer_id,
        saved_flow_id: record.saved_flow_id,
        tokens,
        created_at: record.created_at,
        updated_at: record.updated_at,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Token;
    use crate::domain::entities::test_support::minimal_click;
    use crate::domain::optional_fields::OptionalFields;
    use crate::domain::repositories::MockClickRepository;
    use crate::domain::repositories::test_support::stored_click as test_record;
    use chrono::{TimeZone, Utc};

    fn test_creation() -> ClickCreation {
        let t = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
        ClickCreation {
            external_id: String::new(),
            cost: 0,
            revenue: 0,
            view_time: t,
            view_output_url: String::new(),
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
            tokens: vec![],
        }
    }

    #[tokio::test]
    async fn test_create_generates_uuid_public_id() {
        let mut mock_repo = MockClickRepository::new();
        mock_repo
            .expect_create()
            .withf(|write| write.public_id.len() == 36 && write.tokens == "[]")
            .times(1)
            .returning(|write| {
                let mut record = test_record(10, "[]");
                record.public_id = write.public_id;
                Ok(record)
            });

        let service = ClickService::new(Arc::new(mock_repo));
        let click = service.create(test_creation()).await.unwrap();

        assert_eq!(click.public_id.len(), 36);
        assert_eq!(click.campaign_id, 7);
        assert_eq!(click.traffic_source_id, 3);
        assert!(click.tokens.is_empty());
    }

    #[tokio::test]
    async fn test_create_encodes_tokens() {
        let mut mock_repo = MockClickRepository::new();
        mock_repo
            .expect_create()
            .withf(|write| write.tokens == r#"[{"name":"sub1","value":"abc"}]"#)
            .times(1)
            .returning(|write| {
                let mut record = test_record(10, "[]");
                record.tokens = write.tokens;
                Ok(record)
            });

        let service = ClickService::new(Arc::new(mock_repo));

        let mut creation = test_creation();
        creation.tokens = vec![Token::new("sub1", "abc")];

        let click = service.create(creation).await.unwrap();
        assert_eq!(click.tokens, vec![Token::new("sub1", "abc")]);
    }

    #[tokio::test]
    async fn test_create_rejects_missing_mandatory_relation() {
        let mut mock_repo = MockClickRepository::new();
        mock_repo.expect_create().times(0);

        let service = ClickService::new(Arc::new(mock_repo));

        let mut creation = test_creation();
        creation.campaign_id = 0;

        let result = service.create(creation).await;
        assert!(matches!(result.unwrap_err(), AppError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_get_by_id_not_found() {
        let mut mock_repo = MockClickRepository::new();
        mock_repo
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(None));

        let service = ClickService::new(Arc::new(mock_repo));
        let result = service.get_by_id(42).await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_get_by_public_id_found() {
        let mut mock_repo = MockClickRepository::new();
        mock_repo
            .expect_find_by_public_id()
            .withf(|public_id| public_id == "a3f1c9e2-7b4d-4e8a-9c21-5d6f7a8b9c0d")
            .times(1)
            .returning(|_| Ok(Some(test_record(5, "[]"))));

        let service = ClickService::new(Arc::new(mock_repo));
        let click = service
            .get_by_public_id("a3f1c9e2-7b4d-4e8a-9c21-5d6f7a8b9c0d")
            .await
            .unwrap();

        assert_eq!(click.id, 5);
    }

    #[tokio::test]
    async fn test_read_degrades_malformed_token_blob_to_empty() {
        let mut mock_repo = MockClickRepository::new();
        mock_repo
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(Some(test_record(5, "not json"))));

        let service = ClickService::new(Arc::new(mock_repo));
        let click = service.get_by_id(5).await.unwrap();

        assert!(click.tokens.is_empty());
    }

    #[tokio::test]
    async fn test_upsert_passes_caller_public_id_and_optional_subset() {
        let mut mock_repo = MockClickRepository::new();
        mock_repo
            .expect_upsert()
            .withf(|id, write| {
                *id == 42
                    && write.public_id == "a3f1c9e2-7b4d-4e8a-9c21-5d6f7a8b9c0d"
                    && write.optional.country.as_deref() == Some("US")
                    && write.optional.click_time.is_none()
            })
            .times(1)
            .returning(|id, write| {
                let mut record = test_record(id, "[]");
                record.country = write.optional.country;
                Ok(record)
            });

        let service = ClickService::new(Arc::new(mock_repo));

        let mut click = minimal_click();
        click.country = Some("US".to_string());

        let updated = service.upsert_by_id(42, click).await.unwrap();
        assert_eq!(updated.country.as_deref(), Some("US"));
    }

    #[tokio::test]
    async fn test_upsert_rejects_missing_mandatory_relation() {
        let mut mock_repo = MockClickRepository::new();
        mock_repo.expect_upsert().times(0);

        let service = ClickService::new(Arc::new(mock_repo));

        let mut click = minimal_click();
        click.traffic_source_id = 0;

        let result = service.upsert_by_id(1, click).await;
        assert!(matches!(result.unwrap_err(), AppError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_store_error_propagates() {
        let mut mock_repo = MockClickRepository::new();
        mock_repo.expect_create().times(1).returning(|_| {
            Err(AppError::store(
                "Invalid record reference",
                json!({ "constraint": "clicks_campaign_id_fkey" }),
            ))
        });

        let service = ClickService::new(Arc::new(mock_repo));
        let result = service.create(test_creation()).await;

        assert!(matches!(result.unwrap_err(), AppError::Store { .. }));
    }
}
