//! DTOs for click tracking endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::{Click, ClickCreation, Token};
use crate::domain::optional_fields::{OptionalFields, present_id, present_text, present_time};

/// A custom tracking token on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenDto {
    pub name: String,
    pub value: String,
}

impl From<TokenDto> for Token {
    fn from(dto: TokenDto) -> Self {
        Token::new(dto.name, dto.value)
    }
}

impl From<Token> for TokenDto {
    fn from(token: Token) -> Self {
        Self {
            name: token.name,
            value: token.value,
        }
    }
}

/// Request to record a new click.
///
/// Campaign and traffic source are mandatory; economics default to zero
/// (a legitimate value, not a sentinel). Optional attributes may be omitted
/// or sent as their legacy zero-value sentinel; both mean "not supplied".
#[derive(Debug, Deserialize, Validate)]
pub struct CreateClickRequest {
    #[validate(range(min = 1, message = "campaign_id is mandatory"))]
    pub campaign_id: i64,
    #[validate(range(min = 1, message = "traffic_source_id is mandatory"))]
    pub traffic_source_id: i64,
    #[serde(default)]
    pub external_id: String,
    #[serde(default)]
    pub cost: i64,
    #[serde(default)]
    pub revenue: i64,
    /// Defaults to the server-observed time of the view event.
    pub view_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub view_output_url: String,
    #[serde(default)]
    pub ip: String,
    #[serde(default)]
    pub user_agent: String,
    #[serde(default)]
    pub language: String,
    #[serde(default)]
    pub device_type: String,
    #[serde(default)]
    pub device: String,
    #[serde(default)]
    pub screen_resolution: String,
    #[serde(default)]
    pub os: String,
    #[serde(default)]
    pub os_version: String,
    #[serde(default)]
    pub browser_name: String,
    #[serde(default)]
    pub browser_version: String,
    #[serde(default)]
    pub click_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub conv_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub click_output_url: Option<String>,
    #[serde(default)]
    pub isp: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub affiliate_network_id: Option<i64>,
    #[serde(default)]
    pub landing_page_id: Option<i64>,
    #[serde(default)]
    pub offer_id: Option<i64>,
    #[serde(default)]
    pub saved_flow_id: Option<i64>,
    #[serde(default)]
    pub tokens: Vec<TokenDto>,
}

impl CreateClickRequest {
    /// Converts the request into the domain creation input.
    ///
    /// Legacy sentinels on optional attributes (empty string, zero id) are
    /// normalized to "absent" here, at the edge.
    pub fn into_creation(self) -> ClickCreation {
        ClickCreation {
            external_id: self.external_id,
            cost: self.cost,
            revenue: self.revenue,
            view_time: self.view_time.unwrap_or_else(Utc::now),
            view_output_url: self.view_output_url,
            ip: self.ip,
            user_agent: self.user_agent,
            language: self.language,
            device_type: self.device_type,
            device: self.device,
            screen_resolution: self.screen_resolution,
            os: self.os,
            os_version: self.os_version,
            browser_name: self.browser_name,
            browser_version: self.browser_version,
            campaign_id: self.campaign_id,
            traffic_source_id: self.traffic_source_id,
            optional: OptionalFields {
                click_time: self.click_time.and_then(present_time),
                conv_time: self.conv_time.and_then(present_time),
                click_output_url: self.click_output_url.and_then(present_text),
                isp: self.isp.and_then(present_text),
                country: self.country.and_then(present_text),
                region: self.region.and_then(present_text),
                city: self.city.and_then(present_text),
                affiliate_network_id: self.affiliate_network_id.and_then(present_id),
                landing_page_id: self.landing_page_id.and_then(present_id),
                offer_id: self.offer_id.and_then(present_id),
                saved_flow_id: self.saved_flow_id.and_then(present_id),
            },
            tokens: self.tokens.into_iter().map(Into::into).collect(),
        }
    }
}

/// Request to create-or-update a click at a known id.
///
/// Carries the full click state for the funnel stage being reported. The
/// public id is caller-controlled so a stage event can be re-delivered
/// idempotently; on update the stored public id wins.
#[derive(Debug, Deserialize, Validate)]
pub struct UpsertClickRequest {
    #[validate(length(min = 1, message = "public_id is mandatory"))]
    pub public_id: String,
    #[validate(range(min = 1, message = "campaign_id is mandatory"))]
    pub campaign_id: i64,
    #[validate(range(min = 1, message = "traffic_source_id is mandatory"))]
    pub traffic_source_id: i64,
    #[serde(default)]
    pub external_id: String,
    #[serde(default)]
    pub cost: i64,
    #[serde(default)]
    pub revenue: i64,
    pub view_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub view_output_url: String,
    #[serde(default)]
    pub ip: String,
    #[serde(default)]
    pub user_agent: String,
    #[serde(default)]
    pub language: String,
    #[serde(default)]
    pub device_type: String,
    #[serde(default)]
    pub device: String,
    #[serde(default)]
    pub screen_resolution: String,
    #[serde(default)]
    pub os: String,
    #[serde(default)]
    pub os_version: String,
    #[serde(default)]
    pub browser_name: String,
    #[serde(default)]
    pub browser_version: String,
    #[serde(default)]
    pub click_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub conv_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub click_output_url: Option<String>,
    #[serde(default)]
    pub isp: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub affiliate_network_id: Option<i64>,
    #[serde(default)]
    pub landing_page_id: Option<i64>,
    #[serde(default)]
    pub offer_id: Option<i64>,
    #[serde(default)]
    pub saved_flow_id: Option<i64>,
    #[serde(default)]
    pub tokens: Vec<TokenDto>,
}

impl UpsertClickRequest {
    /// Converts the request into a full click for the upsert path.
    ///
    /// `id` comes from the URL; the store-maintained timestamps carried here
    /// are placeholders and are never written.
    pub fn into_click(self, id: i64) -> Click {
        let now = Utc::now();
        Click {
            id,
            public_id: self.public_id,
            external_id: self.external_id,
            cost: self.cost,
            revenue: self.revenue,
            view_time: self.view_time.unwrap_or(now),
            click_time: self.click_time.and_then(present_time),
            conv_time: self.conv_time.and_then(present_time),
            view_output_url: self.view_output_url,
            click_output_url: self.click_output_url.and_then(present_text),
            ip: self.ip,
            isp: self.isp.and_then(present_text),
            user_agent: self.user_agent,
            language: self.language,
            country: self.country.and_then(present_text),
            region: self.region.and_then(present_text),
            city: self.city.and_then(present_text),
            device_type: self.device_type,
            device: self.device,
            screen_resolution: self.screen_resolution,
            os: self.os,
            os_version: self.os_version,
            browser_name: self.browser_name,
            browser_version: self.browser_version,
            campaign_id: self.campaign_id,
            traffic_source_id: self.traffic_source_id,
            affiliate_network_id: self.affiliate_network_id.and_then(present_id),
            landing_page_id: self.landing_page_id.and_then(present_id),
            offer_id: self.offer_id.and_then(present_id),
            saved_flow_id: self.saved_flow_id.and_then(present_id),
            tokens: self.tokens.into_iter().map(Into::into).collect(),
            created_at: now,
            updated_at: now,
        }
    }
}

/// A click record as returned to callers.
#[derive(Debug, Serialize)]
pub struct ClickResponse {
    pub id: i64,
    pub public_id: String,
    pub external_id: String,
    pub cost: i64,
    pub revenue: i64,
    pub view_time: DateTime<Utc>,
    pub click_time: Option<DateTime<Utc>>,
    pub conv_time: Option<DateTime<Utc>>,
    pub view_output_url: String,
    pub click_output_url: Option<String>,
    pub ip: String,
    pub isp: Option<String>,
    pub user_agent: String,
    pub language: String,
    pub country: Option<String>,
    pub region: Option<String>,
    pub city: Option<String>,
    pub device_type: String,
    pub device: String,
    pub screen_resolution: String,
    pub os: String,
    pub os_version: String,
    pub browser_name: String,
    pub browser_version: String,
    pub campaign_id: i64,
    pub traffic_source_id: i64,
    pub affiliate_network_id: Option<i64>,
    pub landing_page_id: Option<i64>,
    pub offer_id: Option<i64>,
    pub saved_flow_id: Option<i64>,
    pub tokens: Vec<TokenDto>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Click> for ClickResponse {
    fn from(click: Click) -> Self {
        Self {
            id: click.id,
            public_id: click.public_id,
            external_id: click.external_id,
            cost: click.cost,
            revenue: click.revenue,
            view_time: click.view_time,
            click_time: click.click_time,
            conv_time: click.conv_time,
            view_output_url: click.view_output_url,
            click_output_url: click.click_output_url,
            ip: click.ip,
            isp: click.isp,
            user_agent: click.user_agent,
            language: click.language,
            country: click.country,
            region: click.region,
            city: click.city,
            device_type: click.device_type,
            device: click.device,
            screen_resolution: click.screen_resolution,
            os: click.os,
            os_version: click.os_version,
            browser_name: click.browser_name,
            browser_version: click.browser_version,
            campaign_id: click.campaign_id,
            traffic_source_id: click.traffic_source_id,
            affiliate_network_id: click.affiliate_network_id,
            landing_page_id: click.landing_page_id,
            offer_id: click.offer_id,
            saved_flow_id: click.saved_flow_id,
            tokens: click.tokens.into_iter().map(Into::into).collect(),
            created_at: click.created_at,
            updated_at: click.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_create_request_minimal_deserializes() {
        let req: CreateClickRequest = serde_json::from_value(json!({
            "campaign_id": 7,
            "traffic_source_id": 3
        }))
        .unwrap();

        assert!(req.validate().is_ok());

        let creation = req.into_creation();
        assert_eq!(creation.campaign_id, 7);
        assert_eq!(creation.cost, 0);
        assert_eq!(creation.revenue, 0);
        assert!(creation.optional.is_empty());
        assert!(creation.tokens.is_empty());
    }

    #[test]
    fn test_create_request_missing_campaign_fails_validation() {
        let req: CreateClickRequest = serde_json::from_value(json!({
            "campaign_id": 0,
            "traffic_source_id": 3
        }))
        .unwrap();

        assert!(req.validate().is_err());
    }

    #[test]
    fn test_create_request_sentinels_normalize_to_absent() {
        let req: CreateClickRequest = serde_json::from_value(json!({
            "campaign_id": 7,
            "traffic_source_id": 3,
            "country": "",
            "offer_id": 0,
            "city": "Austin"
        }))
        .unwrap();

        let creation = req.into_creation();
        assert!(creation.optional.country.is_none());
        assert!(creation.optional.offer_id.is_none());
        assert_eq!(creation.optional.city.as_deref(), Some("Austin"));
    }

    #[test]
    fn test_upsert_request_uses_path_id_and_keeps_public_id() {
        let req: UpsertClickRequest = serde_json::from_value(json!({
            "public_id": "a3f1c9e2-7b4d-4e8a-9c21-5d6f7a8b9c0d",
            "campaign_id": 7,
            "traffic_source_id": 3,
            "click_time": "2024-06-01T12:30:45Z"
        }))
        .unwrap();

        let click = req.into_click(42);
        assert_eq!(click.id, 42);
        assert_eq!(click.public_id, "a3f1c9e2-7b4d-4e8a-9c21-5d6f7a8b9c0d");
        assert!(click.click_time.is_some());
        assert!(click.conv_time.is_none());
    }

    #[test]
    fn test_epoch_zero_time_sentinel_normalizes_to_absent() {
        let req: CreateClickRequest = serde_json::from_value(json!({
            "campaign_id": 7,
            "traffic_source_id": 3,
            "click_time": "1970-01-01T00:00:00Z",
            "conv_time": "2024-06-01T12:00:00Z"
        }))
        .unwrap();

        let creation = req.into_creation();
        assert!(creation.optional.click_time.is_none());
        assert!(creation.optional.conv_time.is_some());
    }

    #[test]
    fn test_upsert_epoch_zero_time_sentinel_normalizes_to_absent() {
        let req: UpsertClickRequest = serde_json::from_value(json!({
            "public_id": "a3f1c9e2-7b4d-4e8a-9c21-5d6f7a8b9c0d",
            "campaign_id": 7,
            "traffic_source_id": 3,
            "conv_time": "1970-01-01T00:00:00Z"
        }))
        .unwrap();

        let click = req.into_click(42);
        assert!(click.conv_time.is_none());
    }

    #[test]
    fn test_token_dto_round_trip() {
        let token: Token = TokenDto {
            name: "sub1".to_string(),
            value: "abc".to_string(),
        }
        .into();
        let dto: TokenDto = token.into();
        assert_eq!(dto.name, "sub1");
        assert_eq!(dto.value, "abc");
    }
}
