//! Click entity: a user's progression through view, click and conversion.

use chrono::{DateTime, Utc};

use crate::domain::entities::Token;
use crate::domain::optional_fields::OptionalFields;

/// A tracked click record for an advertising funnel.
///
/// Identity is twofold: the store-assigned sequential `id` and the opaque
/// `public_id` handed to external systems. Both are immutable; the public id
/// is generated once at creation and never regenerated on update.
///
/// Optional attributes are modeled as `Option` so an unset funnel stage is
/// structurally distinct from a legitimate zero value (`cost` and `revenue`
/// are always mandatory, zero included).
#[derive(Debug, Clone, PartialEq)]
pub struct Click {
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
    pub tokens: Vec<Token>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Click {
    /// Returns the optional subset of this click's attributes.
    ///
    /// Used by the upsert path: on merge, `None` entries leave the stored
    /// value untouched while mandatory attributes are re-asserted in full.
    pub fn optional_fields(&self) -> OptionalFields {
        OptionalFields {
            click_time: self.click_time,
            conv_time: self.conv_time,
            click_output_url: self.click_output_url.clone(),
            isp: self.isp.clone(),
            country: self.country.clone(),
            region: self.region.clone(),
            city: self.city.clone(),
            affiliate_network_id: self.affiliate_network_id,
            landing_page_id: self.landing_page_id,
            offer_id: self.offer_id,
            saved_flow_id: self.saved_flow_id,
        }
    }
}

/// Input data for creating a new click record.
///
/// Mandatory attributes are plain values (zero economics are legitimate);
/// optional attributes live in [`OptionalFields`]. The public id is not part
/// of the request; it is generated by the record manager at creation.
#[derive(Debug, Clone)]
pub struct ClickCreation {
    pub external_id: String,
    pub cost: i64,
    pub revenue: i64,
    pub view_time: DateTime<Utc>,
    pub view_output_url: String,
    pub ip: String,
    pub user_agent: String,
    pub language: String,
    pub device_type: String,
    pub device: String,
    pub screen_resolution: String,
    pub os: String,
    pub os_version: String,
    pub browser_name: String,
    pub browser_version: String,
    pub campaign_id: i64,
    pub traffic_source_id: i64,
    pub optional: OptionalFields,
    pub tokens: Vec<Token>,
}
