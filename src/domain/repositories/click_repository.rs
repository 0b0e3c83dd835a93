//! Repository trait for click record storage.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::optional_fields::OptionalFields;
use crate::error::AppError;

/// A click row as persisted by the record store.
///
/// Custom tokens are kept in their raw serialized form here; the service
/// layer decodes them before records leave the core, so callers always see a
/// typed token sequence rather than a blob.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ClickRecord {
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
    pub tokens: String,
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
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// The full write set for a click create or upsert.
///
/// Mandatory attributes are plain values and are written unconditionally on
/// both paths. The optional subset merges per [`OptionalFields`]: on upsert,
/// `None` entries leave the stored column untouched.
#[derive(Debug, Clone)]
pub struct ClickWrite {
    pub public_id: String,
    pub external_id: String,
    pub cost: i64,
    pub revenue: i64,
    pub view_time: DateTime<Utc>,
    pub view_output_url: String,
    pub tokens: String,
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
}

/// Record-store interface for click rows.
///
/// The store's native row-level atomicity is the only concurrency control:
/// no in-memory click state is cached anywhere in this crate, so concurrent
/// upserts to the same id resolve in the store, not here.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgClickRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ClickRepository: Send + Sync {
    /// Finds a click by its internal sequential id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<ClickRecord>, AppError>;

    /// Finds a click by its public identifier.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_public_id(&self, public_id: &str) -> Result<Option<ClickRecord>, AppError>;

    /// Inserts a new click row with a store-assigned id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Store`] if a mandatory relation (campaign,
    /// traffic source) is unresolvable, [`AppError::Conflict`] on public id
    /// collision, [`AppError::Internal`] on other database errors.
    async fn create(&self, fields: ClickWrite) -> Result<ClickRecord, AppError>;

    /// Creates-or-updates the row with the given id atomically.
    ///
    /// When the row exists, mandatory columns are overwritten in full and
    /// optional columns merge (`None` keeps the stored value); the stored
    /// public id is never replaced. When it does not exist, the row is
    /// inserted as supplied, caller-controlled public id included.
    ///
    /// # Errors
    ///
    /// Same cases as [`ClickRepository::create`].
    async fn upsert(&self, id: i64, fields: ClickWrite) -> Result<ClickRecord, AppError>;
}
