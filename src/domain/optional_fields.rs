//! Optional-attribute merge policy for click writes.
//!
//! A click carries a fixed set of optional attributes that are only written
//! when actually supplied. [`OptionalFields`] models each of them as an
//! `Option`: `Some` means "write this value", `None` means "leave the stored
//! value untouched". The same struct is consumed by both the create and the
//! upsert path, so the two can never drift apart.
//!
//! Inbound requests that still speak the legacy zero-value convention (empty
//! string, zero id, zero time meaning "not supplied") are converted through
//! the `present_*` helpers at the edge.

use chrono::{DateTime, TimeZone, Utc};

/// The optional subset of click attributes.
///
/// `None` fields are left unchanged on upsert and stored as NULL on create.
/// Mandatory attributes (campaign, traffic source, cost, revenue, view time,
/// context fields) are never part of this set; they are always written
/// unconditionally, including legitimate zero values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OptionalFields {
    pub click_time: Option<DateTime<Utc>>,
    pub conv_time: Option<DateTime<Utc>>,
    pub click_output_url: Option<String>,
    pub isp: Option<String>,
    pub country: Option<String>,
    pub region: Option<String>,
    pub city: Option<String>,
    pub affiliate_network_id: Option<i64>,
    pub landing_page_id: Option<i64>,
    pub offer_id: Option<i64>,
    pub saved_flow_id: Option<i64>,
}

impl OptionalFields {
    /// Returns true if no optional attribute would be written.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Converts a legacy text sentinel: an empty string means "not supplied".
pub fn present_text(s: String) -> Option<String> {
    if s.is_empty() { None } else { Some(s) }
}

/// Converts a legacy numeric-id sentinel: zero means "not supplied".
pub fn present_id(id: i64) -> Option<i64> {
    if id == 0 { None } else { Some(id) }
}

/// Converts a legacy timestamp sentinel: the zero time means "not supplied".
///
/// The zero time is the epoch here, never a displayable date. A real instant
/// at exactly the epoch cannot be expressed through the sentinel convention;
/// callers that need it must supply `Some` directly.
pub fn present_time(t: DateTime<Utc>) -> Option<DateTime<Utc>> {
    if t == zero_time() { None } else { Some(t) }
}

/// The timestamp sentinel used by the legacy zero-value convention.
pub fn zero_time() -> DateTime<Utc> {
    Utc.timestamp_opt(0, 0).unwrap()
}
