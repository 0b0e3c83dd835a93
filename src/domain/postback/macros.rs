//! The closed set of postback URL macros and their per-click values.

use std::collections::BTreeMap;

use crate::domain::entities::Click;
use crate::utils::time_format::{format_opt_time, format_time};

/// A built-in macro name usable in a postback URL template.
///
/// The set is closed and fixed at compile time. Placeholder spellings are
/// camelCase names in braces, e.g. `{clickTime}` or `{trafficSourceId}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PostbackMacro {
    Id,
    PublicId,
    ExternalId,
    Cost,
    Revenue,
    ViewTime,
    ClickTime,
    ConvTime,
    ViewOutputUrl,
    ClickOutputUrl,
    Ip,
    Isp,
    UserAgent,
    Language,
    Country,
    Region,
    City,
    DeviceType,
    Device,
    ScreenResolution,
    Os,
    OsVersion,
    BrowserName,
    BrowserVersion,
    CreatedAt,
    UpdatedAt,
    AffiliateNetworkId,
    CampaignId,
    FlowId,
    LandingPageId,
    OfferId,
    TrafficSourceId,
}

impl PostbackMacro {
    /// Every defined macro, in placeholder-table order.
    pub const ALL: [PostbackMacro; 32] = [
        PostbackMacro::Id,
        PostbackMacro::PublicId,
        PostbackMacro::ExternalId,
        PostbackMacro::Cost,
        PostbackMacro::Revenue,
        PostbackMacro::ViewTime,
        PostbackMacro::ClickTime,
        PostbackMacro::ConvTime,
        PostbackMacro::ViewOutputUrl,
        PostbackMacro::ClickOutputUrl,
        PostbackMacro::Ip,
        PostbackMacro::Isp,
        PostbackMacro::UserAgent,
        PostbackMacro::Language,
        PostbackMacro::Country,
        PostbackMacro::Region,
        PostbackMacro::City,
        PostbackMacro::DeviceType,
        PostbackMacro::Device,
        PostbackMacro::ScreenResolution,
        PostbackMacro::Os,
        PostbackMacro::OsVersion,
        PostbackMacro::BrowserName,
        PostbackMacro::BrowserVersion,
        PostbackMacro::CreatedAt,
        PostbackMacro::UpdatedAt,
        PostbackMacro::AffiliateNetworkId,
        PostbackMacro::CampaignId,
        PostbackMacro::FlowId,
        PostbackMacro::LandingPageId,
        PostbackMacro::OfferId,
        PostbackMacro::TrafficSourceId,
    ];

    /// The literal placeholder this macro matches in a template.
    pub fn placeholder(&self) -> &'static str {
        match self {
            PostbackMacro::Id => "{id}",
            PostbackMacro::PublicId => "{publicId}",
            PostbackMacro::ExternalId => "{externalId}",
            PostbackMacro::Cost => "{cost}",
            PostbackMacro::Revenue => "{revenue}",
            PostbackMacro::ViewTime => "{viewTime}",
            PostbackMacro::ClickTime => "{clickTime}",
            PostbackMacro::ConvTime => "{convTime}",
            PostbackMacro::ViewOutputUrl => "{viewOutputUrl}",
            PostbackMacro::ClickOutputUrl => "{clickOutputUrl}",
            PostbackMacro::Ip => "{ip}",
            PostbackMacro::Isp => "{isp}",
            PostbackMacro::UserAgent => "{userAgent}",
            PostbackMacro::Language => "{language}",
            PostbackMacro::Country => "{country}",
            PostbackMacro::Region => "{region}",
            PostbackMacro::City => "{city}",
            PostbackMacro::DeviceType => "{deviceType}",
            PostbackMacro::Device => "{device}",
            PostbackMacro::ScreenResolution => "{screenResolution}",
            PostbackMacro::Os => "{os}",
            PostbackMacro::OsVersion => "{osVersion}",
            PostbackMacro::BrowserName => "{browserName}",
            PostbackMacro::BrowserVersion => "{browserVersion}",
            PostbackMacro::CreatedAt => "{createdAt}",
            PostbackMacro::UpdatedAt => "{updatedAt}",
            PostbackMacro::AffiliateNetworkId => "{affiliateNetworkId}",
            PostbackMacro::CampaignId => "{campaignId}",
            PostbackMacro::FlowId => "{flowId}",
            PostbackMacro::LandingPageId => "{landingPageId}",
            PostbackMacro::OfferId => "{offerId}",
            PostbackMacro::TrafficSourceId => "{trafficSourceId}",
        }
    }
}

/// Builds the canonical macro-to-value mapping for a click.
///
/// A pure, total projection: every macro in [`PostbackMacro::ALL`] gets an
/// entry, even when the underlying field is unset. Numbers format as base-10
/// text with unset relations as `"0"`; timestamps use the canonical RFC 3339
/// form with unset stages as the empty string.
pub fn macro_map(click: &Click) -> BTreeMap<PostbackMacro, String> {
    BTreeMap::from([
        (PostbackMacro::Id, click.id.to_string()),
        (PostbackMacro::PublicId, click.public_id.clone()),
        (PostbackMacro::ExternalId, click.external_id.clone()),
        (PostbackMacro::Cost, click.cost.to_string()),
        (PostbackMacro::Revenue, click.revenue.to_string()),
        (PostbackMacro::ViewTime, format_time(click.view_time)),
        (PostbackMacro::ClickTime, format_opt_time(click.click_time)),
        (PostbackMacro::ConvTime, format_opt_time(click.conv_time)),
        (
            PostbackMacro::ViewOutputUrl,
            click.view_output_url.clone(),
        ),
        (
            PostbackMacro::ClickOutputUrl,
            click.click_output_url.clone().unwrap_or_default(),
        ),
        (PostbackMacro::Ip, click.ip.clone()),
        (PostbackMacro::Isp, click.isp.clone().unwrap_or_default()),
        (PostbackMacro::UserAgent, click.user_agent.clone()),
        (PostbackMacro::Language, click.language.clone()),
        (
            PostbackMacro::Country,
            click.country.clone().unwrap_or_default(),
        ),
        (
            PostbackMacro::Region,
            click.region.clone().unwrap_or_default(),
        ),
        (PostbackMacro::City, click.city.clone().unwrap_or_default()),
        (PostbackMacro::DeviceType, click.device_type.clone()),
        (PostbackMacro::Device, click.device.clone()),
        (
            PostbackMacro::ScreenResolution,
            click.screen_resolution.clone(),
        ),
        (PostbackMacro::Os, click.os.clone()),
        (PostbackMacro::OsVersion, click.os_version.clone()),
        (PostbackMacro::BrowserName, click.browser_name.clone()),
        (
            PostbackMacro::BrowserVersion,
            click.browser_version.clone(),
        ),
        (PostbackMacro::CreatedAt, format_time(click.created_at)),
        (PostbackMacro::UpdatedAt, format_time(click.updated_at)),
        (
            PostbackMacro::AffiliateNetworkId,
            click.affiliate_network_id.unwrap_or(0).to_string(),
        ),
        (PostbackMacro::CampaignId, click.campaign_id.to_string()),
        (
            PostbackMacro::FlowId,
            click.saved_flow_id.unwrap_or(0).to_string(),
        ),
        (
            PostbackMacro::LandingPageId,
            click.landing_page_id.unwrap_or(0).to_string(),
        ),
        (
            PostbackMacro::OfferId,
            click.offer_id.unwrap_or(0).to_string(),
        ),
        (
            PostbackMacro::TrafficSourceId,
            click.traffic_source_id.to_string(),
        ),
    ])
}
