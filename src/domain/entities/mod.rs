//! Core business entities.

pub mod click;
pub mod token;

pub use click::{Click, ClickCreation};
pub use token::{Token, TokenDecode, decode_tokens, encode_tokens};

#[cfg(test)]
pub mod test_support {
    //! Shared fixtures for unit tests.

    use chrono::{TimeZone, Utc};

    use super::Click;

    /// A click created from mandatory fields only: campaign 7, traffic
    /// source 3, zero economics, every optional attribute unset.
    pub fn minimal_click() -> Click {
        let t = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
        Click {
            id: 1,
            public_id: "a3f1c9e2-7b4d-4e8a-9c21-5d6f7a8b9c0d".to_string(),
            external_id: String::new(),
            cost: 0,
            revenue: 0,
            view_time: t,
            click_time: None,
            conv_time: None,
            view_output_url: String::new(),
            click_output_url: None,
            ip: "203.0.113.9".to_string(),
            isp: None,
            user_agent: "Mozilla/5.0".to_string(),
            language: "en".to_string(),
            country: None,
            region: None,
            city: None,
            device_type: "desktop".to_string(),
            device: String::new(),
            screen_resolution: String::new(),
            os: String::new(),
            os_version: String::new(),
            browser_name: String::new(),
            browser_version: String::new(),
            campaign_id: 7,
            traffic_source_id: 3,
            affiliate_network_id: None,
            landing_page_id: None,
            offer_id: None,
            saved_flow_id: None,
            tokens: vec![],
            created_at: t,
            updated_at: t,
        }
    }
}
