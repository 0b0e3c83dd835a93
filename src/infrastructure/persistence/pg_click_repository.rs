//! PostgreSQL implementation of the click repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::repositories::{ClickRecord, ClickRepository, ClickWrite};
use crate::error::AppError;

const CLICK_COLUMNS: &str = "\
    id, public_id, external_id, cost, revenue, view_time, click_time, conv_time, \
    view_output_url, click_output_url, tokens, ip, isp, user_agent, language, \
    country, region, city, device_type, device, screen_resolution, os, os_version, \
    browser_name, browser_version, campaign_id, traffic_source_id, \
    affiliate_network_id, landing_page_id, offer_id, saved_flow_id, \
    created_at, updated_at";

/// PostgreSQL repository for click storage and retrieval.
///
/// All writes are single statements so the database's row-level atomicity is
/// the only concurrency control; the upsert merge happens inside
/// `ON CONFLICT ... DO UPDATE` with `COALESCE` for optional columns.
pub struct PgClickRepository {
    pool: Arc<PgPool>,
}

impl PgClickRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ClickRepository for PgClickRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<ClickRecord>, AppError> {
        let row = sqlx::query_as::<_, ClickRecord>(&format!(
            "SELECT {CLICK_COLUMNS} FROM clicks WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row)
    }

    async fn find_by_public_id(&self, public_id: &str) -> Result<Option<ClickRecord>, AppError> {
        let row = sqlx::query_as::<_, ClickRecord>(&format!(
            "SELECT {CLICK_COLUMNS} FROM clicks WHERE public_id = $1"
        ))
        .bind(public_id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row)
    }

    async fn create(&self, fields: ClickWrite) -> Result<ClickRecord, AppError> {
        let row = sqlx::query_as::<_, ClickRecord>(&format!(
            r#"
            INSERT INTO clicks (
                public_id, external_id, cost, revenue, view_time, view_output_url,
                tokens, ip, user_agent, language, device_type, device,
                screen_resolution, os, os_version, browser_name, browser_version,
                campaign_id, traffic_source_id,
                click_time, conv_time, click_output_url, isp, country, region, city,
                affiliate_network_id, landing_page_id, offer_id, saved_flow_id
            )
            VALUES (
                $1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15,
                $16, $17, $18, $19, $20, $21, $22, $23, $24, $25, $26, $27, $28,
                $29, $30
            )
            RETURNING {CLICK_COLUMNS}
            "#
        ))
        .bind(&fields.public_id)
        .bind(&fields.external_id)
        .bind(fields.cost)
        .bind(fields.revenue)
        .bind(fields.view_time)
        .bind(&fields.view_output_url)
        .bind(&fields.tokens)
        .bind(&fields.ip)
        .bind(&fields.user_agent)
        .bind(&fields.language)
        .bind(&fields.device_type)
        .bind(&fields.device)
        .bind(&fields.screen_resolution)
        .bind(&fields.os)
        .bind(&fields.os_version)
        .bind(&fields.browser_name)
        .bind(&fields.browser_version)
        .bind(fields.campaign_id)
        .bind(fields.traffic_source_id)
        .bind(fields.optional.click_time)
        .bind(fields.optional.conv_time)
        .bind(&fields.optional.click_output_url)
        .bind(&fields.optional.isp)
        .bind(&fields.optional.country)
        .bind(&fields.optional.region)
        .bind(&fields.optional.city)
        .bind(fields.optional.affiliate_network_id)
        .bind(fields.optional.landing_page_id)
        .bind(fields.optional.offer_id)
        .bind(fields.optional.saved_flow_id)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row)
    }

    async fn upsert(&self, id: i64, fields: ClickWrite) -> Result<ClickRecord, AppError> {
        // The stored public_id is deliberately absent from the update set:
        // it is assigned once and never regenerated.
        let row = sqlx::query_as::<_, ClickRecord>(&format!(
            r#"
            INSERT INTO clicks (
                id, public_id, external_id, cost, revenue, view_time,
                view_output_url, tokens, ip, user_agent, language, device_type,
                device, screen_resolution, os, os_version, browser_name,
                browser_version, campaign_id, traffic_source_id,
                click_time, conv_time, click_output_url, isp, country, region, city,
                affiliate_network_id, landing_page_id, offer_id, saved_flow_id
            )
            VALUES (
                $1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15,
                $16, $17, $18, $19, $20, $21, $22, $23, $24, $25, $26, $27, $28,
                $29, $30, $31
            )
            ON CONFLICT (id) DO UPDATE SET
                external_id = EXCLUDED.external_id,
                cost = EXCLUDED.cost,
                revenue = EXCLUDED.revenue,
                view_time = EXCLUDED.view_time,
                view_output_url = EXCLUDED.view_output_url,
                tokens = EXCLUDED.tokens,
                ip = EXCLUDED.ip,
                user_agent = EXCLUDED.user_agent,
                language = EXCLUDED.language,
                device_type = EXCLUDED.device_type,
                device = EXCLUDED.device,
                screen_resolution = EXCLUDED.screen_resolution,
                os = EXCLUDED.os,
                os_version = EXCLUDED.os_version,
                browser_name = EXCLUDED.browser_name,
                browser_version = EXCLUDED.browser_version,
                campaign_id = EXCLUDED.campaign_id,
                traffic_source_id = EXCLUDED.traffic_source_id,
                click_time = COALESCE(EXCLUDED.click_time, clicks.click_time),
                conv_time = COALESCE(EXCLUDED.conv_time, clicks.conv_time),
                click_output_url = COALESCE(EXCLUDED.click_output_url, clicks.click_output_url),
                isp = COALESCE(EXCLUDED.isp, clicks.isp),
                country = COALESCE(EXCLUDED.country, clicks.country),
                region = COALESCE(EXCLUDED.region, clicks.region),
                city = COALESCE(EXCLUDED.city, clicks.city),
                affiliate_network_id = COALESCE(EXCLUDED.affiliate_network_id, clicks.affiliate_network_id),
                landing_page_id = COALESCE(EXCLUDED.landing_page_id, clicks.landing_page_id),
                offer_id = COALESCE(EXCLUDED.offer_id, clicks.offer_id),
                saved_flow_id = COALESCE(EXCLUDED.saved_flow_id, clicks.saved_flow_id),
                updated_at = now()
            RETURNING {CLICK_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(&fields.public_id)
        .bind(&fields.external_id)
        .bind(fields.cost)
        .bind(fields.revenue)
        .bind(fields.view_time)
        .bind(&fields.view_output_url)
        .bind(&fields.tokens)
        .bind(&fields.ip)
        .bind(&fields.user_agent)
        .bind(&fields.language)
        .bind(&fields.device_type)
        .bind(&fields.device)
        .bind(&fields.screen_resolution)
        .bind(&fields.os)
        .bind(&fields.os_version)
        .bind(&fields.browser_name)
        .bind(&fields.browser_version)
        .bind(fields.campaign_id)
        .bind(fields.traffic_source_id)
        .bind(fields.optional.click_time)
        .bind(fields.optional.conv_time)
        .bind(&fields.optional.click_output_url)
        .bind(&fields.optional.isp)
        .bind(&fields.optional.country)
        .bind(&fields.optional.region)
        .bind(&fields.optional.city)
        .bind(fields.optional.affiliate_network_id)
        .bind(fields.optional.landing_page_id)
        .bind(fields.optional.offer_id)
        .bind(fields.optional.saved_flow_id)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row)
    }
}
