//! Analytics service layer
//!
//! Read-only click statistics for operators, independent of the badge
//! ranking (expired listings included).

use std::sync::Arc;

use tracing::debug;

use crate::errors::Result;
use crate::storage::{ListingClicks, SeaOrmStorage};

/// Analytics 服务
pub struct AnalyticsService {
    storage: Arc<SeaOrmStorage>,
}

impl AnalyticsService {
    pub fn new(storage: Arc<SeaOrmStorage>) -> Self {
        Self { storage }
    }

    /// 所有列表的累计点击数，新建的在前
    pub async fn listing_clicks(&self) -> Result<Vec<ListingClicks>> {
        let rows = self.storage.listing_click_totals().await?;
        debug!("Listing click totals: {} rows", rows.len());

        Ok(rows
            .into_iter()
            .map(|row| ListingClicks {
                id: row.id,
                title: row.title,
                deadline: row.deadline,
                created_at: row.created_at,
                click_count: row.click_count.max(0) as u64,
            })
            .collect())
    }

    /// 全站累计点击数
    pub async fn total_clicks(&self) -> Result<u64> {
        Ok(self
            .listing_clicks()
            .await?
            .iter()
            .map(|l| l.click_count)
            .sum())
    }
}
