//! Click tracking service
//!
//! Follows a listing's outbound link: resolves the destination and appends
//! one click event.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::info;

use crate::errors::{ClickrankError, Result};
use crate::storage::SeaOrmStorage;

pub struct ClickService {
    storage: Arc<SeaOrmStorage>,
}

impl ClickService {
    pub fn new(storage: Arc<SeaOrmStorage>) -> Self {
        Self { storage }
    }

    /// 记录点击并返回外部目标地址
    ///
    /// 列表不存在时返回 `NotFound`，不会写入点击。已过期的列表仍然记录，
    /// 只是不再参与排名。
    pub async fn follow(&self, listing_id: i64, now: DateTime<Utc>) -> Result<String> {
        let listing = self
            .storage
            .find_listing(listing_id)
            .await?
            .ok_or_else(|| ClickrankError::not_found(format!("Listing {} not found", listing_id)))?;

        self.storage.record_click(listing.id, now).await?;

        info!("Listing {} clicked → {}", listing.id, listing.destination_url);
        Ok(listing.destination_url)
    }
}
