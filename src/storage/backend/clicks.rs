//! 写入：列表录入与点击追加

use chrono::{DateTime, Utc};
use sea_orm::ActiveModelTrait;
use sea_orm::ActiveValue::{NotSet, Set};
use tracing::debug;

use super::SeaOrmStorage;
use super::converters::{model_to_listing, new_listing_to_active_model};
use super::retry;
use crate::errors::{ClickrankError, Result};
use crate::storage::{Listing, NewListing};

use migration::entities::click_log;

impl SeaOrmStorage {
    /// 插入一条列表
    pub async fn insert_listing(&self, new: &NewListing) -> Result<Listing> {
        let model = new_listing_to_active_model(new, Utc::now())
            .insert(&self.db)
            .await
            .map_err(|e| {
                ClickrankError::database_operation(format!(
                    "Failed to insert listing '{}': {}",
                    new.title, e
                ))
            })?;

        debug!("Listing inserted: {} ({})", model.id, model.title);
        Ok(model_to_listing(model))
    }

    /// 追加一条点击事件
    ///
    /// 遇到连接中断、死锁等可重试错误时按指数退避重试。
    pub async fn record_click(&self, listing_id: i64, occurred_at: DateTime<Utc>) -> Result<()> {
        let db = &self.db;
        retry::with_retry("record_click", self.retry_config, || async move {
            click_log::ActiveModel {
                id: NotSet,
                listing_id: Set(listing_id),
                occurred_at: Set(occurred_at),
            }
            .insert(db)
            .await
        })
        .await
        .map_err(|e| {
            ClickrankError::database_operation(format!(
                "Failed to record click for listing {} (after retries): {}",
                listing_id, e
            ))
        })?;

        debug!("Click recorded: listing {} at {}", listing_id, occurred_at);
        Ok(())
    }
}
