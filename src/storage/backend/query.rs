//! 排名输入的读取查询
//!
//! 两个读取互不依赖，可由调用方并发发起。

use chrono::{DateTime, NaiveDate, Utc};
use sea_orm::{ColumnTrait, EntityTrait, FromQueryResult, QueryFilter, QueryOrder, QuerySelect};
use tracing::trace;

use super::SeaOrmStorage;
use super::converters::model_to_listing;
use crate::errors::Result;
use crate::ranking::{ClickEvent, ClickEventFilter};
use crate::storage::Listing;

use migration::entities::{click_log, listing};

/// 点击事件查询结果行
#[derive(Debug, FromQueryResult)]
struct ClickEventRow {
    listing_id: i64,
    occurred_at: DateTime<Utc>,
}

impl SeaOrmStorage {
    /// 截止日期 >= today 的列表，按 id 升序
    pub async fn active_listings(&self, today: NaiveDate) -> Result<Vec<Listing>> {
        let models = listing::Entity::find()
            .filter(listing::Column::Deadline.gte(today))
            .order_by_asc(listing::Column::Id)
            .all(&self.db)
            .await?;

        trace!("Loaded {} active listings (today: {})", models.len(), today);
        Ok(models.into_iter().map(model_to_listing).collect())
    }

    /// 按 id 查找列表（不论是否过期）
    pub async fn find_listing(&self, id: i64) -> Result<Option<Listing>> {
        let model = listing::Entity::find_by_id(id).one(&self.db).await?;
        Ok(model.map(model_to_listing))
    }

    /// 读取点击事件
    ///
    /// `active_on` 通过 join listings 过滤掉已过期列表的事件，
    /// `since` 限定事件时间下界。
    pub async fn click_events(&self, filter: &ClickEventFilter) -> Result<Vec<ClickEvent>> {
        let mut query = click_log::Entity::find()
            .select_only()
            .column(click_log::Column::ListingId)
            .column(click_log::Column::OccurredAt);

        if let Some(today) = filter.active_on {
            query = query
                .inner_join(listing::Entity)
                .filter(listing::Column::Deadline.gte(today));
        }
        if let Some(since) = filter.since {
            query = query.filter(click_log::Column::OccurredAt.gte(since));
        }

        let rows = query
            .order_by_asc(click_log::Column::Id)
            .into_model::<ClickEventRow>()
            .all(&self.db)
            .await?;

        trace!("Loaded {} click events ({:?})", rows.len(), filter);
        Ok(rows
            .into_iter()
            .map(|row| ClickEvent::new(row.listing_id, row.occurred_at))
            .collect())
    }
}
