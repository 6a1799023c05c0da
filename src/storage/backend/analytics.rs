//! Analytics 相关的数据库查询

use chrono::{DateTime, NaiveDate, Utc};
use sea_orm::{ColumnTrait, EntityTrait, FromQueryResult, QueryOrder, QuerySelect};

use super::SeaOrmStorage;
use crate::errors::Result;

use migration::entities::{click_log, listing};

/// 列表累计点击查询结果行
#[derive(Debug, FromQueryResult)]
pub struct ListingClicksRow {
    pub id: i64,
    pub title: String,
    pub deadline: NaiveDate,
    pub created_at: DateTime<Utc>,
    pub click_count: i64,
}

impl SeaOrmStorage {
    /// 所有列表（含已过期）的累计点击数，新建的在前
    pub async fn listing_click_totals(&self) -> Result<Vec<ListingClicksRow>> {
        let rows = listing::Entity::find()
            .select_only()
            .column(listing::Column::Id)
            .column(listing::Column::Title)
            .column(listing::Column::Deadline)
            .column(listing::Column::CreatedAt)
            .column_as(click_log::Column::Id.count(), "click_count")
            .left_join(click_log::Entity)
            .group_by(listing::Column::Id)
            .group_by(listing::Column::Title)
            .group_by(listing::Column::Deadline)
            .group_by(listing::Column::CreatedAt)
            .order_by_desc(listing::Column::CreatedAt)
            .order_by_desc(listing::Column::Id)
            .into_model::<ListingClicksRow>()
            .all(&self.db)
            .await?;
        Ok(rows)
    }
}
