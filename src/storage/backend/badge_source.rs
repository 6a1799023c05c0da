//! BadgeSource implementation for SeaOrmStorage

use async_trait::async_trait;
use chrono::NaiveDate;

use super::SeaOrmStorage;
use crate::errors::Result;
use crate::ranking::{BadgeSource, ClickEvent, ClickEventFilter};
use crate::storage::Listing;

#[async_trait]
impl BadgeSource for SeaOrmStorage {
    type Listing = Listing;

    async fn active_listings(&self, today: NaiveDate) -> Result<Vec<Listing>> {
        SeaOrmStorage::active_listings(self, today).await
    }

    async fn click_events(&self, filter: ClickEventFilter) -> Result<Vec<ClickEvent>> {
        SeaOrmStorage::click_events(self, &filter).await
    }
}
