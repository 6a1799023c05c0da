use chrono::{DateTime, NaiveDate, Utc};

use super::{ClickEvent, ListingRecord};
use crate::errors::Result;

/// 点击事件查询条件
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClickEventFilter {
    /// 只返回截止日期 >= 该日期的列表的事件
    pub active_on: Option<NaiveDate>,
    /// 只返回 occurred_at >= since 的事件
    pub since: Option<DateTime<Utc>>,
}

impl ClickEventFilter {
    /// 不加任何过滤：完整点击历史
    pub fn all() -> Self {
        Self::default()
    }

    pub fn active_on(today: NaiveDate) -> Self {
        Self {
            active_on: Some(today),
            since: None,
        }
    }

    pub fn since(mut self, since: DateTime<Utc>) -> Self {
        self.since = Some(since);
        self
    }
}

/// 排名引擎的两个外部输入
///
/// 实现方负责数据校验；读取失败直接返回错误，引擎不做重试。
#[async_trait::async_trait]
pub trait BadgeSource: Send + Sync {
    type Listing: ListingRecord + Clone + Send + Sync;

    /// 截止日期 >= `today` 的全部列表
    async fn active_listings(&self, today: NaiveDate) -> Result<Vec<Self::Listing>>;

    /// 按条件读取点击事件
    async fn click_events(&self, filter: ClickEventFilter) -> Result<Vec<ClickEvent>>;
}
