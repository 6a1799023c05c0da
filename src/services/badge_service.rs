//! Badge service layer
//!
//! Wires the ranking engine to a `BadgeSource`: one concurrent read of the
//! two inputs per call, then aggregate → rank → merge.
//!
//! 每次调用都重新读取、重新计算；同一请求内的多个展示切片应复用同一个
//! `BadgeSnapshot`，而不是各自调用 `compute`。

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{debug, warn};

use crate::errors::Result;
use crate::ranking::{
    AnnotatedListing, Badge, BadgeMap, BadgeSource, ClickCounts, ClickEventFilter, ListingRecord,
    RankingPolicy, aggregate, merge, rank,
};

/// 一次排名计算的结果
#[derive(Debug, Clone)]
pub struct BadgeSnapshot<L> {
    /// 计算所用的“当前时间”
    pub computed_at: DateTime<Utc>,
    /// 参与排名的有效列表（按上游返回顺序）
    pub active: Vec<L>,
    pub counts: ClickCounts,
    pub badges: BadgeMap,
}

impl<L> BadgeSnapshot<L> {
    /// 给任意列表切片贴上计数与徽章
    pub fn annotate<T>(&self, listings: &[T]) -> Vec<AnnotatedListing<T>>
    where
        T: ListingRecord + Clone,
    {
        merge(listings, &self.counts, &self.badges)
    }

    pub fn badge_of(&self, listing_id: i64) -> Option<Badge> {
        self.badges.get(&listing_id).copied().flatten()
    }
}

impl<L: ListingRecord + Clone> BadgeSnapshot<L> {
    /// 全部有效列表（首页信息流）
    pub fn annotated_active(&self) -> Vec<AnnotatedListing<L>> {
        self.annotate(&self.active)
    }
}

/// Badge 服务
pub struct BadgeService<S> {
    source: Arc<S>,
    policy: RankingPolicy,
}

impl<S: BadgeSource> BadgeService<S> {
    pub fn new(source: Arc<S>, policy: RankingPolicy) -> Self {
        Self { source, policy }
    }

    /// 使用全局配置中的 `[ranking]` 参数
    pub fn from_config(source: Arc<S>) -> Self {
        let config = crate::config::get_config();
        Self::new(source, RankingPolicy::from(&config.ranking))
    }

    pub fn policy(&self) -> &RankingPolicy {
        &self.policy
    }

    /// 读取两个输入并计算徽章
    ///
    /// 任一读取失败都原样返回错误。
    pub async fn compute(&self, now: DateTime<Utc>) -> Result<BadgeSnapshot<S::Listing>> {
        let today = self.policy.today(now);

        let (listings, events) = tokio::try_join!(
            self.source.active_listings(today),
            self.source.click_events(ClickEventFilter::active_on(today)),
        )?;

        // 上游可能按自己的时区判断有效期，这里以本引擎的 today 为准
        let active: Vec<S::Listing> = listings
            .into_iter()
            .filter(|l| l.is_active_on(today))
            .collect();

        let counts = aggregate(&active, &events, now, &self.policy);
        let badges = rank(&counts, &self.policy);

        debug!(
            "Badge snapshot computed: {} active listings, {} events (today: {})",
            active.len(),
            events.len(),
            today
        );

        Ok(BadgeSnapshot {
            computed_at: now,
            active,
            counts,
            badges,
        })
    }

    /// 全部有效列表及其徽章
    pub async fn ranked_active(&self, now: DateTime<Utc>) -> Result<Vec<AnnotatedListing<S::Listing>>> {
        Ok(self.compute(now).await?.annotated_active())
    }

    /// 计算并贴到给定的列表切片上
    pub async fn annotate<T>(&self, listings: &[T], now: DateTime<Utc>) -> Result<Vec<AnnotatedListing<T>>>
    where
        T: ListingRecord + Clone,
    {
        Ok(self.compute(now).await?.annotate(listings))
    }

    /// 与 `annotate` 相同，但上游失败时降级为无徽章列表
    pub async fn annotate_or_plain<T>(&self, listings: &[T], now: DateTime<Utc>) -> Vec<AnnotatedListing<T>>
    where
        T: ListingRecord + Clone,
    {
        match self.annotate(listings, now).await {
            Ok(annotated) => annotated,
            Err(e) => {
                warn!(
                    "Badge computation failed, serving {} listings without badges: {}",
                    listings.len(),
                    e
                );
                listings.iter().cloned().map(AnnotatedListing::plain).collect()
            }
        }
    }
}
