//! 点击聚合
//!
//! 将有效列表与点击日志做一次内存 join：
//! 1. 先为每个有效列表建立零计数条目（保证结果稠密）
//! 2. 再遍历事件，累加总点击数与近期点击数
//!
//! 不属于有效列表的事件（已过期或未知的列表）直接忽略。

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use tracing::trace;

use super::{AggregatedCount, ClickEvent, ListingRecord, RankingPolicy};

/// listing id → 聚合计数
pub type ClickCounts = HashMap<i64, AggregatedCount>;

/// 聚合有效列表的点击数
///
/// `active_listings` 必须只包含在调用时刻仍有效的列表；`events` 可以是完整的
/// 点击历史，也可以是已按有效列表过滤过的子集，结果相同。
pub fn aggregate<L: ListingRecord>(
    active_listings: &[L],
    events: &[ClickEvent],
    now: DateTime<Utc>,
    policy: &RankingPolicy,
) -> ClickCounts {
    let mut counts: ClickCounts = active_listings
        .iter()
        .map(|listing| {
            let id = listing.listing_id();
            (id, AggregatedCount::zero(id))
        })
        .collect();

    let recent_since = policy.recent_since(now);
    let mut ignored = 0usize;

    for event in events {
        let Some(entry) = counts.get_mut(&event.listing_id) else {
            ignored += 1;
            continue;
        };
        entry.total_clicks += 1;
        if event.occurred_at >= recent_since {
            entry.recent_clicks += 1;
        }
    }

    trace!(
        "Aggregated {} events over {} active listings ({} ignored)",
        events.len() - ignored,
        counts.len(),
        ignored
    );

    counts
}
