//! 徽章排名
//!
//! 按固定优先级依次评定，已获得徽章的列表会被后续规则跳过：
//! 1. Popular：总点击数第一（且 > 0）
//! 2. Notable：有效列表数达到门槛时，总点击数排名紧随其后的前 N% （且 > 0）
//! 3. Rising：近期点击数第一（且 > 0），若它已有徽章则本轮不发放
//!
//! 并列时按 listing id 升序决出先后，保证结果与 HashMap 的迭代顺序无关。

use std::collections::HashMap;

use strum::IntoEnumIterator;
use tracing::debug;

use super::{AggregatedCount, Badge, ClickCounts, RankingPolicy};

/// listing id → 徽章（稠密：每个参与排名的列表都有条目）
pub type BadgeMap = HashMap<i64, Option<Badge>>;

/// 为聚合结果分配徽章，永不失败
pub fn rank(counts: &ClickCounts, policy: &RankingPolicy) -> BadgeMap {
    let mut badges: BadgeMap = counts.keys().map(|id| (*id, None)).collect();

    let by_total = sorted_desc(counts, |c| c.total_clicks);

    if let Some(top) = by_total.first().filter(|c| c.total_clicks > 0) {
        badges.insert(top.listing_id, Some(Badge::Popular));
    }

    if counts.len() >= policy.notable_min_listings {
        let slots = policy.notable_slots(counts.len());
        // 过滤后的第一名就是 Popular，跳过它
        for count in by_total
            .iter()
            .filter(|c| c.total_clicks > 0)
            .skip(1)
            .take(slots)
        {
            award(&mut badges, count.listing_id, Badge::Notable);
        }
    }

    let by_recent = sorted_desc(counts, |c| c.recent_clicks);
    if let Some(top) = by_recent.first().filter(|c| c.recent_clicks > 0) {
        award(&mut badges, top.listing_id, Badge::Rising);
    }

    debug!("Ranked {} listings: {}", counts.len(), summary(&badges));

    badges
}

/// 仅在尚无徽章时授予
fn award(badges: &mut BadgeMap, listing_id: i64, badge: Badge) {
    if let Some(slot) = badges.get_mut(&listing_id)
        && slot.is_none()
    {
        *slot = Some(badge);
    }
}

fn sorted_desc<F>(counts: &ClickCounts, key: F) -> Vec<&AggregatedCount>
where
    F: Fn(&AggregatedCount) -> u64,
{
    let mut sorted: Vec<&AggregatedCount> = counts.values().collect();
    sorted.sort_by(|a, b| {
        key(b)
            .cmp(&key(a))
            .then_with(|| a.listing_id.cmp(&b.listing_id))
    });
    sorted
}

/// 每种徽章的发放数量，按优先级排列，如 `Popular=1, Notable=2, Rising=0`
pub fn summary(badges: &BadgeMap) -> String {
    Badge::iter()
        .map(|badge| {
            let n = badges.values().filter(|b| **b == Some(badge)).count();
            format!("{}={}", badge, n)
        })
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counts(rows: &[(i64, u64, u64)]) -> ClickCounts {
        rows.iter()
            .map(|&(id, total, recent)| {
                (
                    id,
                    AggregatedCount {
                        listing_id: id,
                        total_clicks: total,
                        recent_clicks: recent,
                    },
                )
            })
            .collect()
    }

    #[test]
    fn test_empty_input_yields_empty_map() {
        let badges = rank(&ClickCounts::new(), &RankingPolicy::default());
        assert!(badges.is_empty());
    }

    #[test]
    fn test_no_clicks_no_badges() {
        let input = counts(&[(1, 0, 0), (2, 0, 0), (3, 0, 0), (4, 0, 0), (5, 0, 0)]);
        let badges = rank(&input, &RankingPolicy::default());

        assert_eq!(badges.len(), 5);
        assert!(badges.values().all(Option::is_none));
    }

    #[test]
    fn test_popular_tie_goes_to_lowest_id() {
        let input = counts(&[(9, 4, 0), (3, 4, 0), (5, 1, 0)]);
        let badges = rank(&input, &RankingPolicy::default());

        assert_eq!(badges[&3], Some(Badge::Popular));
        assert_eq!(badges[&9], None);
    }

    #[test]
    fn test_rising_skipped_when_top_recent_already_badged() {
        // 近期第一名已是 Popular，近期第二名也不会补位
        let input = counts(&[(1, 10, 5), (2, 3, 2), (3, 0, 0)]);
        let badges = rank(&input, &RankingPolicy::default());

        assert_eq!(badges[&1], Some(Badge::Popular));
        assert_eq!(badges[&2], None);
    }

    #[test]
    fn test_rising_awarded_to_unbadged_top_recent() {
        let input = counts(&[(1, 10, 0), (2, 3, 2), (3, 1, 1)]);
        let badges = rank(&input, &RankingPolicy::default());

        assert_eq!(badges[&1], Some(Badge::Popular));
        assert_eq!(badges[&2], Some(Badge::Rising));
        assert_eq!(badges[&3], None);
    }

    #[test]
    fn test_summary_lists_every_badge_in_priority_order() {
        let input = counts(&[(1, 10, 0), (2, 3, 2), (3, 0, 0)]);
        let badges = rank(&input, &RankingPolicy::default());

        assert_eq!(summary(&badges), "Popular=1, Notable=0, Rising=1");
        assert_eq!(summary(&BadgeMap::new()), "Popular=0, Notable=0, Rising=0");
    }

    #[test]
    fn test_custom_policy_threshold() {
        let input = counts(&[(1, 5, 0), (2, 4, 0), (3, 3, 0)]);
        let policy = RankingPolicy {
            notable_min_listings: 3,
            notable_percent: 50,
            ..Default::default()
        };
        let badges = rank(&input, &policy);

        // ceil(3 * 0.5) = 2
        assert_eq!(badges[&1], Some(Badge::Popular));
        assert_eq!(badges[&2], Some(Badge::Notable));
        assert_eq!(badges[&3], Some(Badge::Notable));
    }
}
