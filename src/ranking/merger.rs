use super::{AnnotatedListing, BadgeMap, ClickCounts, ListingRecord};

/// 把聚合计数与徽章贴回任意列表切片
///
/// `listings` 可以是排名集合的超集或子集（搜索结果、筛选视图等）：
/// 未参与排名的列表 `click_count` 为 0、`badge` 为空。输入不会被修改。
pub fn merge<L>(listings: &[L], counts: &ClickCounts, badges: &BadgeMap) -> Vec<AnnotatedListing<L>>
where
    L: ListingRecord + Clone,
{
    listings
        .iter()
        .map(|listing| {
            let id = listing.listing_id();
            AnnotatedListing {
                listing: listing.clone(),
                click_count: counts.get(&id).map_or(0, |c| c.total_clicks),
                badge: badges.get(&id).copied().flatten(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ranking::{AggregatedCount, Badge};
    use chrono::NaiveDate;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        id: i64,
        title: &'static str,
    }

    impl ListingRecord for Row {
        fn listing_id(&self) -> i64 {
            self.id
        }

        fn deadline(&self) -> NaiveDate {
            NaiveDate::from_ymd_opt(2030, 1, 1).unwrap()
        }
    }

    #[test]
    fn test_merge_preserves_order_and_fields() {
        let listings = vec![Row { id: 2, title: "b" }, Row { id: 1, title: "a" }];
        let counts: ClickCounts = [(
            1,
            AggregatedCount {
                listing_id: 1,
                total_clicks: 8,
                recent_clicks: 1,
            },
        )]
        .into_iter()
        .collect();
        let badges: BadgeMap = [(1, Some(Badge::Popular)), (2, None)].into_iter().collect();

        let merged = merge(&listings, &counts, &badges);

        assert_eq!(merged.len(), 2);
        assert_eq!(merged[0].listing, listings[0]);
        assert_eq!(merged[0].click_count, 0);
        assert_eq!(merged[0].badge, None);
        assert_eq!(merged[1].listing.title, "a");
        assert_eq!(merged[1].click_count, 8);
        assert_eq!(merged[1].badge, Some(Badge::Popular));
    }

    #[test]
    fn test_merge_unranked_listing_defaults() {
        let listings = vec![Row { id: 42, title: "expired" }];
        let merged = merge(&listings, &ClickCounts::new(), &BadgeMap::new());

        assert_eq!(merged[0].click_count, 0);
        assert_eq!(merged[0].badge, None);
    }
}
