//! Popularity ranking engine
//!
//! Turns a snapshot of active listings plus the click event log into
//! at most one badge per listing:
//!
//! - `aggregator`: lifetime / recent click counts for every active listing
//! - `ranker`: Popular → Notable → Rising, in strict priority order
//! - `merger`: re-attaches `clickCount` and `badge` to any listing slice
//! - `source`: the `BadgeSource` seam supplying listings and click events
//!
//! 整个引擎是纯函数：不持有状态、不缓存，同样的输入和 `now` 必然得到同样的输出。

pub mod aggregator;
pub mod merger;
pub mod ranker;
pub mod source;

pub use aggregator::{ClickCounts, aggregate};
pub use merger::merge;
pub use ranker::{BadgeMap, rank, summary};
pub use source::{BadgeSource, ClickEventFilter};

use chrono::{DateTime, Duration, FixedOffset, NaiveDate, Offset, Utc};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumIter};

/// 可参与排名的列表记录
///
/// 排名只关心 `id` 与 `deadline`，其余展示字段对引擎不透明。
pub trait ListingRecord {
    fn listing_id(&self) -> i64;

    fn deadline(&self) -> NaiveDate;

    /// 截止日期为今天或之后即视为有效
    fn is_active_on(&self, today: NaiveDate) -> bool {
        self.deadline() >= today
    }
}

/// 单条点击事件
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClickEvent {
    pub listing_id: i64,
    pub occurred_at: DateTime<Utc>,
}

impl ClickEvent {
    pub fn new(listing_id: i64, occurred_at: DateTime<Utc>) -> Self {
        Self {
            listing_id,
            occurred_at,
        }
    }
}

/// 单个列表的点击聚合结果（每次调用重新计算，不持久化）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregatedCount {
    pub listing_id: i64,
    pub total_clicks: u64,
    pub recent_clicks: u64,
}

impl AggregatedCount {
    pub fn zero(listing_id: i64) -> Self {
        Self {
            listing_id,
            ..Default::default()
        }
    }
}

/// 人气徽章，三者互斥
///
/// 变体顺序即优先级：Popular > Notable > Rising。
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter, AsRefStr,
)]
pub enum Badge {
    Popular,
    Notable,
    Rising,
}

impl std::fmt::Display for Badge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl std::str::FromStr for Badge {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "popular" => Ok(Self::Popular),
            "notable" => Ok(Self::Notable),
            "rising" => Ok(Self::Rising),
            _ => Err(format!(
                "Invalid badge: '{}'. Valid: Popular, Notable, Rising",
                s
            )),
        }
    }
}

/// 带徽章的列表（对外唯一可见的输出）
///
/// 原始字段通过 `flatten` 原样输出，额外附加 `clickCount` 与 `badge`。
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnotatedListing<L> {
    #[serde(flatten)]
    pub listing: L,
    pub click_count: u64,
    pub badge: Option<Badge>,
}

impl<L> AnnotatedListing<L> {
    /// 未参与排名时的默认注解
    pub fn plain(listing: L) -> Self {
        Self {
            listing,
            click_count: 0,
            badge: None,
        }
    }
}

/// 排名规则参数
///
/// `Default` 即固定规则：1 小时近期窗口、至少 5 个有效列表才评 Notable、前 20%。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankingPolicy {
    pub recent_window: Duration,
    pub notable_min_listings: usize,
    pub notable_percent: u32,
    /// 判定“今天”所用的时区偏移
    pub utc_offset: FixedOffset,
}

impl Default for RankingPolicy {
    fn default() -> Self {
        Self {
            recent_window: Duration::hours(1),
            notable_min_listings: 5,
            notable_percent: 20,
            utc_offset: Utc.fix(),
        }
    }
}

impl RankingPolicy {
    /// 近期窗口的起点（含）
    ///
    /// 超出时间范围时取最早可表示的时刻，即全部点击都算近期。
    pub fn recent_since(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        now.checked_sub_signed(self.recent_window)
            .unwrap_or(DateTime::<Utc>::MIN_UTC)
    }

    /// `now` 在配置时区下的日历日期，用于判断列表是否仍有效
    pub fn today(&self, now: DateTime<Utc>) -> NaiveDate {
        now.with_timezone(&self.utc_offset).date_naive()
    }

    /// Notable 名额：`max(1, ceil(n * percent / 100))`
    pub fn notable_slots(&self, listing_count: usize) -> usize {
        let percent = self.notable_percent as usize;
        (listing_count * percent).div_ceil(100).max(1)
    }
}

impl From<&crate::config::RankingConfig> for RankingPolicy {
    fn from(config: &crate::config::RankingConfig) -> Self {
        let defaults = Self::default();
        let utc_offset = config
            .utc_offset_minutes
            .checked_mul(60)
            .and_then(FixedOffset::east_opt)
            .unwrap_or(defaults.utc_offset);
        // 未经 validate 的超大值回退到默认窗口
        let recent_window = i64::try_from(config.recent_window_secs)
            .ok()
            .and_then(Duration::try_seconds)
            .unwrap_or(defaults.recent_window);
        Self {
            recent_window,
            notable_min_listings: config.notable_min_listings,
            notable_percent: config.notable_percent,
            utc_offset,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_notable_slots_rounds_up() {
        let policy = RankingPolicy::default();
        assert_eq!(policy.notable_slots(5), 1);
        assert_eq!(policy.notable_slots(6), 2);
        assert_eq!(policy.notable_slots(10), 2);
        assert_eq!(policy.notable_slots(11), 3);
        assert_eq!(policy.notable_slots(15), 3);
    }

    #[test]
    fn test_notable_slots_at_least_one() {
        let policy = RankingPolicy {
            notable_percent: 0,
            ..Default::default()
        };
        assert_eq!(policy.notable_slots(7), 1);
    }

    #[test]
    fn test_today_respects_offset() {
        let now = Utc.with_ymd_and_hms(2026, 3, 1, 20, 0, 0).unwrap();
        let utc = RankingPolicy::default();
        assert_eq!(utc.today(now), NaiveDate::from_ymd_opt(2026, 3, 1).unwrap());

        let seoul = RankingPolicy {
            utc_offset: FixedOffset::east_opt(9 * 3600).unwrap(),
            ..Default::default()
        };
        assert_eq!(seoul.today(now), NaiveDate::from_ymd_opt(2026, 3, 2).unwrap());
    }

    #[test]
    fn test_recent_since_saturates_on_huge_window() {
        let now = Utc.with_ymd_and_hms(2026, 3, 1, 20, 0, 0).unwrap();
        let policy = RankingPolicy {
            recent_window: Duration::seconds(20_000_000_000_000),
            ..Default::default()
        };
        assert_eq!(policy.recent_since(now), DateTime::<Utc>::MIN_UTC);
    }

    #[test]
    fn test_oversized_config_window_falls_back() {
        let mut config = crate::config::RankingConfig::default();
        config.recent_window_secs = u64::MAX;
        let policy = RankingPolicy::from(&config);
        assert_eq!(policy.recent_window, Duration::hours(1));

        config.recent_window_secs = 20_000_000_000_000;
        config.utc_offset_minutes = i32::MAX;
        let policy = RankingPolicy::from(&config);
        assert_eq!(policy.utc_offset, Utc.fix());
        let now = Utc.with_ymd_and_hms(2026, 3, 1, 20, 0, 0).unwrap();
        assert!(policy.recent_since(now) <= now);
    }

    #[test]
    fn test_badge_parse_and_display() {
        assert_eq!("popular".parse::<Badge>().unwrap(), Badge::Popular);
        assert_eq!("RISING".parse::<Badge>().unwrap(), Badge::Rising);
        assert!("hot".parse::<Badge>().is_err());
        assert_eq!(Badge::Notable.to_string(), "Notable");
    }
}
