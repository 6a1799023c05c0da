use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::ranking::ListingRecord;

/// 列表记录（listings 表的一行）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    pub id: i64,
    pub title: String,
    pub publisher: Option<String>,
    pub author: Option<String>,
    pub destination_url: String,
    pub category: Option<String>,
    pub deadline: NaiveDate,
    pub created_at: DateTime<Utc>,
}

impl ListingRecord for Listing {
    fn listing_id(&self) -> i64 {
        self.id
    }

    fn deadline(&self) -> NaiveDate {
        self.deadline
    }
}

/// 新建列表所需字段
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewListing {
    pub title: String,
    #[serde(default)]
    pub publisher: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    pub destination_url: String,
    #[serde(default)]
    pub category: Option<String>,
    pub deadline: NaiveDate,
}

impl NewListing {
    pub fn new(title: impl Into<String>, destination_url: impl Into<String>, deadline: NaiveDate) -> Self {
        Self {
            title: title.into(),
            publisher: None,
            author: None,
            destination_url: destination_url.into(),
            category: None,
            deadline,
        }
    }
}

/// 单个列表的累计点击（含已过期列表）
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingClicks {
    pub id: i64,
    pub title: String,
    pub deadline: NaiveDate,
    pub created_at: DateTime<Utc>,
    pub click_count: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ranking::{AnnotatedListing, Badge};
    use chrono::TimeZone;

    #[test]
    fn test_annotated_listing_json_is_camel_case() {
        let listing = Listing {
            id: 3,
            title: "Data engineer".into(),
            publisher: None,
            author: None,
            destination_url: "https://jobs.example.com/3".into(),
            category: None,
            deadline: NaiveDate::from_ymd_opt(2026, 11, 1).unwrap(),
            created_at: Utc.with_ymd_and_hms(2026, 10, 1, 0, 0, 0).unwrap(),
        };
        let annotated = AnnotatedListing {
            listing,
            click_count: 12,
            badge: Some(Badge::Popular),
        };

        let json = serde_json::to_value(&annotated).unwrap();
        let obj = json.as_object().unwrap();

        assert_eq!(json["destinationUrl"], "https://jobs.example.com/3");
        assert_eq!(json["clickCount"], 12);
        assert_eq!(json["badge"], "Popular");
        assert!(obj.contains_key("createdAt"));
        assert!(!obj.keys().any(|k| k.contains('_')));
    }
}
