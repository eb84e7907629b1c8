//! Expiry classification for fridge items.
//!
//! Everything here works on calendar dates (`NaiveDate`), so the time of day
//! never shifts a result across a day boundary.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::InventoryItem;

/// Items expiring within this many days (inclusive) are flagged.
pub const WARNING_WINDOW_DAYS: i64 = 3;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum ExpiryStatus {
    Expired,
    Warning,
    Good,
}

impl ExpiryStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExpiryStatus::Expired => "expired",
            ExpiryStatus::Warning => "warning",
            ExpiryStatus::Good => "good",
        }
    }
}

/// Classification of one expiry date relative to today.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ExpiryInfo {
    pub status: ExpiryStatus,
    pub days_remaining: i64,
    pub label: String,
}

/// Whole calendar days from `today` until `expiry`. Negative once expired.
pub fn days_remaining(expiry: NaiveDate, today: NaiveDate) -> i64 {
    expiry.signed_duration_since(today).num_days()
}

pub fn status_for_days(days: i64) -> ExpiryStatus {
    if days < 0 {
        ExpiryStatus::Expired
    } else if days <= WARNING_WINDOW_DAYS {
        ExpiryStatus::Warning
    } else {
        ExpiryStatus::Good
    }
}

pub fn label_for_days(days: i64) -> String {
    match days {
        d if d < 0 => "Expired".to_string(),
        0 => "Expires today".to_string(),
        1 => "Expires tomorrow".to_string(),
        d => format!("{d} days left"),
    }
}

pub fn classify(expiry: NaiveDate, today: NaiveDate) -> ExpiryInfo {
    let days = days_remaining(expiry, today);
    ExpiryInfo {
        status: status_for_days(days),
        days_remaining: days,
        label: label_for_days(days),
    }
}

/// Items inside the warning window. Already expired items are not included.
pub fn expiring_soon<'a>(items: &'a [InventoryItem], today: NaiveDate) -> Vec<&'a InventoryItem> {
    items
        .iter()
        .filter(|item| {
            let days = days_remaining(item.expiry_date, today);
            (0..=WARNING_WINDOW_DAYS).contains(&days)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Local, NaiveTime};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn item(name: &str, expiry: NaiveDate) -> InventoryItem {
        InventoryItem {
            id: name.to_lowercase(),
            name: name.into(),
            category: "Dairy".into(),
            quantity: 1.0,
            unit: "pcs".into(),
            expiry_date: expiry,
            added_date: date(2025, 12, 1),
            barcode: None,
        }
    }

    #[test]
    fn expired_iff_days_negative() {
        let today = date(2025, 12, 10);
        for offset in -10..=10 {
            let expiry = today + Duration::days(offset);
            let info = classify(expiry, today);
            assert_eq!(info.days_remaining, offset);
            assert_eq!(info.status == ExpiryStatus::Expired, offset < 0);
        }
    }

    #[test]
    fn warning_window_boundaries() {
        assert_eq!(status_for_days(-1), ExpiryStatus::Expired);
        assert_eq!(status_for_days(0), ExpiryStatus::Warning);
        assert_eq!(status_for_days(3), ExpiryStatus::Warning);
        assert_eq!(status_for_days(4), ExpiryStatus::Good);
    }

    #[test]
    fn labels() {
        assert_eq!(label_for_days(-5), "Expired");
        assert_eq!(label_for_days(0), "Expires today");
        assert_eq!(label_for_days(1), "Expires tomorrow");
        assert_eq!(label_for_days(2), "2 days left");
        assert_eq!(label_for_days(30), "30 days left");
    }

    #[test]
    fn next_calendar_day_is_one_even_late_at_night() {
        let today = date(2025, 12, 8);
        let late = today.and_time(NaiveTime::from_hms_opt(23, 59, 0).unwrap());
        // Only a minute separates the two instants, but they are a calendar day apart.
        assert_eq!(days_remaining(date(2025, 12, 9), late.date()), 1);
        assert_eq!(classify(date(2025, 12, 9), today).label, "Expires tomorrow");
    }

    #[test]
    fn works_across_month_and_year_boundaries() {
        assert_eq!(days_remaining(date(2026, 1, 2), date(2025, 12, 30)), 3);
        assert_eq!(days_remaining(date(2025, 2, 28), date(2025, 3, 1)), -1);
    }

    #[test]
    fn expiring_soon_excludes_expired_and_good() {
        let today = Local::now().date_naive();
        let items = vec![
            item("Old", today - Duration::days(1)),
            item("Today", today),
            item("Soon", today + Duration::days(3)),
            item("Later", today + Duration::days(4)),
        ];

        let names: Vec<_> = expiring_soon(&items, today)
            .into_iter()
            .map(|item| item.name.as_str())
            .collect();
        assert_eq!(names, vec!["Today", "Soon"]);
    }
}
