//! Derived fridge screen data: search, category chips and expiry badges.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::expiry::{self, ExpiryInfo};
use crate::models::InventoryItem;

pub const ALL_CATEGORIES: &str = "All";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FridgeQuery {
    #[serde(default)]
    pub search: Option<String>,
    /// `None` or `"All"` disables the category filter.
    #[serde(default)]
    pub category: Option<String>,
}

impl FridgeQuery {
    fn matches(&self, item: &InventoryItem) -> bool {
        let matches_search = match self.search.as_deref().map(str::trim) {
            Some(query) if !query.is_empty() => item
                .name
                .to_lowercase()
                .contains(&query.to_lowercase()),
            _ => true,
        };
        let matches_category = match self.category.as_deref() {
            None | Some(ALL_CATEGORIES) => true,
            Some(category) => item.category == category,
        };
        matches_search && matches_category
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FridgeRow {
    #[serde(flatten)]
    pub item: InventoryItem,
    pub expiry: ExpiryInfo,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FridgeView {
    pub total_count: usize,
    /// `"All"` followed by each distinct category in first-seen order.
    pub categories: Vec<String>,
    pub expiring_soon: Vec<String>,
    pub rows: Vec<FridgeRow>,
}

pub fn categories(items: &[InventoryItem]) -> Vec<String> {
    let mut categories = vec![ALL_CATEGORIES.to_string()];
    for item in items {
        if !categories.iter().any(|known| *known == item.category) {
            categories.push(item.category.clone());
        }
    }
    categories
}

pub fn build_view(
    items: &[InventoryItem],
    query: &FridgeQuery,
    today: NaiveDate,
    show_reminders: bool,
) -> FridgeView {
    let expiring_soon = if show_reminders {
        expiry::expiring_soon(items, today)
            .into_iter()
            .map(|item| item.name.clone())
            .collect()
    } else {
        Vec::new()
    };

    let rows = items
        .iter()
        .filter(|item| query.matches(item))
        .map(|item| FridgeRow {
            item: item.clone(),
            expiry: expiry::classify(item.expiry_date, today),
        })
        .collect();

    FridgeView {
        total_count: items.len(),
        categories: categories(items),
        expiring_soon,
        rows,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expiry::ExpiryStatus;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 12, d).unwrap()
    }

    fn item(name: &str, category: &str, expiry: NaiveDate) -> InventoryItem {
        InventoryItem {
            id: name.to_lowercase(),
            name: name.into(),
            category: category.into(),
            quantity: 1.0,
            unit: "pcs".into(),
            expiry_date: expiry,
            added_date: date(1),
            barcode: None,
        }
    }

    fn fridge() -> Vec<InventoryItem> {
        vec![
            item("Milk", "Dairy", date(12)),
            item("Eggs", "Dairy", date(15)),
            item("Chicken Breast", "Meat", date(11)),
            item("Tomatoes", "Vegetables", date(7)),
        ]
    }

    #[test]
    fn categories_keep_first_seen_order() {
        assert_eq!(categories(&fridge()), vec!["All", "Dairy", "Meat", "Vegetables"]);
        assert_eq!(categories(&[]), vec!["All"]);
    }

    #[test]
    fn unfiltered_view_classifies_every_row() {
        let view = build_view(&fridge(), &FridgeQuery::default(), date(10), true);
        assert_eq!(view.total_count, 4);
        assert_eq!(view.rows.len(), 4);

        let statuses: Vec<_> = view.rows.iter().map(|row| row.expiry.status).collect();
        assert_eq!(
            statuses,
            vec![
                ExpiryStatus::Warning,
                ExpiryStatus::Good,
                ExpiryStatus::Warning,
                ExpiryStatus::Expired,
            ]
        );
        assert_eq!(view.expiring_soon, vec!["Milk", "Chicken Breast"]);
    }

    #[test]
    fn search_is_case_insensitive() {
        let query = FridgeQuery {
            search: Some("CHICK".into()),
            category: None,
        };
        let view = build_view(&fridge(), &query, date(10), true);
        assert_eq!(view.rows.len(), 1);
        assert_eq!(view.rows[0].item.name, "Chicken Breast");
        assert_eq!(view.total_count, 4);
    }

    #[test]
    fn category_filter_and_all() {
        let dairy = FridgeQuery {
            search: None,
            category: Some("Dairy".into()),
        };
        assert_eq!(build_view(&fridge(), &dairy, date(10), true).rows.len(), 2);

        let all = FridgeQuery {
            search: Some(" ".into()),
            category: Some(ALL_CATEGORIES.into()),
        };
        assert_eq!(build_view(&fridge(), &all, date(10), true).rows.len(), 4);
    }

    #[test]
    fn reminders_can_be_hidden() {
        let view = build_view(&fridge(), &FridgeQuery::default(), date(10), false);
        assert!(view.expiring_soon.is_empty());
        assert_eq!(view.rows.len(), 4);
    }
}
