//! Sample data the app starts with when demo seeding is enabled.

use chrono::NaiveDate;

use crate::models::{GroceryEntry, InventoryItem};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("demo dates are valid")
}

fn item(
    id: &str,
    name: &str,
    category: &str,
    quantity: f64,
    unit: &str,
    expiry: NaiveDate,
    added: NaiveDate,
) -> InventoryItem {
    InventoryItem {
        id: id.into(),
        name: name.into(),
        category: category.into(),
        quantity,
        unit: unit.into(),
        expiry_date: expiry,
        added_date: added,
        barcode: None,
    }
}

pub fn inventory() -> Vec<InventoryItem> {
    vec![
        item("1", "Milk", "Dairy", 1.0, "L", date(2025, 12, 12), date(2025, 12, 8)),
        item("2", "Eggs", "Dairy", 12.0, "pcs", date(2025, 12, 15), date(2025, 12, 5)),
        item("3", "Chicken Breast", "Meat", 500.0, "g", date(2025, 12, 11), date(2025, 12, 9)),
        item("4", "Tomatoes", "Vegetables", 6.0, "pcs", date(2025, 12, 13), date(2025, 12, 7)),
        item("5", "Cheese", "Dairy", 250.0, "g", date(2025, 12, 20), date(2025, 12, 6)),
    ]
}

pub fn groceries() -> Vec<GroceryEntry> {
    vec![
        GroceryEntry {
            id: "1".into(),
            name: "Bread".into(),
            quantity: 1.0,
            unit: "loaf".into(),
            completed: false,
            category: "Bakery".into(),
        },
        GroceryEntry {
            id: "2".into(),
            name: "Apples".into(),
            quantity: 6.0,
            unit: "pcs".into(),
            completed: false,
            category: "Fruits".into(),
        },
    ]
}
