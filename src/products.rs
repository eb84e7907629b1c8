//! Static product data: barcode table, add-item presets, grocery
//! recommendations, category shelf life and form option lists.

use chrono::{Duration, NaiveDate};
use serde::Serialize;

use crate::models::{NewGroceryEntry, NewInventoryItem};

pub const UNKNOWN_PRODUCT: &str = "Unknown Product";

const BARCODES: &[(&str, &str)] = &[
    ("123456789", "Organic Milk"),
    ("987654321", "Free Range Eggs"),
    ("555555555", "Whole Wheat Bread"),
    ("111111111", "Greek Yogurt"),
    ("222222222", "Cheddar Cheese"),
];

/// Shelf life applied to purchased groceries, keyed by exact category name.
const CATEGORY_SHELF_LIFE_DAYS: &[(&str, i64)] = &[
    ("Dairy", 7),
    ("Meat", 3),
    ("Vegetables", 5),
    ("Fruits", 7),
    ("Bakery", 5),
    ("Beverages", 30),
];

pub const DEFAULT_SHELF_LIFE_DAYS: i64 = 7;

/// Expiry offset used for suggested and scanned items.
pub const DRAFT_EXPIRY_DAYS: i64 = 7;

pub const INVENTORY_CATEGORIES: &[&str] = &[
    "Dairy",
    "Meat",
    "Vegetables",
    "Fruits",
    "Bakery",
    "Beverages",
    "Other",
];

pub const GROCERY_CATEGORIES: &[&str] = &[
    "Dairy",
    "Meat",
    "Vegetables",
    "Fruits",
    "Bakery",
    "Beverages",
    "Grains",
    "Other",
];

pub const INVENTORY_UNITS: &[&str] = &["pcs", "g", "kg", "L", "ml", "oz", "lb"];
pub const GROCERY_UNITS: &[&str] = &["pcs", "g", "kg", "L", "ml", "oz", "lb", "loaf"];

#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProductPreset {
    pub name: &'static str,
    pub category: &'static str,
    pub quantity: f64,
    pub unit: &'static str,
}

/// Presets offered by the add-item dialog.
pub const SUGGESTED_ITEMS: &[ProductPreset] = &[
    ProductPreset { name: "Milk", category: "Dairy", quantity: 1.0, unit: "L" },
    ProductPreset { name: "Eggs", category: "Dairy", quantity: 12.0, unit: "pcs" },
    ProductPreset { name: "Bread", category: "Bakery", quantity: 1.0, unit: "loaf" },
    ProductPreset { name: "Chicken Breast", category: "Meat", quantity: 500.0, unit: "g" },
    ProductPreset { name: "Tomatoes", category: "Vegetables", quantity: 4.0, unit: "pcs" },
    ProductPreset { name: "Lettuce", category: "Vegetables", quantity: 1.0, unit: "head" },
    ProductPreset { name: "Cheese", category: "Dairy", quantity: 250.0, unit: "g" },
    ProductPreset { name: "Yogurt", category: "Dairy", quantity: 500.0, unit: "g" },
    ProductPreset { name: "Orange Juice", category: "Beverages", quantity: 1.0, unit: "L" },
    ProductPreset { name: "Apples", category: "Fruits", quantity: 6.0, unit: "pcs" },
];

/// One-tap additions for the grocery list.
pub const RECOMMENDED_GROCERIES: &[ProductPreset] = &[
    ProductPreset { name: "Milk", category: "Dairy", quantity: 1.0, unit: "L" },
    ProductPreset { name: "Eggs", category: "Dairy", quantity: 12.0, unit: "pcs" },
    ProductPreset { name: "Bread", category: "Bakery", quantity: 1.0, unit: "loaf" },
    ProductPreset { name: "Bananas", category: "Fruits", quantity: 6.0, unit: "pcs" },
    ProductPreset { name: "Rice", category: "Grains", quantity: 1.0, unit: "kg" },
];

impl ProductPreset {
    pub fn to_draft(&self, today: NaiveDate) -> NewInventoryItem {
        NewInventoryItem {
            name: self.name.into(),
            category: self.category.into(),
            quantity: self.quantity,
            unit: self.unit.into(),
            expiry_date: Some(today + Duration::days(DRAFT_EXPIRY_DAYS)),
            barcode: None,
        }
    }

    pub fn to_grocery_entry(&self) -> NewGroceryEntry {
        NewGroceryEntry {
            name: self.name.into(),
            category: self.category.into(),
            quantity: self.quantity,
            unit: self.unit.into(),
        }
    }
}

pub fn lookup_barcode(code: &str) -> &'static str {
    let code = code.trim();
    BARCODES
        .iter()
        .find(|(known, _)| *known == code)
        .map(|(_, name)| *name)
        .unwrap_or(UNKNOWN_PRODUCT)
}

/// Draft for the add-item form after a scan. The product lookup only
/// supplies a name; everything else keeps the form defaults.
pub fn scan_draft(code: &str, today: NaiveDate) -> NewInventoryItem {
    NewInventoryItem {
        name: lookup_barcode(code).into(),
        expiry_date: Some(today + Duration::days(DRAFT_EXPIRY_DAYS)),
        barcode: Some(code.trim().to_string()),
        ..NewInventoryItem::default()
    }
}

pub fn suggest_items(query: &str) -> Vec<ProductPreset> {
    let query = query.trim().to_lowercase();
    SUGGESTED_ITEMS
        .iter()
        .filter(|item| item.name.to_lowercase().contains(&query))
        .copied()
        .collect()
}

pub fn recommended_grocery(name: &str) -> Option<&'static ProductPreset> {
    RECOMMENDED_GROCERIES
        .iter()
        .find(|item| item.name.eq_ignore_ascii_case(name.trim()))
}

pub fn shelf_life_days(category: &str) -> i64 {
    CATEGORY_SHELF_LIFE_DAYS
        .iter()
        .find(|(known, _)| *known == category)
        .map(|(_, days)| *days)
        .unwrap_or(DEFAULT_SHELF_LIFE_DAYS)
}

pub fn default_expiry(category: &str, today: NaiveDate) -> NaiveDate {
    today + Duration::days(shelf_life_days(category))
}
