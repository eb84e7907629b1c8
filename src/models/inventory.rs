//! Fridge inventory data models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single item stored in the fridge.
///
/// `quantity` is always greater than zero while the item is held by the
/// inventory store; reaching zero removes the item.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItem {
    pub id: String,
    pub name: String,
    pub category: String,
    pub quantity: f64,
    pub unit: String,
    pub expiry_date: NaiveDate,
    pub added_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub barcode: Option<String>,
}

/// Input data for adding an item to the fridge.
///
/// `expiry_date` is optional here so an incomplete form can be represented;
/// the store rejects it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewInventoryItem {
    pub name: String,
    pub category: String,
    pub quantity: f64,
    pub unit: String,
    #[serde(default)]
    pub expiry_date: Option<NaiveDate>,
    #[serde(default)]
    pub barcode: Option<String>,
}

impl Default for NewInventoryItem {
    fn default() -> Self {
        Self {
            name: String::new(),
            category: "Dairy".into(),
            quantity: 1.0,
            unit: "pcs".into(),
            expiry_date: None,
            barcode: None,
        }
    }
}

/// Partial update applied to an existing item. Absent fields are left as-is.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItemUpdate {
    pub name: Option<String>,
    pub category: Option<String>,
    pub quantity: Option<f64>,
    pub unit: Option<String>,
    pub expiry_date: Option<NaiveDate>,
    pub barcode: Option<String>,
}
