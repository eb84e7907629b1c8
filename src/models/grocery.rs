use serde::{Deserialize, Serialize};

/// An entry on the grocery list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GroceryEntry {
    pub id: String,
    pub name: String,
    pub quantity: f64,
    pub unit: String,
    pub completed: bool,
    pub category: String,
}

/// Input data for adding a grocery entry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewGroceryEntry {
    pub name: String,
    pub category: String,
    pub quantity: f64,
    pub unit: String,
}

impl Default for NewGroceryEntry {
    fn default() -> Self {
        Self {
            name: String::new(),
            category: "Dairy".into(),
            quantity: 1.0,
            unit: "pcs".into(),
        }
    }
}
