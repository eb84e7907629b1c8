use chrono::NaiveDate;
use serde::Serialize;
use uuid::Uuid;

use crate::inventory::InventoryStore;
use crate::models::{GroceryEntry, InventoryItem};
use crate::products::default_expiry;
use crate::log_info;

use super::GroceryStore;

const ENABLE_LOGS: bool = true;

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseSummary {
    pub added: Vec<InventoryItem>,
}

fn to_inventory_item(entry: &GroceryEntry, today: NaiveDate) -> InventoryItem {
    InventoryItem {
        id: Uuid::new_v4().to_string(),
        name: entry.name.clone(),
        category: entry.category.clone(),
        quantity: entry.quantity,
        unit: entry.unit.clone(),
        expiry_date: default_expiry(&entry.category, today),
        added_date: today,
        barcode: None,
    }
}

/// Moves every completed grocery entry into the fridge.
///
/// All converted items are built before either store changes, so the two
/// collections are updated together.
pub fn complete_purchase(
    groceries: &mut GroceryStore,
    inventory: &mut InventoryStore,
    today: NaiveDate,
) -> PurchaseSummary {
    let added: Vec<InventoryItem> = groceries
        .completed()
        .map(|entry| to_inventory_item(entry, today))
        .collect();

    inventory.extend(added.clone());
    groceries.retain_pending();

    log_info!("Purchase completed: {} item(s) moved to the fridge", added.len());
    PurchaseSummary { added }
}
