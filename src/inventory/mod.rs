pub mod commands;
pub mod view;

use anyhow::{anyhow, bail, Result};
use chrono::NaiveDate;
use uuid::Uuid;

use crate::models::{InventoryItem, InventoryItemUpdate, NewInventoryItem};
use crate::{log_debug, log_info, log_warn};

pub use view::{FridgeQuery, FridgeRow, FridgeView};

const ENABLE_LOGS: bool = true;

pub(crate) fn validate_quantity(quantity: f64) -> Result<()> {
    if !quantity.is_finite() || quantity <= 0.0 {
        bail!("quantity must be greater than zero, got {quantity}");
    }
    Ok(())
}

pub(crate) fn validate_name(name: &str) -> Result<String> {
    let name = name.trim();
    if name.is_empty() {
        bail!("item name is required");
    }
    Ok(name.to_string())
}

/// The fridge contents. Every item held here has a positive quantity.
#[derive(Debug, Default)]
pub struct InventoryStore {
    items: Vec<InventoryItem>,
}

impl InventoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_items(items: Vec<InventoryItem>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[InventoryItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&InventoryItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Validates and appends a new item. Nothing is stored on error.
    pub fn add(&mut self, input: NewInventoryItem, today: NaiveDate) -> Result<InventoryItem> {
        let item = match build_item(input, today) {
            Ok(item) => item,
            Err(err) => {
                log_warn!("Rejected inventory item: {err}");
                return Err(err);
            }
        };

        log_info!("Added {} {} {} to the fridge", item.quantity, item.unit, item.name);
        self.items.push(item.clone());
        Ok(item)
    }

    /// Appends already built items, as produced by purchase completion.
    pub(crate) fn extend(&mut self, items: Vec<InventoryItem>) {
        self.items.extend(items);
    }

    pub fn remove(&mut self, id: &str) -> Result<InventoryItem> {
        let index = self
            .items
            .iter()
            .position(|item| item.id == id)
            .ok_or_else(|| anyhow!("no inventory item with id '{id}'"))?;
        let removed = self.items.remove(index);
        log_info!("Removed {} from the fridge", removed.name);
        Ok(removed)
    }

    /// Applies a partial update. A quantity of zero or less removes the
    /// item and returns `None`.
    pub fn update(&mut self, id: &str, update: InventoryItemUpdate) -> Result<Option<InventoryItem>> {
        let index = self
            .items
            .iter()
            .position(|item| item.id == id)
            .ok_or_else(|| anyhow!("no inventory item with id '{id}'"))?;

        let name = update.name.as_deref().map(validate_name).transpose()?;
        if let Some(quantity) = update.quantity {
            if !quantity.is_finite() {
                bail!("quantity must be a finite number");
            }
            if quantity <= 0.0 {
                let removed = self.items.remove(index);
                log_info!("{} ran out; removed from the fridge", removed.name);
                return Ok(None);
            }
        }

        let item = &mut self.items[index];
        if let Some(name) = name {
            item.name = name;
        }
        if let Some(category) = update.category {
            item.category = category;
        }
        if let Some(quantity) = update.quantity {
            item.quantity = quantity;
        }
        if let Some(unit) = update.unit {
            item.unit = unit;
        }
        if let Some(expiry_date) = update.expiry_date {
            item.expiry_date = expiry_date;
        }
        if update.barcode.is_some() {
            item.barcode = update.barcode;
        }

        log_debug!("Updated inventory item {}", item.id);
        Ok(Some(item.clone()))
    }

    /// Swaps in a whole new inventory, used by the cook transaction.
    pub(crate) fn replace(&mut self, items: Vec<InventoryItem>) {
        self.items = items;
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}

fn build_item(input: NewInventoryItem, today: NaiveDate) -> Result<InventoryItem> {
    let name = validate_name(&input.name)?;
    let expiry_date = input
        .expiry_date
        .ok_or_else(|| anyhow!("expiry date is required for {name}"))?;
    validate_quantity(input.quantity)?;

    Ok(InventoryItem {
        id: Uuid::new_v4().to_string(),
        name,
        category: input.category,
        quantity: input.quantity,
        unit: input.unit,
        expiry_date,
        added_date: today,
        barcode: input.barcode.filter(|code| !code.trim().is_empty()),
    })
}
