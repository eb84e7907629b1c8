pub mod commands;
pub mod purchase;

use anyhow::{anyhow, Result};
use serde::Serialize;
use uuid::Uuid;

use crate::inventory::{validate_name, validate_quantity};
use crate::models::{GroceryEntry, NewGroceryEntry};
use crate::{log_info, log_warn};

pub use purchase::{complete_purchase, PurchaseSummary};

const ENABLE_LOGS: bool = true;

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GroceryView {
    pub completed_count: usize,
    pub total_count: usize,
    pub entries: Vec<GroceryEntry>,
}

#[derive(Debug, Default)]
pub struct GroceryStore {
    entries: Vec<GroceryEntry>,
}

impl GroceryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entries(entries: Vec<GroceryEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[GroceryEntry] {
        &self.entries
    }

    pub fn add(&mut self, input: NewGroceryEntry) -> Result<GroceryEntry> {
        let entry = match build_entry(input) {
            Ok(entry) => entry,
            Err(err) => {
                log_warn!("Rejected grocery entry: {err}");
                return Err(err);
            }
        };

        log_info!("Added {} to the grocery list", entry.name);
        self.entries.push(entry.clone());
        Ok(entry)
    }

    pub fn remove(&mut self, id: &str) -> Result<GroceryEntry> {
        let index = self.position(id)?;
        let removed = self.entries.remove(index);
        log_info!("Removed {} from the grocery list", removed.name);
        Ok(removed)
    }

    /// Flips `completed` and returns the entry's new state.
    pub fn toggle(&mut self, id: &str) -> Result<GroceryEntry> {
        let index = self.position(id)?;
        let entry = &mut self.entries[index];
        entry.completed = !entry.completed;
        Ok(entry.clone())
    }

    pub fn completed(&self) -> impl Iterator<Item = &GroceryEntry> {
        self.entries.iter().filter(|entry| entry.completed)
    }

    pub fn view(&self) -> GroceryView {
        GroceryView {
            completed_count: self.completed().count(),
            total_count: self.entries.len(),
            entries: self.entries.clone(),
        }
    }

    pub(crate) fn retain_pending(&mut self) {
        self.entries.retain(|entry| !entry.completed);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    fn position(&self, id: &str) -> Result<usize> {
        self.entries
            .iter()
            .position(|entry| entry.id == id)
            .ok_or_else(|| anyhow!("no grocery entry with id '{id}'"))
    }
}

fn build_entry(input: NewGroceryEntry) -> Result<GroceryEntry> {
    let name = validate_name(&input.name)?;
    validate_quantity(input.quantity)?;

    Ok(GroceryEntry {
        id: Uuid::new_v4().to_string(),
        name,
        quantity: input.quantity,
        unit: input.unit,
        completed: false,
        category: input.category,
    })
}
