pub mod config;
pub mod demo;
pub mod expiry;
pub mod grocery;
pub mod inventory;
pub mod ipc;
pub mod models;
pub mod products;
pub mod recipes;
pub mod settings;
mod utils;

use std::io;

use anyhow::Result;
use chrono::{Local, NaiveDate};
use serde::Serialize;

use config::AppConfig;
use grocery::GroceryStore;
use inventory::InventoryStore;
use models::NewInventoryItem;
use settings::{SettingsStore, SettingsUpdate, Theme, UserSettings};

/// Everything the app holds for one session. Commands borrow it; nothing
/// else owns the collections.
pub struct AppState {
    pub(crate) inventory: InventoryStore,
    pub(crate) grocery: GroceryStore,
    pub(crate) settings: SettingsStore,
    today: Option<NaiveDate>,
}

impl AppState {
    pub fn new(config: &AppConfig) -> Result<Self> {
        let settings = match &config.settings_path {
            Some(path) => SettingsStore::new(path.clone())?,
            None => SettingsStore::in_memory(),
        };

        let (inventory, grocery) = if config.seed_demo {
            (
                InventoryStore::with_items(demo::inventory()),
                GroceryStore::with_entries(demo::groceries()),
            )
        } else {
            (InventoryStore::new(), GroceryStore::new())
        };

        Ok(Self {
            inventory,
            grocery,
            settings,
            today: config.today,
        })
    }

    /// Empty stores, in-memory settings and a pinned date.
    pub fn empty(today: NaiveDate) -> Self {
        Self {
            inventory: InventoryStore::new(),
            grocery: GroceryStore::new(),
            settings: SettingsStore::in_memory(),
            today: Some(today),
        }
    }

    pub fn today(&self) -> NaiveDate {
        self.today.unwrap_or_else(|| Local::now().date_naive())
    }

    pub fn inventory(&self) -> &InventoryStore {
        &self.inventory
    }

    pub fn grocery(&self) -> &GroceryStore {
        &self.grocery
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FormOptions {
    pub inventory_categories: &'static [&'static str],
    pub grocery_categories: &'static [&'static str],
    pub inventory_units: &'static [&'static str],
    pub grocery_units: &'static [&'static str],
}

pub fn lookup_barcode(code: String) -> Result<String, String> {
    Ok(products::lookup_barcode(&code).to_string())
}

pub fn scan_barcode(state: &AppState, code: String) -> Result<NewInventoryItem, String> {
    if code.trim().is_empty() {
        return Err("barcode is required".into());
    }
    Ok(products::scan_draft(&code, state.today()))
}

pub fn suggest_items(state: &AppState, query: String) -> Result<Vec<NewInventoryItem>, String> {
    let today = state.today();
    Ok(products::suggest_items(&query)
        .iter()
        .map(|preset| preset.to_draft(today))
        .collect())
}

pub fn get_form_options() -> Result<FormOptions, String> {
    Ok(FormOptions {
        inventory_categories: products::INVENTORY_CATEGORIES,
        grocery_categories: products::GROCERY_CATEGORIES,
        inventory_units: products::INVENTORY_UNITS,
        grocery_units: products::GROCERY_UNITS,
    })
}

pub fn get_settings(state: &AppState) -> Result<UserSettings, String> {
    Ok(state.settings.get())
}

pub fn update_settings(
    state: &mut AppState,
    settings: SettingsUpdate,
) -> Result<UserSettings, String> {
    state.settings.update(settings).map_err(|e| e.to_string())
}

pub fn toggle_theme(state: &mut AppState) -> Result<Theme, String> {
    state.settings.toggle_theme().map_err(|e| e.to_string())
}

pub fn clear_all_data(state: &mut AppState) -> Result<(), String> {
    state.inventory.clear();
    state.grocery.clear();
    log::info!("Cleared all inventory and grocery data");
    Ok(())
}

pub fn run() {
    // Initialize logging (reads RUST_LOG env var)
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("Fridge inventory starting up...");

    let result = (|| -> Result<()> {
        let config = AppConfig::from_env()?;
        let mut state = AppState::new(&config)?;

        let stdin = io::stdin();
        let stdout = io::stdout();
        ipc::serve(&mut state, stdin.lock(), stdout.lock())
    })();

    if let Err(err) = result {
        log::error!("Fridge inventory stopped: {err:#}");
        std::process::exit(1);
    }
}
