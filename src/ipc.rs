//! Line-delimited JSON command channel to the presentation layer.
//!
//! Each request line is `{"command": "<name>", "args": {...}}` with
//! camelCase argument names; each reply line is `{"ok": <value>}` or
//! `{"error": "<message>"}`.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value;

use crate::{
    grocery::commands as grocery,
    inventory::{commands as inventory, FridgeQuery},
    models::{InventoryItemUpdate, NewGroceryEntry, NewInventoryItem},
    recipes::commands as recipes,
    settings::SettingsUpdate,
    AppState,
};
use crate::{log_debug, log_warn};

const ENABLE_LOGS: bool = true;

#[derive(Debug, Clone, Deserialize)]
pub struct Request {
    pub command: String,
    #[serde(default)]
    pub args: Value,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum Response {
    Ok(Value),
    Error(String),
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct IdArgs {
    id: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ItemArgs {
    item: NewInventoryItem,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct UpdateArgs {
    id: String,
    updates: InventoryItemUpdate,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct EntryArgs {
    entry: NewGroceryEntry,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct NameArgs {
    name: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RecipeArgs {
    recipe_id: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CodeArgs {
    code: String,
}

#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
struct QueryArgs {
    query: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SettingsArgs {
    settings: SettingsUpdate,
}

fn args<T: DeserializeOwned>(value: Value) -> Result<T, String> {
    let value = if value.is_null() {
        Value::Object(Default::default())
    } else {
        value
    };
    serde_json::from_value(value).map_err(|e| format!("invalid arguments: {e}"))
}

fn reply<T: Serialize>(result: Result<T, String>) -> Response {
    match result.and_then(|value| serde_json::to_value(value).map_err(|e| e.to_string())) {
        Ok(value) => Response::Ok(value),
        Err(message) => Response::Error(message),
    }
}

/// Runs one command against the state.
pub fn dispatch(state: &mut AppState, request: Request) -> Response {
    let Request { command, args: raw } = request;
    log_debug!("Dispatching {command}");

    match command.as_str() {
        "get_fridge_view" => reply(args::<FridgeQuery>(raw).and_then(|query| {
            inventory::get_fridge_view(state, query)
        })),
        "add_inventory_item" => reply(
            args::<ItemArgs>(raw).and_then(|a| inventory::add_inventory_item(state, a.item)),
        ),
        "remove_inventory_item" => reply(
            args::<IdArgs>(raw).and_then(|a| inventory::remove_inventory_item(state, a.id)),
        ),
        "update_inventory_item" => reply(args::<UpdateArgs>(raw).and_then(|a| {
            inventory::update_inventory_item(state, a.id, a.updates)
        })),
        "get_grocery_view" => reply(grocery::get_grocery_view(state)),
        "add_grocery_entry" => reply(
            args::<EntryArgs>(raw).and_then(|a| grocery::add_grocery_entry(state, a.entry)),
        ),
        "add_recommended_grocery_entry" => reply(args::<NameArgs>(raw).and_then(|a| {
            grocery::add_recommended_grocery_entry(state, a.name)
        })),
        "remove_grocery_entry" => reply(
            args::<IdArgs>(raw).and_then(|a| grocery::remove_grocery_entry(state, a.id)),
        ),
        "toggle_grocery_entry" => reply(
            args::<IdArgs>(raw).and_then(|a| grocery::toggle_grocery_entry(state, a.id)),
        ),
        "complete_purchase" => reply(grocery::complete_purchase(state)),
        "get_recipes" => reply(recipes::get_recipes(state)),
        "get_recipe_detail" => reply(
            args::<RecipeArgs>(raw).and_then(|a| recipes::get_recipe_detail(state, a.recipe_id)),
        ),
        "cook_recipe" => reply(
            args::<RecipeArgs>(raw).and_then(|a| recipes::cook_recipe(state, a.recipe_id)),
        ),
        "lookup_barcode" => {
            reply(args::<CodeArgs>(raw).and_then(|a| crate::lookup_barcode(a.code)))
        }
        "scan_barcode" => {
            reply(args::<CodeArgs>(raw).and_then(|a| crate::scan_barcode(state, a.code)))
        }
        "suggest_items" => {
            reply(args::<QueryArgs>(raw).and_then(|a| crate::suggest_items(state, a.query)))
        }
        "get_form_options" => reply(crate::get_form_options()),
        "get_settings" => reply(crate::get_settings(state)),
        "update_settings" => reply(
            args::<SettingsArgs>(raw).and_then(|a| crate::update_settings(state, a.settings)),
        ),
        "toggle_theme" => reply(crate::toggle_theme(state)),
        "clear_all_data" => reply(crate::clear_all_data(state)),
        other => Response::Error(format!("unknown command '{other}'")),
    }
}

/// Parses and dispatches one request line.
pub fn handle_line(state: &mut AppState, line: &str) -> Response {
    match serde_json::from_str::<Request>(line) {
        Ok(request) => dispatch(state, request),
        Err(err) => {
            log_warn!("Malformed request: {err}");
            Response::Error(format!("malformed request: {err}"))
        }
    }
}

/// Serves requests until the reader is exhausted. Blank lines are skipped.
pub fn serve<R: BufRead, W: Write>(state: &mut AppState, reader: R, mut writer: W) -> Result<()> {
    for line in reader.lines() {
        let line = line.context("failed to read request")?;
        if line.trim().is_empty() {
            continue;
        }

        let response = handle_line(state, &line);
        serde_json::to_writer(&mut writer, &response)?;
        writer.write_all(b"\n")?;
        writer.flush().context("failed to write response")?;
    }
    Ok(())
}
