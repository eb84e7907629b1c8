use crate::{
    grocery::{purchase, GroceryView, PurchaseSummary},
    models::{GroceryEntry, NewGroceryEntry},
    products, AppState,
};

pub fn get_grocery_view(state: &AppState) -> Result<GroceryView, String> {
    Ok(state.grocery.view())
}

pub fn add_grocery_entry(
    state: &mut AppState,
    entry: NewGroceryEntry,
) -> Result<GroceryEntry, String> {
    state.grocery.add(entry).map_err(|e| e.to_string())
}

/// Adds one of the recommended items by name.
pub fn add_recommended_grocery_entry(
    state: &mut AppState,
    name: String,
) -> Result<GroceryEntry, String> {
    let preset = products::recommended_grocery(&name)
        .ok_or_else(|| format!("'{name}' is not a recommended item"))?;
    state
        .grocery
        .add(preset.to_grocery_entry())
        .map_err(|e| e.to_string())
}

pub fn remove_grocery_entry(state: &mut AppState, id: String) -> Result<(), String> {
    state
        .grocery
        .remove(&id)
        .map(|_| ())
        .map_err(|e| e.to_string())
}

pub fn toggle_grocery_entry(state: &mut AppState, id: String) -> Result<GroceryEntry, String> {
    state.grocery.toggle(&id).map_err(|e| e.to_string())
}

pub fn complete_purchase(state: &mut AppState) -> Result<PurchaseSummary, String> {
    let today = state.today();
    Ok(purchase::complete_purchase(
        &mut state.grocery,
        &mut state.inventory,
        today,
    ))
}
