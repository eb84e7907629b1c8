use crate::{
    inventory::view::{build_view, FridgeQuery, FridgeView},
    models::{InventoryItem, InventoryItemUpdate, NewInventoryItem},
    AppState,
};

pub fn get_fridge_view(state: &AppState, query: FridgeQuery) -> Result<FridgeView, String> {
    let reminders = state.settings.get().expiry_reminders;
    Ok(build_view(
        state.inventory.items(),
        &query,
        state.today(),
        reminders,
    ))
}

pub fn add_inventory_item(
    state: &mut AppState,
    item: NewInventoryItem,
) -> Result<InventoryItem, String> {
    let today = state.today();
    state
        .inventory
        .add(item, today)
        .map_err(|e| e.to_string())
}

pub fn remove_inventory_item(state: &mut AppState, id: String) -> Result<(), String> {
    state
        .inventory
        .remove(&id)
        .map(|_| ())
        .map_err(|e| e.to_string())
}

pub fn update_inventory_item(
    state: &mut AppState,
    id: String,
    updates: InventoryItemUpdate,
) -> Result<Option<InventoryItem>, String> {
    state
        .inventory
        .update(&id, updates)
        .map_err(|e| e.to_string())
}
