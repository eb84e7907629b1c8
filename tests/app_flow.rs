use chrono::NaiveDate;
use fridge_inventory_lib::{
    clear_all_data,
    config::AppConfig,
    expiry::ExpiryStatus,
    grocery::commands::{
        add_grocery_entry, add_recommended_grocery_entry, complete_purchase, get_grocery_view,
        toggle_grocery_entry,
    },
    inventory::{
        commands::{add_inventory_item, get_fridge_view, remove_inventory_item},
        FridgeQuery,
    },
    models::{NewGroceryEntry, NewInventoryItem},
    recipes::commands::{cook_recipe, get_recipe_detail, get_recipes},
    settings::SettingsUpdate,
    update_settings, AppState,
};

fn date(m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, m, d).unwrap()
}

fn demo_state() -> AppState {
    let config = AppConfig {
        today: Some(date(12, 10)),
        ..AppConfig::default()
    };
    AppState::new(&config).unwrap()
}

fn quantity_of(state: &AppState, name: &str) -> Option<f64> {
    state
        .inventory()
        .items()
        .iter()
        .find(|item| item.name == name)
        .map(|item| item.quantity)
}

#[test]
fn demo_fridge_ranks_omelet_first() {
    let state = demo_state();
    let recipes = get_recipes(&state).unwrap();
    assert_eq!(recipes[0].recipe.name, "Classic Omelet");
    assert_eq!(recipes[0].match_percentage, 75);
    assert!(recipes
        .windows(2)
        .all(|pair| pair[0].match_percentage >= pair[1].match_percentage));
}

#[test]
fn cooking_an_omelet_deducts_one_unit_per_item() {
    let mut state = demo_state();
    let report = cook_recipe(&mut state, "1".into()).unwrap();

    // Milk had a single litre and is used up; eggs and cheese lose one unit.
    assert_eq!(report.consumed.len(), 3);
    assert_eq!(quantity_of(&state, "Milk"), None);
    assert_eq!(quantity_of(&state, "Eggs"), Some(11.0));
    assert_eq!(quantity_of(&state, "Cheese"), Some(249.0));
    assert_eq!(quantity_of(&state, "Tomatoes"), Some(6.0));
    assert_eq!(report.inventory_count, 4);
}

#[test]
fn cooking_unknown_recipe_changes_nothing() {
    let mut state = demo_state();
    assert!(cook_recipe(&mut state, "42".into()).is_err());
    assert_eq!(state.inventory().len(), 5);
}

#[test]
fn recipe_detail_reflects_cooking() {
    let mut state = demo_state();
    let before = get_recipe_detail(&state, "1".into()).unwrap();
    assert_eq!(before.recipe.match_percentage, 75);

    cook_recipe(&mut state, "1".into()).unwrap();
    let after = get_recipe_detail(&state, "1".into()).unwrap();
    let milk = after
        .availability
        .iter()
        .find(|a| a.ingredient == "milk")
        .unwrap();
    assert!(!milk.available);
    assert_eq!(after.recipe.match_percentage, 50);
}

#[test]
fn purchase_moves_completed_groceries_into_the_fridge() {
    let config = AppConfig {
        seed_demo: false,
        today: Some(date(12, 8)),
        ..AppConfig::default()
    };
    let mut state = AppState::new(&config).unwrap();

    let milk = add_grocery_entry(
        &mut state,
        NewGroceryEntry {
            name: "Milk".into(),
            category: "Dairy".into(),
            quantity: 1.0,
            unit: "L".into(),
        },
    )
    .unwrap();
    add_recommended_grocery_entry(&mut state, "Rice".into()).unwrap();
    toggle_grocery_entry(&mut state, milk.id).unwrap();

    let summary = complete_purchase(&mut state).unwrap();
    assert_eq!(summary.added.len(), 1);
    assert_eq!(summary.added[0].expiry_date, date(12, 15));
    assert_eq!(summary.added[0].added_date, date(12, 8));

    let grocery = get_grocery_view(&state).unwrap();
    assert_eq!(grocery.total_count, 1);
    assert_eq!(grocery.entries[0].name, "Rice");
    assert_eq!(state.inventory().len(), 1);
}

#[test]
fn fridge_view_tracks_adds_and_removals() {
    let mut state = demo_state();
    let item = add_inventory_item(
        &mut state,
        NewInventoryItem {
            name: "Orange Juice".into(),
            category: "Beverages".into(),
            quantity: 1.0,
            unit: "L".into(),
            expiry_date: Some(date(12, 9)),
            barcode: None,
        },
    )
    .unwrap();

    let view = get_fridge_view(
        &state,
        FridgeQuery {
            search: Some("juice".into()),
            category: None,
        },
    )
    .unwrap();
    assert_eq!(view.rows.len(), 1);
    assert_eq!(view.rows[0].expiry.status, ExpiryStatus::Expired);
    assert_eq!(view.rows[0].expiry.label, "Expired");
    assert_eq!(view.categories.last().map(String::as_str), Some("Beverages"));

    remove_inventory_item(&mut state, item.id).unwrap();
    assert_eq!(state.inventory().len(), 5);
}

#[test]
fn rejected_add_leaves_fridge_untouched() {
    let mut state = demo_state();
    let result = add_inventory_item(
        &mut state,
        NewInventoryItem {
            name: "Mystery".into(),
            ..NewInventoryItem::default()
        },
    );
    assert!(result.is_err());
    assert_eq!(state.inventory().len(), 5);
}

#[test]
fn disabling_reminders_hides_expiring_banner() {
    let mut state = demo_state();
    let view = get_fridge_view(&state, FridgeQuery::default()).unwrap();
    assert_eq!(view.expiring_soon, vec!["Milk", "Chicken Breast", "Tomatoes"]);

    update_settings(
        &mut state,
        SettingsUpdate {
            expiry_reminders: Some(false),
            ..SettingsUpdate::default()
        },
    )
    .unwrap();
    let view = get_fridge_view(&state, FridgeQuery::default()).unwrap();
    assert!(view.expiring_soon.is_empty());
}

#[test]
fn clearing_data_empties_recipe_matches() {
    let mut state = demo_state();
    clear_all_data(&mut state).unwrap();
    assert!(get_recipes(&state)
        .unwrap()
        .iter()
        .all(|m| m.match_percentage == 0));
}
