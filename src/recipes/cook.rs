use serde::Serialize;

use crate::models::{InventoryItem, RecipeDefinition};

use super::matcher::names_match;

/// What cooking a recipe took out of one inventory item.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Consumption {
    pub item_id: String,
    pub item_name: String,
    pub ingredient: &'static str,
    /// `None` when the item was used up and removed.
    pub remaining: Option<f64>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CookOutcome {
    pub inventory: Vec<InventoryItem>,
    pub consumed: Vec<Consumption>,
}

/// Deducts a recipe's ingredients from the inventory.
///
/// Each item matching any ingredient loses exactly one unit, whatever its
/// unit or the recipe's servings; an item matching several ingredients is
/// still decremented once. Items that reach zero are dropped. The input is
/// not modified; callers swap in `CookOutcome::inventory` as a whole.
pub fn cook(recipe: &RecipeDefinition, inventory: &[InventoryItem]) -> CookOutcome {
    let mut remaining_items = Vec::with_capacity(inventory.len());
    let mut consumed = Vec::new();

    for item in inventory {
        let name = item.name.to_lowercase();
        let Some(&ingredient) = recipe
            .ingredients
            .iter()
            .find(|ingredient| names_match(&name, ingredient))
        else {
            remaining_items.push(item.clone());
            continue;
        };

        let quantity = item.quantity - 1.0;
        if quantity <= 0.0 {
            consumed.push(Consumption {
                item_id: item.id.clone(),
                item_name: item.name.clone(),
                ingredient,
                remaining: None,
            });
            continue;
        }

        consumed.push(Consumption {
            item_id: item.id.clone(),
            item_name: item.name.clone(),
            ingredient,
            remaining: Some(quantity),
        });
        remaining_items.push(InventoryItem {
            quantity,
            ..item.clone()
        });
    }

    CookOutcome {
        inventory: remaining_items,
        consumed,
    }
}
