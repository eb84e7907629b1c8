use crate::models::{IngredientAvailability, InventoryItem, RecipeDefinition, RecipeMatch};

/// Loose ingredient rule: either name contains the other.
///
/// `item_name` must already be lowercase. Short ingredients can match
/// unrelated items this way ("oil" in "broiler"); that looseness is kept.
pub fn names_match(item_name: &str, ingredient: &str) -> bool {
    item_name.contains(ingredient) || ingredient.contains(item_name)
}

fn inventory_names(inventory: &[InventoryItem]) -> Vec<String> {
    inventory.iter().map(|item| item.name.to_lowercase()).collect()
}

fn ingredient_present(names: &[String], ingredient: &str) -> bool {
    names.iter().any(|name| names_match(name, ingredient))
}

/// Integer percentage rounded half up. A recipe without ingredients scores 0.
fn percentage(matched: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    ((200 * matched + total) / (2 * total)) as u8
}

pub fn match_percentage(recipe: &RecipeDefinition, inventory: &[InventoryItem]) -> u8 {
    let names = inventory_names(inventory);
    score(recipe, &names)
}

fn score(recipe: &RecipeDefinition, names: &[String]) -> u8 {
    let matched = recipe
        .ingredients
        .iter()
        .filter(|ingredient| ingredient_present(names, ingredient))
        .count();
    percentage(matched, recipe.ingredients.len())
}

/// Scores every recipe against the inventory, best match first.
///
/// The sort is stable, so equal scores keep catalog order.
pub fn rank_recipes(recipes: &[RecipeDefinition], inventory: &[InventoryItem]) -> Vec<RecipeMatch> {
    let names = inventory_names(inventory);

    let mut matches: Vec<RecipeMatch> = recipes
        .iter()
        .map(|recipe| RecipeMatch {
            recipe: *recipe,
            match_percentage: score(recipe, &names),
        })
        .collect();

    matches.sort_by(|a, b| b.match_percentage.cmp(&a.match_percentage));
    matches
}

/// Per-ingredient availability for the recipe detail view.
pub fn ingredient_availability(
    recipe: &RecipeDefinition,
    inventory: &[InventoryItem],
) -> Vec<IngredientAvailability> {
    let names = inventory_names(inventory);
    recipe
        .ingredients
        .iter()
        .map(|&ingredient| IngredientAvailability {
            ingredient,
            available: ingredient_present(&names, ingredient),
        })
        .collect()
}
