use serde::Serialize;

use crate::{
    log_info,
    models::{IngredientAvailability, RecipeDefinition, RecipeMatch},
    recipes::{self, Consumption, RECIPES},
    AppState,
};

const ENABLE_LOGS: bool = true;

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RecipeDetail {
    #[serde(flatten)]
    pub recipe: RecipeMatch,
    pub availability: Vec<IngredientAvailability>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CookReport {
    pub recipe_id: &'static str,
    pub consumed: Vec<Consumption>,
    pub inventory_count: usize,
}

fn recipe_by_id(recipe_id: &str) -> Result<&'static RecipeDefinition, String> {
    recipes::find_recipe(recipe_id).ok_or_else(|| format!("no recipe with id '{recipe_id}'"))
}

pub fn get_recipes(state: &AppState) -> Result<Vec<RecipeMatch>, String> {
    Ok(recipes::rank_recipes(RECIPES, state.inventory.items()))
}

pub fn get_recipe_detail(state: &AppState, recipe_id: String) -> Result<RecipeDetail, String> {
    let recipe = recipe_by_id(&recipe_id)?;
    let items = state.inventory.items();
    Ok(RecipeDetail {
        recipe: RecipeMatch {
            recipe: *recipe,
            match_percentage: recipes::match_percentage(recipe, items),
        },
        availability: recipes::ingredient_availability(recipe, items),
    })
}

pub fn cook_recipe(state: &mut AppState, recipe_id: String) -> Result<CookReport, String> {
    let recipe = recipe_by_id(&recipe_id)?;
    let outcome = recipes::cook(recipe, state.inventory.items());

    state.inventory.replace(outcome.inventory);
    log_info!(
        "Cooked {}: {} item(s) deducted",
        recipe.name,
        outcome.consumed.len()
    );

    Ok(CookReport {
        recipe_id: recipe.id,
        consumed: outcome.consumed,
        inventory_count: state.inventory.len(),
    })
}
