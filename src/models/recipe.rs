//! Recipe catalog models.

use serde::Serialize;

/// A read-only entry of the built-in recipe catalog.
///
/// Ingredient names are stored lowercase; matching relies on that.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RecipeDefinition {
    pub id: &'static str,
    pub name: &'static str,
    pub image_url: &'static str,
    pub prep_time_minutes: u32,
    pub servings: u32,
    pub ingredients: &'static [&'static str],
    pub instructions: &'static [&'static str],
}

/// A recipe ranked against the current inventory.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RecipeMatch {
    #[serde(flatten)]
    pub recipe: RecipeDefinition,
    pub match_percentage: u8,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct IngredientAvailability {
    pub ingredient: &'static str,
    pub available: bool,
}
