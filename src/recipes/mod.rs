pub mod catalog;
pub mod commands;
pub mod cook;
pub mod matcher;

pub use catalog::{find_recipe, RECIPES};
pub use cook::{cook, Consumption, CookOutcome};
pub use matcher::{ingredient_availability, match_percentage, names_match, rank_recipes};
