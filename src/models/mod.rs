pub mod grocery;
pub mod inventory;
pub mod recipe;

pub use grocery::{GroceryEntry, NewGroceryEntry};
pub use inventory::{InventoryItem, InventoryItemUpdate, NewInventoryItem};
pub use recipe::{IngredientAvailability, RecipeDefinition, RecipeMatch};
