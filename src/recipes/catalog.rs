use crate::models::RecipeDefinition;

/// Built-in recipe catalog. Order matters: ties in match percentage keep it.
pub const RECIPES: &[RecipeDefinition] = &[
    RecipeDefinition {
        id: "1",
        name: "Classic Omelet",
        image_url: "https://images.unsplash.com/photo-1608039829572-78524f79c4c7?w=400",
        prep_time_minutes: 10,
        servings: 2,
        ingredients: &["eggs", "milk", "cheese", "butter"],
        instructions: &[
            "Beat eggs with milk in a bowl",
            "Heat butter in a pan over medium heat",
            "Pour egg mixture into the pan",
            "Add cheese when eggs are halfway cooked",
            "Fold and serve hot",
        ],
    },
    RecipeDefinition {
        id: "2",
        name: "Chicken Salad",
        image_url: "https://images.unsplash.com/photo-1546793665-c74683f339c1?w=400",
        prep_time_minutes: 20,
        servings: 4,
        ingredients: &["chicken breast", "lettuce", "tomatoes", "cheese", "olive oil"],
        instructions: &[
            "Grill chicken breast until fully cooked",
            "Chop lettuce and tomatoes",
            "Slice the cooked chicken",
            "Mix all ingredients in a bowl",
            "Drizzle with olive oil and season to taste",
        ],
    },
    RecipeDefinition {
        id: "3",
        name: "Tomato Soup",
        image_url: "https://images.unsplash.com/photo-1547592166-23ac45744acd?w=400",
        prep_time_minutes: 30,
        servings: 4,
        ingredients: &["tomatoes", "onion", "garlic", "chicken breast", "milk"],
        instructions: &[
            "Chop tomatoes and onion",
            "Sauté onion and garlic until fragrant",
            "Add tomatoes and cook until soft",
            "Blend until smooth",
            "Add milk and simmer for 10 minutes",
        ],
    },
    RecipeDefinition {
        id: "4",
        name: "Grilled Cheese Sandwich",
        image_url: "https://images.unsplash.com/photo-1528736235302-52922df5c122?w=400",
        prep_time_minutes: 10,
        servings: 1,
        ingredients: &["bread", "cheese", "butter"],
        instructions: &[
            "Butter one side of each bread slice",
            "Place cheese between bread slices",
            "Grill in a pan until golden brown on both sides",
            "Cut diagonally and serve hot",
        ],
    },
    RecipeDefinition {
        id: "5",
        name: "Caprese Salad",
        image_url: "https://images.unsplash.com/photo-1608897013039-887f21d8c804?w=400",
        prep_time_minutes: 5,
        servings: 2,
        ingredients: &["tomatoes", "cheese", "olive oil", "basil"],
        instructions: &[
            "Slice tomatoes and cheese",
            "Arrange alternating slices on a plate",
            "Drizzle with olive oil",
            "Add fresh basil leaves",
            "Season with salt and pepper",
        ],
    },
];

pub fn find_recipe(id: &str) -> Option<&'static RecipeDefinition> {
    RECIPES.iter().find(|recipe| recipe.id == id)
}
