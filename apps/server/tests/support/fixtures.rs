//! Recipe fixtures shared by the integration tests.

use cookbook::models::{Ingredient, IngredientSection, PrepInfo, Recipe};

pub fn recipe(title: &str, tags: &[&str]) -> Recipe {
    Recipe {
        title: title.to_string(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        ..Default::default()
    }
}

pub fn full_recipe() -> Recipe {
    Recipe {
        id: 0,
        favorite: true,
        title: "Vietnamese Tomato Tofu".to_string(),
        url: "https://example.org/tomato-tofu".to_string(),
        image_source: "https://example.org/tomato-tofu.jpg".to_string(),
        prep_info: PrepInfo {
            prep_time: "10 min".to_string(),
            cook_time: "20 min".to_string(),
            total_time: "30 min".to_string(),
            yield_: "4 servings".to_string(),
        },
        tags: vec!["vegan".to_string(), "tag 2".to_string()],
        ingredient_sections: vec![IngredientSection {
            header: "Main".to_string(),
            ingredients: vec![
                Ingredient {
                    quantity: 400.0,
                    unit: "g".to_string(),
                    ingredient: "firm tofu".to_string(),
                    other: "cubed".to_string(),
                },
                Ingredient {
                    quantity: 3.0,
                    unit: String::new(),
                    ingredient: "tomatoes".to_string(),
                    other: String::new(),
                },
            ],
        }],
        directions: vec![
            "Fry the tofu".to_string(),
            "Add tomatoes and simmer".to_string(),
        ],
        notes: vec!["Better the next day".to_string()],
    }
}

/// The search fixture set: one savory recipe and two desserts.
pub fn search_fixture() -> Vec<Recipe> {
    vec![
        full_recipe(),
        recipe("Chocolate Mousse", &["dessert", "tag 2"]),
        recipe("Lemon Tart", &["Dessert"]),
    ]
}
