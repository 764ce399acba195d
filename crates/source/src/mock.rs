use async_trait::async_trait;
use dishcover_recipe::{MatchMode, Recipe};

use crate::{ImageAnalyzer, RecipeSource, SourceError};

/// In-memory source with a fixed candidate set and a curated recommendation
/// set. Used when no backend is configured, and by tests.
pub struct MockSource {
    mode: MatchMode,
    candidates: Vec<Recipe>,
    curated: Vec<Recipe>,
}

impl MockSource {
    pub fn new(mode: MatchMode) -> Self {
        Self {
            mode,
            candidates: candidate_set(),
            curated: curated_set(),
        }
    }

    pub fn candidates(&self) -> &[Recipe] {
        &self.candidates
    }
}

#[async_trait]
impl RecipeSource for MockSource {
    async fn search(&self, selected: &[String]) -> Result<Vec<Recipe>, SourceError> {
        Ok(dishcover_recipe::search(
            selected,
            &self.candidates,
            self.mode.clone(),
        ))
    }

    async fn recommend(&self, user_id: Option<&str>) -> Result<Vec<Recipe>, SourceError> {
        if let Some(user_id) = user_id {
            tracing::debug!(user_id, "personalization unavailable, serving the curated set");
        }
        Ok(dishcover_recipe::recommend(&self.curated))
    }
}

/// Analyzer stand-in returning a fixed detection, so the photo flow works
/// end to end without the real analysis endpoint.
pub struct MockImageAnalyzer;

#[async_trait]
impl ImageAnalyzer for MockImageAnalyzer {
    async fn ingredients_from_image(&self, image: &[u8]) -> Result<Vec<String>, SourceError> {
        if image.is_empty() {
            return Err(SourceError::BadPayload("empty image".to_string()));
        }
        Ok(detected_set())
    }
}

fn recipe(
    id: u32,
    name: &str,
    minutes: u32,
    ingredients: &[&str],
    steps: &[&str],
    image_url: &str,
) -> Recipe {
    Recipe {
        id,
        name: name.to_string(),
        ingredients: ingredients.iter().map(|i| i.to_string()).collect(),
        steps: steps.iter().map(|s| s.to_string()).collect(),
        minutes,
        image_url: Some(image_url.to_string()),
    }
}

fn candidate_set() -> Vec<Recipe> {
    vec![
        recipe(
            1,
            "Spaghetti Aglio e Olio",
            20,
            &["Pasta", "Garlic", "Olive Oil", "Black Pepper"],
            &[
                "Boil pasta",
                "Saute garlic in olive oil",
                "Toss pasta with oil",
                "Season with pepper",
                "Serve immediately",
            ],
            "https://images.unsplash.com/photo-1621996346565-e3dbc638d517?w=400",
        ),
        recipe(
            2,
            "Scrambled Eggs",
            10,
            &["Eggs", "Butter", "Salt", "Black Pepper"],
            &[
                "Beat eggs",
                "Heat butter in pan",
                "Add eggs to pan",
                "Scramble gently",
                "Season and serve",
            ],
            "https://images.unsplash.com/photo-1582169296194-c4146cdc2b95?w=400",
        ),
        recipe(
            3,
            "Tomato Basil Salad",
            15,
            &["Tomato", "Basil", "Olive Oil", "Salt"],
            &[
                "Slice tomatoes",
                "Chop basil",
                "Drizzle with olive oil",
                "Season with salt",
                "Let flavors meld",
            ],
            "https://images.unsplash.com/photo-1512621776951-a57141f2eefd?w=400",
        ),
        recipe(
            4,
            "Grilled Chicken Breast",
            25,
            &["Chicken", "Olive Oil", "Salt", "Black Pepper", "Garlic"],
            &[
                "Season chicken",
                "Heat grill",
                "Cook 6-7 minutes per side",
                "Check internal temperature",
                "Rest before serving",
            ],
            "https://images.unsplash.com/photo-1603133872878-684f208fb84b?w=400",
        ),
        recipe(
            5,
            "Rice Pilaf",
            30,
            &["Rice", "Onion", "Butter", "Salt"],
            &[
                "Saute onion in butter",
                "Add rice and toast",
                "Add water and salt",
                "Simmer covered",
                "Fluff with fork",
            ],
            "https://images.unsplash.com/photo-1586201375761-83865001e31c?w=400",
        ),
    ]
}

fn curated_set() -> Vec<Recipe> {
    vec![
        recipe(
            1,
            "Quick Pasta Carbonara",
            25,
            &["Pasta", "Eggs", "Cheese", "Bacon", "Black Pepper"],
            &[
                "Boil pasta",
                "Cook bacon",
                "Mix eggs and cheese",
                "Combine all ingredients",
                "Serve hot",
            ],
            "https://images.unsplash.com/photo-1621996346565-e3dbc638d517?w=400",
        ),
        recipe(
            2,
            "Fresh Garden Salad",
            10,
            &["Lettuce", "Tomato", "Cucumber", "Olive Oil", "Lemon"],
            &[
                "Wash vegetables",
                "Chop lettuce and tomato",
                "Slice cucumber",
                "Make dressing",
                "Toss and serve",
            ],
            "https://images.unsplash.com/photo-1512621776951-a57141f2eefd?w=400",
        ),
        recipe(
            3,
            "Chicken Stir Fry",
            30,
            &["Chicken", "Bell Pepper", "Onion", "Garlic", "Rice"],
            &[
                "Cook rice",
                "Cut chicken and vegetables",
                "Heat oil in pan",
                "Stir fry ingredients",
                "Serve over rice",
            ],
            "https://images.unsplash.com/photo-1603133872878-684f208fb84b?w=400",
        ),
    ]
}

fn detected_set() -> Vec<String> {
    ["Tomato", "Onion", "Garlic", "Bell Pepper", "Cheese"]
        .iter()
        .map(|name| name.to_string())
        .collect()
}
