use dishcover_recipe::{Recipe, parse_delimited_list};
use serde::Deserialize;

/// One recipe as remote endpoints ship it.
///
/// Backend versions disagree on field casing (snake_case vs camelCase) and
/// on whether list fields are real JSON arrays or quoted literals like
/// `"['Pasta', 'Garlic']"`. Both shapes are normalized here, at the
/// boundary; nothing past this type ever sees a raw record.
#[derive(Debug, Deserialize)]
pub struct RecipeRecord {
    #[serde(alias = "recipe_id", alias = "recipeId")]
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub ingredients: ListField,
    #[serde(default)]
    pub steps: ListField,
    #[serde(default)]
    pub minutes: u32,
    #[serde(default, alias = "imageUrl", alias = "image")]
    pub image_url: Option<String>,
}

/// A list field that arrives either decoded or as a delimited string.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ListField {
    Items(Vec<String>),
    Encoded(String),
}

impl Default for ListField {
    fn default() -> Self {
        ListField::Items(Vec::new())
    }
}

impl ListField {
    fn into_items(self) -> Vec<String> {
        match self {
            ListField::Items(items) => items,
            ListField::Encoded(raw) => parse_delimited_list(&raw),
        }
    }
}

impl From<RecipeRecord> for Recipe {
    fn from(record: RecipeRecord) -> Self {
        Recipe {
            id: record.id,
            name: record.name,
            ingredients: record.ingredients.into_items(),
            steps: record.steps.into_items(),
            minutes: record.minutes,
            image_url: record.image_url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snake_case_record_with_encoded_lists() {
        let raw = r#"{
            "recipe_id": 7,
            "name": "Rice Pilaf",
            "ingredients": "['Rice', 'Onion', 'Butter']",
            "steps": "['Saute onion', 'Add rice', 'Simmer covered']",
            "minutes": 30,
            "image_url": "https://example.com/pilaf.jpg"
        }"#;

        let recipe: Recipe = serde_json::from_str::<RecipeRecord>(raw).unwrap().into();
        assert_eq!(recipe.id, 7);
        assert_eq!(recipe.ingredients, vec!["Rice", "Onion", "Butter"]);
        assert_eq!(recipe.steps.len(), 3);
        assert_eq!(recipe.minutes, 30);
        assert_eq!(recipe.image_url.as_deref(), Some("https://example.com/pilaf.jpg"));
    }

    #[test]
    fn test_camel_case_record_with_decoded_lists() {
        let raw = r#"{
            "recipeId": 2,
            "name": "Scrambled Eggs",
            "ingredients": ["Eggs", "Butter"],
            "steps": ["Beat eggs", "Scramble gently"],
            "imageUrl": "https://example.com/eggs.jpg"
        }"#;

        let recipe: Recipe = serde_json::from_str::<RecipeRecord>(raw).unwrap().into();
        assert_eq!(recipe.id, 2);
        assert_eq!(recipe.ingredients, vec!["Eggs", "Butter"]);
        assert_eq!(recipe.minutes, 0, "missing minutes means unspecified");
        assert_eq!(recipe.image_url.as_deref(), Some("https://example.com/eggs.jpg"));
    }

    #[test]
    fn test_malformed_encoded_list_degrades_to_comma_split() {
        let raw = r#"{
            "id": 3,
            "name": "Garlic Bread",
            "ingredients": "Bread, Garlic, Butter",
            "steps": "['Toast bread']"
        }"#;

        let recipe: Recipe = serde_json::from_str::<RecipeRecord>(raw).unwrap().into();
        assert_eq!(recipe.ingredients, vec!["Bread", "Garlic", "Butter"]);
        assert_eq!(recipe.steps, vec!["Toast bread"]);
        assert!(recipe.image_url.is_none());
    }
}
