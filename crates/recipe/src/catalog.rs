/// Every ingredient offered on the selection screen.
pub const SELECTABLE_INGREDIENTS: &[&str] = &[
    "Tomato",
    "Cheese",
    "Bread",
    "Chicken",
    "Onion",
    "Garlic",
    "Olive Oil",
    "Pasta",
    "Rice",
    "Bell Pepper",
    "Eggs",
    "Butter",
    "Milk",
    "Flour",
    "Salt",
    "Black Pepper",
    "Basil",
    "Oregano",
    "Thyme",
    "Rosemary",
    "Lemon",
    "Lime",
    "Avocado",
    "Spinach",
    "Lettuce",
    "Cucumber",
    "Carrot",
    "Potato",
    "Sweet Potato",
    "Broccoli",
    "Cauliflower",
    "Mushroom",
    "Beef",
    "Pork",
    "Fish",
    "Salmon",
    "Shrimp",
    "Bacon",
    "Ham",
    "Apple",
    "Banana",
    "Orange",
    "Strawberry",
    "Blueberry",
    "Mango",
    "Coconut",
    "Almond",
    "Walnut",
    "Peanut",
    "Honey",
    "Sugar",
    "Vanilla",
];

pub fn all_ingredients() -> Vec<String> {
    SELECTABLE_INGREDIENTS
        .iter()
        .map(|name| name.to_string())
        .collect()
}

/// Narrow the catalog by a case-insensitive substring. A blank query returns
/// the full catalog.
pub fn filter_ingredients(query: &str) -> Vec<String> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return all_ingredients();
    }

    SELECTABLE_INGREDIENTS
        .iter()
        .filter(|name| name.to_lowercase().contains(&query))
        .map(|name| name.to_string())
        .collect()
}
