use serde::Deserialize;
use std::collections::HashMap;

/// Default TheMealDB endpoint root; the API key is a path segment.
pub const MEALDB_BASE_URL: &str = "https://www.themealdb.com/api/json/v1";

/// The free, public test key TheMealDB documents for development use.
pub const MEALDB_PUBLIC_KEY: &str = "1";

/// TheMealDB exposes ingredients as strIngredient1..strIngredient20 with
/// parallel strMeasure1..strMeasure20 fields.
pub const INGREDIENT_SLOTS: usize = 20;

/// Response of `search.php?s=<dish>`. `meals` is JSON `null` when the
/// dish is unknown.
#[derive(Debug, Deserialize, Clone)]
pub struct MealSearchResponse {
    pub meals: Option<Vec<Meal>>,
}

/// One meal record. Besides the name and id, the payload is a flat bag of
/// `strIngredientN`/`strMeasureN` (and other `str*`) fields, captured
/// as a map rather than forty named struct fields.
#[derive(Debug, Deserialize, Clone)]
pub struct Meal {
    #[serde(rename = "idMeal")]
    pub id: String,
    #[serde(rename = "strMeal")]
    pub name: String,
    #[serde(flatten)]
    fields: HashMap<String, Option<serde_json::Value>>,
}

impl Meal {
    fn slot(&self, key: &str) -> Option<&str> {
        self.fields
            .get(key)
            .and_then(|value| value.as_ref())
            .and_then(|value| value.as_str())
            .map(str::trim)
            .filter(|text| !text.is_empty())
    }

    /// All populated (ingredient, measurement) slot pairs, in slot order.
    /// Slots with an empty or missing ingredient or measurement are
    /// skipped.
    pub fn ingredient_pairs(&self) -> Vec<(String, String)> {
        (1..=INGREDIENT_SLOTS)
            .filter_map(|i| {
                let ingredient = self.slot(&format!("strIngredient{}", i))?;
                let measure = self.slot(&format!("strMeasure{}", i))?;
                Some((ingredient.to_string(), measure.to_string()))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_MEAL: &str = r#"{
        "idMeal": "52929",
        "strMeal": "Timbits",
        "strCategory": "Dessert",
        "strArea": "Canadian",
        "strIngredient1": "Flour",
        "strMeasure1": "200 g",
        "strIngredient2": "Eggs",
        "strMeasure2": "2",
        "strIngredient3": "Milk",
        "strMeasure3": "   ",
        "strIngredient4": "",
        "strMeasure4": "1 cup",
        "strIngredient5": null,
        "strMeasure5": null
    }"#;

    #[test]
    fn test_ingredient_pairs_skip_empty_slots() {
        let meal: Meal = serde_json::from_str(SAMPLE_MEAL).unwrap();
        assert_eq!(meal.name, "Timbits");

        let pairs = meal.ingredient_pairs();
        assert_eq!(
            pairs,
            vec![
                ("Flour".to_string(), "200 g".to_string()),
                ("Eggs".to_string(), "2".to_string()),
            ]
        );
    }

    #[test]
    fn test_search_response_with_null_meals() {
        let response: MealSearchResponse =
            serde_json::from_str(r#"{"meals": null}"#).unwrap();
        assert!(response.meals.is_none());
    }

    #[test]
    fn test_search_response_with_meals() {
        let body = format!(r#"{{"meals": [{}]}}"#, SAMPLE_MEAL);
        let response: MealSearchResponse = serde_json::from_str(&body).unwrap();
        let meals = response.meals.unwrap();
        assert_eq!(meals.len(), 1);
        assert_eq!(meals[0].id, "52929");
    }
}
