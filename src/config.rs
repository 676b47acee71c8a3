use std::collections::{HashMap, HashSet};

use crate::units::UnitConversion;

/// Immutable lookup tables driving parsing, filtering and costing.
///
/// Built once by the host and passed by reference into the core components,
/// so tests can swap in their own tables without touching process state.
#[derive(Debug, Clone)]
pub struct GroceryConfig {
    /// Unit abbreviation (lowercase) -> multiplier into a base unit.
    pub unit_table: HashMap<String, UnitConversion>,
    /// Ingredient key (lowercase) -> unit label used when no measurement
    /// unit could be resolved, e.g. "eggs" -> "pieces".
    pub logical_units: HashMap<String, String>,
    /// Ingredient key (lowercase) -> estimated cost per unit.
    pub cost_table: HashMap<String, f64>,
    /// Cost per unit applied when an ingredient has no cost table entry.
    pub default_cost_per_unit: f64,
    /// Filter name (lowercase) -> set of excluded ingredient keys (lowercase).
    pub dietary_filters: HashMap<String, HashSet<String>>,
}

impl GroceryConfig {
    /// Look up a measurement unit abbreviation, case-insensitively.
    pub fn unit_conversion(&self, abbreviation: &str) -> Option<UnitConversion> {
        self.unit_table
            .get(abbreviation.trim().to_lowercase().as_str())
            .copied()
    }

    /// Fallback unit label for an ingredient with no resolvable unit.
    pub fn logical_unit(&self, ingredient: &str) -> &str {
        self.logical_units
            .get(ingredient.trim().to_lowercase().as_str())
            .map(String::as_str)
            .unwrap_or("pieces")
    }

    /// Cost per unit for an ingredient, falling back to the default.
    pub fn cost_per_unit(&self, ingredient: &str) -> f64 {
        self.cost_table
            .get(ingredient.trim().to_lowercase().as_str())
            .copied()
            .unwrap_or(self.default_cost_per_unit)
    }

    /// Exclusion set for a named dietary filter, or None if the name is
    /// unknown (callers treat that as "no filter").
    pub fn filter_set(&self, filter_name: &str) -> Option<&HashSet<String>> {
        self.dietary_filters
            .get(filter_name.trim().to_lowercase().as_str())
    }
}

impl Default for GroceryConfig {
    fn default() -> Self {
        let unit_table = HashMap::from([
            ("tbs".to_string(), UnitConversion::milliliters(15.0)),
            ("tbsp".to_string(), UnitConversion::milliliters(15.0)),
            ("tsp".to_string(), UnitConversion::milliliters(5.0)),
            ("cup".to_string(), UnitConversion::milliliters(240.0)),
            ("ml".to_string(), UnitConversion::milliliters(1.0)),
            ("l".to_string(), UnitConversion::milliliters(1000.0)),
            ("oz".to_string(), UnitConversion::grams(28.35)),
            ("lb".to_string(), UnitConversion::grams(453.59)),
            ("g".to_string(), UnitConversion::grams(1.0)),
            ("kg".to_string(), UnitConversion::grams(1000.0)),
        ]);

        let logical_units = HashMap::from([
            ("parsley".to_string(), "bunches".to_string()),
            ("sugar".to_string(), "grams".to_string()),
            ("salt".to_string(), "grams".to_string()),
            ("flour".to_string(), "grams".to_string()),
            ("butter".to_string(), "grams".to_string()),
            ("milk".to_string(), "milliliters".to_string()),
            ("water".to_string(), "milliliters".to_string()),
            ("eggs".to_string(), "pieces".to_string()),
            ("oil".to_string(), "milliliters".to_string()),
            ("vanilla".to_string(), "teaspoons".to_string()),
        ]);

        // Rough per-unit store prices; anything missing uses the default.
        let cost_table = HashMap::from([
            ("flour".to_string(), 0.002),
            ("sugar".to_string(), 0.003),
            ("salt".to_string(), 0.001),
            ("butter".to_string(), 0.009),
            ("milk".to_string(), 0.0015),
            ("water".to_string(), 0.0),
            ("oil".to_string(), 0.004),
            ("eggs".to_string(), 0.5),
            ("parsley".to_string(), 1.5),
            ("vanilla".to_string(), 0.3),
        ]);

        let dietary_filters = HashMap::from([
            (
                "vegan".to_string(),
                HashSet::from([
                    "eggs".to_string(),
                    "egg".to_string(),
                    "milk".to_string(),
                    "butter".to_string(),
                    "cheese".to_string(),
                    "cream".to_string(),
                    "yogurt".to_string(),
                    "honey".to_string(),
                    "chicken".to_string(),
                    "beef".to_string(),
                    "pork".to_string(),
                    "bacon".to_string(),
                    "fish".to_string(),
                ]),
            ),
            (
                "vegetarian".to_string(),
                HashSet::from([
                    "chicken".to_string(),
                    "beef".to_string(),
                    "pork".to_string(),
                    "bacon".to_string(),
                    "fish".to_string(),
                    "anchovies".to_string(),
                    "gelatin".to_string(),
                ]),
            ),
            (
                "gluten-free".to_string(),
                HashSet::from([
                    "flour".to_string(),
                    "bread".to_string(),
                    "breadcrumbs".to_string(),
                    "pasta".to_string(),
                    "spaghetti".to_string(),
                    "soy sauce".to_string(),
                ]),
            ),
        ]);

        GroceryConfig {
            unit_table,
            logical_units,
            cost_table,
            default_cost_per_unit: 0.05,
            dietary_filters,
        }
    }
}
