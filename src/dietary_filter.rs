use crate::config::GroceryConfig;
use crate::consolidator::ConsolidatedRow;

/// Remove rows excluded by the named dietary filter.
///
/// An unset or unrecognized filter name leaves the rows untouched.
/// Matching is case-insensitive on the ingredient name; surviving rows are
/// returned exactly as given.
pub fn apply_filter(
    rows: Vec<ConsolidatedRow>,
    filter_name: Option<&str>,
    config: &GroceryConfig,
) -> Vec<ConsolidatedRow> {
    let Some(name) = filter_name else {
        return rows;
    };
    let Some(excluded) = config.filter_set(name) else {
        return rows;
    };

    rows.into_iter()
        .filter(|row| !excluded.contains(row.ingredient.trim().to_lowercase().as_str()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(ingredient: &str, quantity: f64, unit: &str) -> ConsolidatedRow {
        ConsolidatedRow {
            ingredient: ingredient.to_string(),
            quantity,
            unit: unit.to_string(),
            cost: None,
        }
    }

    #[test]
    fn test_no_filter_returns_rows_unchanged() {
        let config = GroceryConfig::default();
        let rows = vec![row("Eggs", 3.0, "pieces"), row("Flour", 200.0, "grams")];

        let unfiltered = apply_filter(rows.clone(), None, &config);
        assert_eq!(unfiltered, rows);

        let unknown = apply_filter(rows.clone(), Some("keto"), &config);
        assert_eq!(unknown, rows);
    }

    #[test]
    fn test_vegan_filter_removes_excluded_ingredients() {
        let config = GroceryConfig::default();
        let rows = vec![
            row("Eggs", 3.0, "pieces"),
            row("Flour", 200.0, "grams"),
            row("Milk", 240.0, "milliliters"),
        ];

        let filtered = apply_filter(rows, Some("vegan"), &config);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].ingredient, "Flour");
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let config = GroceryConfig::default();
        let rows = vec![row("EGGS", 3.0, "pieces")];

        let filtered = apply_filter(rows, Some("VEGAN"), &config);
        assert!(filtered.is_empty());
    }

    #[test]
    fn test_survivors_are_untouched() {
        let config = GroceryConfig::default();
        let flour = row("Flour", 200.5, "grams");
        let rows = vec![row("Bacon", 100.0, "grams"), flour.clone()];

        let filtered = apply_filter(rows, Some("vegetarian"), &config);
        assert_eq!(filtered, vec![flour]);
    }
}
