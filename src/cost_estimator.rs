use crate::config::GroceryConfig;
use crate::consolidator::ConsolidatedRow;

/// Attach an estimated cost to every row.
///
/// Cost per unit comes from the config's cost table (case-insensitive on
/// ingredient name) or the default when absent, multiplied by the row's
/// consolidated quantity. The multiplication does not reconcile the cost
/// table's assumed unit against the row's resolved unit; the estimate is
/// deliberately rough.
pub fn estimate_costs(
    mut rows: Vec<ConsolidatedRow>,
    config: &GroceryConfig,
) -> Vec<ConsolidatedRow> {
    for row in &mut rows {
        let per_unit = config.cost_per_unit(&row.ingredient);
        row.cost = Some(per_unit * row.quantity);
    }
    rows
}
