use std::collections::HashMap;
use std::error::Error;
use std::fmt;

use crate::quantity_parser::QuantityParser;

/// One line item as fetched from a recipe: the ingredient name and the
/// free-form measurement text next to it.
#[derive(Debug, Clone, PartialEq)]
pub struct IngredientEntry {
    pub ingredient: String,
    pub raw_quantity: String,
}

/// One aggregated grocery list row. `cost` is filled in by the cost
/// estimator; the consolidator leaves it empty.
#[derive(Debug, Clone, PartialEq)]
pub struct ConsolidatedRow {
    pub ingredient: String,
    pub quantity: f64,
    pub unit: String,
    pub cost: Option<f64>,
}

#[derive(Debug)]
pub enum ConsolidateError {
    /// Every entry parsed to a zero amount (or there were no entries at
    /// all). Distinguished from an empty successful result so the caller
    /// can report it instead of rendering an empty list.
    NoIngredients,
}

impl fmt::Display for ConsolidateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConsolidateError::NoIngredients => {
                write!(f, "no valid ingredients were found")
            }
        }
    }
}

impl Error for ConsolidateError {}

struct IngredientGroup {
    ingredient: String,
    quantity: f64,
    // Units of every contributing entry, in arrival order.
    units: Vec<String>,
}

/// Merge ingredient entries from any number of recipes into one row per
/// distinct ingredient name.
///
/// Quantities are parsed via the quantity parser, zero-amount entries are
/// dropped, and remaining entries are grouped by trimmed, case-preserved
/// name. Each group's quantity is the sum of its amounts and its unit is
/// the most frequent unit among contributors, ties broken by first
/// appearance. Rows come back in first-appearance order.
pub fn consolidate(
    entries: &[IngredientEntry],
    parser: &QuantityParser<'_>,
) -> Result<Vec<ConsolidatedRow>, ConsolidateError> {
    let mut groups: Vec<IngredientGroup> = Vec::new();
    let mut index_by_name: HashMap<String, usize> = HashMap::new();

    for entry in entries {
        let name = entry.ingredient.trim();
        let parsed = parser.parse(&entry.raw_quantity, name);
        if parsed.amount <= 0.0 {
            continue;
        }

        let idx = *index_by_name.entry(name.to_string()).or_insert_with(|| {
            groups.push(IngredientGroup {
                ingredient: name.to_string(),
                quantity: 0.0,
                units: Vec::new(),
            });
            groups.len() - 1
        });
        groups[idx].quantity += parsed.amount;
        groups[idx].units.push(parsed.unit);
    }

    if groups.is_empty() {
        return Err(ConsolidateError::NoIngredients);
    }

    Ok(groups
        .into_iter()
        .map(|group| ConsolidatedRow {
            ingredient: group.ingredient,
            quantity: group.quantity,
            unit: stable_mode(group.units),
            cost: None,
        })
        .collect())
}

/// Most frequent unit in arrival order; on a tie the earliest-seen unit
/// wins, so results do not depend on hash iteration order.
fn stable_mode(units: Vec<String>) -> String {
    let mut counts: Vec<(String, usize)> = Vec::new();
    for unit in units {
        match counts.iter_mut().find(|(seen, _)| *seen == unit) {
            Some((_, n)) => *n += 1,
            None => counts.push((unit, 1)),
        }
    }

    let mut best: Option<(String, usize)> = None;
    for (unit, n) in counts {
        match &best {
            Some((_, best_n)) if *best_n >= n => {}
            _ => best = Some((unit, n)),
        }
    }
    best.map(|(unit, _)| unit).unwrap_or_default()
}
