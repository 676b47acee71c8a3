use crate::consolidator::ConsolidatedRow;

/// Whole quantities print as integers, everything else with 2 decimals.
pub fn format_quantity(quantity: f64) -> String {
    if quantity.fract() == 0.0 {
        format!("{}", quantity as i64)
    } else {
        format!("{:.2}", quantity)
    }
}

pub fn format_cost(cost: f64) -> String {
    format!("${:.2}", cost)
}

/// Render consolidated rows as an aligned plain-text table.
pub fn render_table(rows: &[ConsolidatedRow]) -> String {
    let header = ("Ingredient", "Quantity", "Unit", "Cost");

    let formatted: Vec<(String, String, String, String)> = rows
        .iter()
        .map(|row| {
            (
                row.ingredient.clone(),
                format_quantity(row.quantity),
                row.unit.clone(),
                row.cost.map(format_cost).unwrap_or_else(|| "-".to_string()),
            )
        })
        .collect();

    let width = |select: fn(&(String, String, String, String)) -> &String, header_len: usize| {
        formatted
            .iter()
            .map(|r| select(r).len())
            .max()
            .unwrap_or(0)
            .max(header_len)
    };
    let w_ingredient = width(|r| &r.0, header.0.len());
    let w_quantity = width(|r| &r.1, header.1.len());
    let w_unit = width(|r| &r.2, header.2.len());

    let mut out = format!(
        "{:<w_ingredient$}  {:>w_quantity$}  {:<w_unit$}  {}\n",
        header.0, header.1, header.2, header.3
    );
    for (ingredient, quantity, unit, cost) in &formatted {
        out.push_str(&format!(
            "{:<w_ingredient$}  {:>w_quantity$}  {:<w_unit$}  {}\n",
            ingredient, quantity, unit, cost
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whole_quantities_print_as_integers() {
        assert_eq!(format_quantity(3.0), "3");
        assert_eq!(format_quantity(200.0), "200");
    }

    #[test]
    fn test_fractional_quantities_print_two_decimals() {
        assert_eq!(format_quantity(2.5), "2.50");
        assert_eq!(format_quantity(56.7), "56.70");
        assert_eq!(format_quantity(1.234), "1.23");
    }

    #[test]
    fn test_cost_formats_as_currency() {
        assert_eq!(format_cost(0.4), "$0.40");
        assert_eq!(format_cost(12.345), "$12.35");
        assert_eq!(format_cost(0.0), "$0.00");
    }

    #[test]
    fn test_render_table_aligns_columns() {
        let rows = vec![
            ConsolidatedRow {
                ingredient: "Eggs".to_string(),
                quantity: 3.0,
                unit: "pieces".to_string(),
                cost: Some(1.5),
            },
            ConsolidatedRow {
                ingredient: "Flour".to_string(),
                quantity: 200.0,
                unit: "grams".to_string(),
                cost: Some(0.4),
            },
        ];

        let table = render_table(&rows);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("Ingredient"));
        assert!(lines[1].contains("Eggs"));
        assert!(lines[1].contains("pieces"));
        assert!(lines[1].contains("$1.50"));
        assert!(lines[2].contains("200"));
        assert!(lines[2].contains("$0.40"));
    }

    #[test]
    fn test_render_table_without_costs() {
        let rows = vec![ConsolidatedRow {
            ingredient: "Milk".to_string(),
            quantity: 120.0,
            unit: "milliliters".to_string(),
            cost: None,
        }];

        let table = render_table(&rows);
        assert!(table.contains('-'));
    }
}
