use anyhow::{Context, Result};
use std::io::{self, BufRead, Write};

use grocery_list::api_connection::MealDbClient;
use grocery_list::cli::parse_args;
use grocery_list::config::GroceryConfig;
use grocery_list::consolidator::{consolidate, ConsolidateError, IngredientEntry};
use grocery_list::cost_estimator::estimate_costs;
use grocery_list::dietary_filter::apply_filter;
use grocery_list::output::render_table;
use grocery_list::quantity_parser::QuantityParser;

fn prompt_for_dishes() -> Result<Vec<String>> {
    let stdin = io::stdin();
    let mut dishes = Vec::new();

    loop {
        print!("Enter a dish name: ");
        io::stdout().flush()?;
        let mut dish = String::new();
        stdin.lock().read_line(&mut dish)?;
        let dish = dish.trim();
        if !dish.is_empty() {
            dishes.push(dish.to_string());
        }

        print!("Have you finished? Type 'yes' to continue or 'no' to add more dishes: ");
        io::stdout().flush()?;
        let mut answer = String::new();
        stdin.lock().read_line(&mut answer)?;
        if answer.trim().eq_ignore_ascii_case("yes") {
            break;
        }
    }

    Ok(dishes)
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    let cli = parse_args();

    println!("Welcome to the Smart Grocery List Generator!");
    let dishes = if cli.dishes.is_empty() {
        prompt_for_dishes()?
    } else {
        cli.dishes.clone()
    };

    println!("\nFetching recipes...");
    let client = MealDbClient::from_env();
    let results = client.fetch_all(&dishes).await;

    let mut entries = Vec::new();
    for (dish, meals) in &results {
        match meals {
            None => println!("No data found for '{}'. Skipping.", dish),
            Some(meals) => {
                for meal in meals {
                    for (ingredient, measure) in meal.ingredient_pairs() {
                        entries.push(IngredientEntry {
                            ingredient,
                            raw_quantity: measure,
                        });
                    }
                }
            }
        }
    }

    let config = GroceryConfig::default();
    let parser =
        QuantityParser::new(&config).context("Failed to compile the quantity pattern")?;

    println!("\nConsolidating ingredients...");
    let rows = match consolidate(&entries, &parser) {
        Ok(rows) => rows,
        Err(ConsolidateError::NoIngredients) => {
            eprintln!("\nNo valid ingredients were found. Please try again with different dishes.");
            return Ok(());
        }
    };

    let rows = apply_filter(rows, cli.filter.as_deref(), &config);
    let rows = estimate_costs(rows, &config);

    println!("\nConsolidated Grocery List:");
    print!("{}", render_table(&rows));

    Ok(())
}
