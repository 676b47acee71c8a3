use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about = "Consolidate recipe ingredients into one grocery list", long_about = None)]
pub struct Cli {
    /// Dish names to look up; prompts interactively when none are given
    pub dishes: Vec<String>,

    /// Dietary filter to apply (vegan, vegetarian, gluten-free)
    #[arg(short, long)]
    pub filter: Option<String>,
}

pub fn parse_args() -> Cli {
    Cli::parse()
}
