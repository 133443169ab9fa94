use barkeep::prelude::*;
use barkeep::query::search_ingredients;
use clap::{Parser, Subcommand, ValueEnum};
use itertools::Itertools;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Define a CLI-specific enum for clap to parse.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum StrengthCli {
    Light,
    Medium,
    Strong,
}

impl From<StrengthCli> for Strength {
    fn from(value: StrengthCli) -> Self {
        match value {
            StrengthCli::Light => Strength::Light,
            StrengthCli::Medium => Strength::Medium,
            StrengthCli::Strong => Strength::Strong,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum StockCli {
    In,
    Out,
}

/// Track your home bar and find out which drinks you can make
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Directory holding ingredients.json, categories.json and drinks.json
    #[arg(long, default_value = "data")]
    catalog: String,

    /// Directory where your inventory and shopping list are saved
    #[arg(long, default_value = ".barkeep")]
    state: String,

    /// Optional JSON settings file
    #[arg(long)]
    config: Option<String>,

    /// Log state changes
    #[arg(short, long)]
    verbose: bool,

    /// Log availability recomputations as well
    #[arg(long)]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List drinks, optionally filtered
    Drinks {
        /// Only drinks you can (true) or cannot (false) make right now
        #[arg(long)]
        can_make: Option<bool>,
        #[arg(long, value_enum)]
        strength: Option<StrengthCli>,
        /// Taste category (Sweet, Sour, Bitter, Spicy, Refreshing); repeatable
        #[arg(long)]
        taste: Vec<String>,
        /// Case-insensitive search on the drink name
        #[arg(long)]
        search: Option<String>,
        /// Do not let substitutes stand in for missing ingredients
        #[arg(long)]
        no_substitutions: bool,
        #[arg(long, default_value_t = 1)]
        page: usize,
    },
    /// Show the ingredients a drink is missing (substitutes ignored)
    Missing { drink: String },
    /// Explain requirement by requirement whether a drink can be made
    Explain {
        drink: String,
        #[arg(long)]
        no_substitutions: bool,
    },
    /// Mark an ingredient as in or out of stock
    Stock {
        id: String,
        #[arg(value_enum)]
        state: StockCli,
    },
    /// Set the amount of an ingredient you have
    Amount { id: String, value: String },
    /// List the inventory grouped by category
    Inventory {
        #[arg(long)]
        search: Option<String>,
    },
    /// Manage the shopping list
    Shopping {
        #[command(subcommand)]
        action: ShoppingAction,
    },
}

#[derive(Subcommand, Debug)]
enum ShoppingAction {
    List,
    Add { ids: Vec<String> },
    Remove { id: String },
    /// Remove from the list and mark as in stock
    Purchase { id: String },
    /// Add everything missing from drinks that lack only one or two ingredients
    Almost,
}

fn main() {
    let cli = Cli::parse();

    let filter_layer = if cli.debug {
        EnvFilter::new("debug")
    } else if cli.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::registry()
        .with(filter_layer)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = match &cli.config {
        Some(path) => BarConfig::from_file(path)
            .unwrap_or_else(|e| exit_with_error(&format!("Failed to load settings: {}", e))),
        None => BarConfig::default(),
    };

    let catalog = JsonCatalog::new(&cli.catalog);
    let storage = JsonFileStorage::new(&cli.state);
    let mut bar = Bar::builder(&catalog, storage).with_config(config).build();

    for error in bar.load_errors() {
        eprintln!("Warning: {}", error);
    }

    if let Err(e) = run(&mut bar, cli.command) {
        exit_with_error(&e.to_string());
    }
}

fn run(bar: &mut Bar<JsonFileStorage>, command: Command) -> std::result::Result<(), BarError> {
    match command {
        Command::Drinks {
            can_make,
            strength,
            taste,
            search,
            no_substitutions,
            page,
        } => {
            if no_substitutions {
                bar.set_allow_substitutions(false);
            }
            let filter = DrinkFilter {
                can_make,
                strength: strength.map(Strength::from),
                taste_categories: taste,
                name_query: search,
            };
            print_drinks(bar, &filter, page);
        }
        Command::Missing { drink } => {
            let missing = bar.missing_for(&drink)?;
            if missing.is_empty() {
                println!("Nothing missing for '{}'.", drink);
            } else {
                for ingredient in missing {
                    let listed = if bar.shopping_list().contains(&ingredient.id) {
                        " [on shopping list]"
                    } else {
                        ""
                    };
                    println!("  - {} ({}){}", ingredient.name, ingredient.id, listed);
                }
            }
        }
        Command::Explain {
            drink,
            no_substitutions,
        } => {
            if no_substitutions {
                bar.set_allow_substitutions(false);
            }
            let assessment = bar.assess(&drink)?;
            let verdict = if assessment.can_make() {
                "can be made"
            } else {
                "cannot be made"
            };
            println!("'{}' {}: {}", drink, verdict, assessment);
        }
        Command::Stock { id, state } => {
            let before = bar.makeable_count();
            bar.set_stock(&id, matches!(state, StockCli::In))?;
            println!(
                "'{}' updated. Makeable drinks: {} -> {}",
                id,
                before,
                bar.makeable_count()
            );
        }
        Command::Amount { id, value } => {
            let amount = bar.set_amount_from_input(&id, &value)?;
            println!("'{}' amount set to {}", id, amount);
        }
        Command::Inventory { search } => print_inventory(bar, search.as_deref()),
        Command::Shopping { action } => run_shopping(bar, action)?,
    }
    Ok(())
}

fn run_shopping(bar: &mut Bar<JsonFileStorage>, action: ShoppingAction) -> std::result::Result<(), BarError> {
    match action {
        ShoppingAction::List => {
            if bar.shopping_list().is_empty() {
                println!("Your shopping list is empty.");
                return Ok(());
            }
            println!("Shopping List ({} items)", bar.shopping_list().len());
            for id in bar.shopping_list().iter() {
                match bar.store().get(id) {
                    Some(ingredient) => println!("  - {} ({})", ingredient.name, ingredient.category),
                    None => println!("  - {}", id),
                }
            }
        }
        ShoppingAction::Add { ids } => {
            let added = bar.add_multiple_to_shopping_list(ids)?;
            println!("Added {} item(s).", added);
        }
        ShoppingAction::Remove { id } => {
            if !bar.remove_from_shopping_list(&id)? {
                println!("'{}' was not on the shopping list.", id);
            }
        }
        ShoppingAction::Purchase { id } => {
            bar.mark_purchased(&id)?;
            println!("'{}' is now in stock.", id);
        }
        ShoppingAction::Almost => {
            let added = bar.add_almost_makeable_to_shopping_list()?;
            println!("Added {} item(s) from almost-makeable drinks.", added);
        }
    }
    Ok(())
}

fn print_drinks(bar: &Bar<JsonFileStorage>, filter: &DrinkFilter, page: usize) {
    let result = bar.page(filter, page);
    println!(
        "{} of {} drinks can be made ({} match, page {}/{})",
        bar.makeable_count(),
        bar.drinks().len(),
        result.total_items,
        result.number,
        result.total_pages.max(1)
    );
    for drink in &result.items {
        let mark = if drink.can_make() { "x" } else { " " };
        println!(
            "  [{}] {} ({}; {})",
            mark,
            drink.name,
            drink.tags.strength,
            drink.tags.taste.iter().join(", ")
        );
    }
}

fn print_inventory(bar: &Bar<JsonFileStorage>, search: Option<&str>) {
    let matches: Vec<&str> = search_ingredients(bar.ingredients(), search.unwrap_or(""))
        .into_iter()
        .map(|i| i.id.as_str())
        .collect();
    for (category, ingredients) in bar.store().grouped_by_category() {
        let shown: Vec<_> = ingredients
            .into_iter()
            .filter(|i| matches.contains(&i.id.as_str()))
            .collect();
        if shown.is_empty() {
            continue;
        }
        println!("{}", category);
        for ingredient in shown {
            let stock = if ingredient.in_stock { "in stock" } else { "out" };
            let amount = match (ingredient.amount, &ingredient.unit) {
                (Some(a), Some(u)) => format!(", {} {}", a, u),
                (Some(a), None) => format!(", {}", a),
                _ => String::new(),
            };
            println!("  - {} [{}{}]", ingredient.name, stock, amount);
        }
    }
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
