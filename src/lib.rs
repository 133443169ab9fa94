//! # Barkeep - Home Bar Inventory and Drink Availability Engine
//!
//! **Barkeep** tracks which cocktail ingredients you own, matches them against a
//! catalog of drink recipes, and tells you what you can make right now, what you
//! are missing, and what is worth putting on the shopping list.
//!
//! ## Core Workflow
//!
//! 1.  **Load Your Data**: Implement [`CatalogSource`](data::CatalogSource) or use
//!     [`JsonCatalog`](data::JsonCatalog) to provide the seed inventory, categories
//!     and drink recipes.
//! 2.  **Open a Bar**: [`Bar::builder`](bar::Bar::builder) wires the catalog to a
//!     [`BarStorage`](data::BarStorage) that keeps user edits between sessions.
//! 3.  **Mutate**: toggle stock, edit amounts and manage the shopping list. Each
//!     change is persisted and availability is recomputed on the spot.
//! 4.  **Query**: filter the annotated drinks by makeability, strength, taste
//!     category or name, and page through the result.
//!
//! The matching engine itself lives in [`availability`] and is a set of pure
//! functions; it can be used without a `Bar`.
//!
//! ## Quick Start
//!
//! ```rust
//! use barkeep::prelude::*;
//!
//! let catalog = InlineCatalog::new(
//!     vec![
//!         Ingredient::new("gin", "Gin", "spirits").with_stock(true),
//!         Ingredient::new("tonic", "Tonic Water", "mixers"),
//!         Ingredient::new("soda", "Soda Water", "mixers").with_stock(true),
//!     ],
//!     vec![
//!         Drink::new("gin-tonic", "Gin & Tonic", Strength::Medium)
//!             .with_ingredient(DrinkIngredient::new("gin").with_amount("5", "cl"))
//!             .with_ingredient(
//!                 DrinkIngredient::new("tonic")
//!                     .with_amount("15", "cl")
//!                     .with_substitutes(["soda"]),
//!             )
//!             .with_tastes(["Bitter", "Refreshing"]),
//!     ],
//! );
//!
//! let mut bar = Bar::builder(&catalog, MemoryStorage::new()).build();
//!
//! // Soda stands in for tonic while substitutions are allowed...
//! assert!(bar.drink("gin-tonic").unwrap().can_make());
//! // ...but tonic is still what you would buy.
//! let missing = bar.missing_for("gin-tonic").unwrap();
//! assert_eq!(missing[0].id, "tonic");
//!
//! bar.set_allow_substitutions(false);
//! assert!(!bar.drink("gin-tonic").unwrap().can_make());
//!
//! bar.add_to_shopping_list("tonic").unwrap();
//! bar.mark_purchased("tonic").unwrap();
//! assert!(bar.shopping_list().is_empty());
//! assert_eq!(bar.makeable_count(), 1);
//! ```

pub mod availability;
pub mod bar;
pub mod config;
pub mod data;
pub mod error;
pub mod inventory;
pub mod model;
pub mod prelude;
pub mod query;
pub mod shopping;
