//! Prelude module for convenient imports
//!
//! Re-exports the types most applications need, so a single
//! `use barkeep::prelude::*;` is enough to open a bar and query it.

// State container and configuration
pub use crate::bar::{Bar, BarBuilder};
pub use crate::config::BarConfig;

// Data model
pub use crate::model::{
    Category, Drink, DrinkIngredient, DrinkTags, Ingredient, IngredientRole, Strength,
    TASTE_CATEGORIES, TasteCategory,
};

// Engine, queries and shopping
pub use crate::availability::{
    DrinkAssessment, RequirementStatus, StockSet, compute_availability, missing_ingredients,
};
pub use crate::inventory::IngredientStore;
pub use crate::query::{DrinkFilter, Page, filter_drinks, paginate};
pub use crate::shopping::{ShoppingList, almost_makeable_ingredients};

// Collaborators
pub use crate::data::{BarStorage, CatalogSource, InlineCatalog, JsonCatalog, JsonFileStorage, MemoryStorage};

// Error types
pub use crate::error::{BarError, InventoryError, LoadError, StorageError};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
