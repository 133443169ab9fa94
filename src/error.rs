use thiserror::Error;

/// Errors raised while loading catalog data (ingredients, categories, drinks).
///
/// A load failure is never fatal: the [`Bar`](crate::bar::Bar) records it, logs it
/// and continues with an empty collection for the affected piece.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    #[error("Could not read '{path}': {message}")]
    Io { path: String, message: String },

    #[error("Failed to parse {what}: {message}")]
    Parse { what: String, message: String },

    #[error("Could not restore saved {what}: {source}")]
    Snapshot { what: String, source: StorageError },
}

/// Errors raised by the ingredient store when a user edit is rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InventoryError {
    #[error("Invalid amount '{input}': expected a non-negative number")]
    InvalidAmount { input: String },

    #[error("Ingredient '{0}' is not part of the inventory")]
    UnknownIngredient(String),
}

/// Errors raised by a persistence collaborator.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    #[error("Storage I/O failed for '{path}': {message}")]
    Io { path: String, message: String },

    #[error("Failed to serialize {what}: {message}")]
    Serialize { what: String, message: String },

    #[error("Stored {what} snapshot is corrupt: {message}")]
    Deserialize { what: String, message: String },
}

/// Errors surfaced by the [`Bar`](crate::bar::Bar) state container.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BarError {
    #[error(transparent)]
    Inventory(#[from] InventoryError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error("Drink '{0}' is not part of the catalog")]
    UnknownDrink(String),
}
