//! Collaborator interfaces for loading the catalog and persisting user state,
//! with JSON file and in-memory implementations.

mod catalog;
mod storage;

pub use catalog::{CatalogSource, InlineCatalog, JsonCatalog};
pub use storage::{BarStorage, JsonFileStorage, MemoryStorage};
