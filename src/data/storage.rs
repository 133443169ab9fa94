use crate::error::StorageError;
use crate::model::Ingredient;
use crate::shopping::ShoppingList;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

const INGREDIENTS_FILE: &str = "ingredients.json";
const SHOPPING_LIST_FILE: &str = "shoppingList.json";

/// Durable local storage for user edits. `Ok(None)` means nothing was saved yet.
pub trait BarStorage {
    fn persist_ingredients(&mut self, ingredients: &[Ingredient]) -> Result<(), StorageError>;
    fn load_persisted_ingredients(&self) -> Result<Option<Vec<Ingredient>>, StorageError>;
    fn persist_shopping_list(&mut self, list: &ShoppingList) -> Result<(), StorageError>;
    fn load_persisted_shopping_list(&self) -> Result<Option<ShoppingList>, StorageError>;
}

/// Keeps JSON snapshots (`ingredients.json`, `shoppingList.json`) in a directory.
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    dir: PathBuf,
}

impl JsonFileStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn write<T: Serialize + ?Sized>(&self, file: &str, what: &str, value: &T) -> Result<(), StorageError> {
        let json = serde_json::to_string_pretty(value).map_err(|e| StorageError::Serialize {
            what: what.to_string(),
            message: e.to_string(),
        })?;
        let io_error = |path: &Path, e: std::io::Error| StorageError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        };
        fs::create_dir_all(&self.dir).map_err(|e| io_error(&self.dir, e))?;
        let path = self.dir.join(file);
        fs::write(&path, json).map_err(|e| io_error(&path, e))
    }

    fn read<T: DeserializeOwned>(&self, file: &str, what: &str) -> Result<Option<T>, StorageError> {
        let path = self.dir.join(file);
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(StorageError::Io {
                    path: path.display().to_string(),
                    message: e.to_string(),
                });
            }
        };
        serde_json::from_str(&content)
            .map(Some)
            .map_err(|e| StorageError::Deserialize {
                what: what.to_string(),
                message: e.to_string(),
            })
    }
}

impl BarStorage for JsonFileStorage {
    fn persist_ingredients(&mut self, ingredients: &[Ingredient]) -> Result<(), StorageError> {
        self.write(INGREDIENTS_FILE, "ingredients", ingredients)
    }

    fn load_persisted_ingredients(&self) -> Result<Option<Vec<Ingredient>>, StorageError> {
        self.read(INGREDIENTS_FILE, "ingredients")
    }

    fn persist_shopping_list(&mut self, list: &ShoppingList) -> Result<(), StorageError> {
        self.write(SHOPPING_LIST_FILE, "shopping list", list)
    }

    fn load_persisted_shopping_list(&self) -> Result<Option<ShoppingList>, StorageError> {
        self.read(SHOPPING_LIST_FILE, "shopping list")
    }
}

/// Volatile storage that keeps the last snapshot of each kind.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    pub ingredients: Option<Vec<Ingredient>>,
    pub shopping_list: Option<ShoppingList>,
    /// Number of snapshots written, of either kind.
    pub writes: usize,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl BarStorage for MemoryStorage {
    fn persist_ingredients(&mut self, ingredients: &[Ingredient]) -> Result<(), StorageError> {
        self.ingredients = Some(ingredients.to_vec());
        self.writes += 1;
        Ok(())
    }

    fn load_persisted_ingredients(&self) -> Result<Option<Vec<Ingredient>>, StorageError> {
        Ok(self.ingredients.clone())
    }

    fn persist_shopping_list(&mut self, list: &ShoppingList) -> Result<(), StorageError> {
        self.shopping_list = Some(list.clone());
        self.writes += 1;
        Ok(())
    }

    fn load_persisted_shopping_list(&self) -> Result<Option<ShoppingList>, StorageError> {
        Ok(self.shopping_list.clone())
    }
}
