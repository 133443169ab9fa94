use crate::error::LoadError;
use crate::model::{Category, Drink, Ingredient};
use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};

/// Where the seed inventory, categories and drink recipes come from.
///
/// Each piece loads independently so that one failure does not hide the others.
pub trait CatalogSource {
    fn load_ingredients(&self) -> Result<Vec<Ingredient>, LoadError>;
    fn load_categories(&self) -> Result<Vec<Category>, LoadError>;
    fn load_drinks(&self) -> Result<Vec<Drink>, LoadError>;
}

/// Reads `ingredients.json`, `categories.json` and `drinks.json` from a directory.
#[derive(Debug, Clone)]
pub struct JsonCatalog {
    dir: PathBuf,
}

impl JsonCatalog {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn read<T: DeserializeOwned>(&self, file: &str, what: &str) -> Result<Vec<T>, LoadError> {
        let path = self.dir.join(file);
        let content = fs::read_to_string(&path).map_err(|e| LoadError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        parse_list(&content, what)
    }
}

impl CatalogSource for JsonCatalog {
    fn load_ingredients(&self) -> Result<Vec<Ingredient>, LoadError> {
        self.read("ingredients.json", "ingredients")
    }

    fn load_categories(&self) -> Result<Vec<Category>, LoadError> {
        self.read("categories.json", "categories")
    }

    fn load_drinks(&self) -> Result<Vec<Drink>, LoadError> {
        self.read("drinks.json", "drinks")
    }
}

/// A catalog held in memory, for tests and embedding.
#[derive(Debug, Clone, Default)]
pub struct InlineCatalog {
    pub ingredients: Vec<Ingredient>,
    pub categories: Vec<Category>,
    pub drinks: Vec<Drink>,
}

impl InlineCatalog {
    pub fn new(ingredients: Vec<Ingredient>, drinks: Vec<Drink>) -> Self {
        Self {
            ingredients,
            categories: Vec::new(),
            drinks,
        }
    }

    pub fn with_categories(mut self, categories: Vec<Category>) -> Self {
        self.categories = categories;
        self
    }

    /// Builds a catalog from the three JSON documents.
    pub fn from_json(ingredients: &str, categories: &str, drinks: &str) -> Result<Self, LoadError> {
        Ok(Self {
            ingredients: parse_list(ingredients, "ingredients")?,
            categories: parse_list(categories, "categories")?,
            drinks: parse_list(drinks, "drinks")?,
        })
    }
}

impl CatalogSource for InlineCatalog {
    fn load_ingredients(&self) -> Result<Vec<Ingredient>, LoadError> {
        Ok(self.ingredients.clone())
    }

    fn load_categories(&self) -> Result<Vec<Category>, LoadError> {
        Ok(self.categories.clone())
    }

    fn load_drinks(&self) -> Result<Vec<Drink>, LoadError> {
        Ok(self.drinks.clone())
    }
}

fn parse_list<T: DeserializeOwned>(content: &str, what: &str) -> Result<Vec<T>, LoadError> {
    serde_json::from_str(content).map_err(|e| LoadError::Parse {
        what: what.to_string(),
        message: e.to_string(),
    })
}
