//! The `Bar` state container.
//!
//! A `Bar` owns the inventory, the immutable drink catalog, the annotated copy
//! of that catalog and the shopping list. Every mutation is applied in memory,
//! persisted through the [`BarStorage`] collaborator right away, and, when
//! stock or the substitution policy changed, followed by a synchronous
//! availability recomputation.

use crate::availability::{
    DrinkAssessment, StockSet, assess_drink, compute_availability, count_makeable,
    missing_ingredients,
};
use crate::config::BarConfig;
use crate::data::{BarStorage, CatalogSource};
use crate::error::{BarError, LoadError, StorageError};
use crate::inventory::IngredientStore;
use crate::model::{Category, Drink, Ingredient};
use crate::query::{DrinkFilter, Page, filter_drinks, paginate};
use crate::shopping::{ShoppingList, almost_makeable_ingredients};
use tracing::{info, warn};

pub struct Bar<S: BarStorage> {
    store: IngredientStore,
    categories: Vec<Category>,
    catalog: Vec<Drink>,
    available: Vec<Drink>,
    shopping: ShoppingList,
    config: BarConfig,
    storage: S,
    load_errors: Vec<LoadError>,
}

pub struct BarBuilder<'a, C: CatalogSource + ?Sized, S: BarStorage> {
    source: &'a C,
    storage: S,
    config: BarConfig,
}

impl<'a, C: CatalogSource + ?Sized, S: BarStorage> BarBuilder<'a, C, S> {
    pub fn new(source: &'a C, storage: S) -> Self {
        Self {
            source,
            storage,
            config: BarConfig::default(),
        }
    }

    pub fn with_config(mut self, config: BarConfig) -> Self {
        self.config = config;
        self
    }

    pub fn allow_substitutions(mut self, allow: bool) -> Self {
        self.config.allow_substitutions = allow;
        self
    }

    pub fn page_size(mut self, page_size: usize) -> Self {
        self.config.page_size = page_size;
        self
    }

    /// Loads everything and computes the initial availability. Never fails:
    /// each piece that cannot be loaded is recorded in [`Bar::load_errors`]
    /// and replaced by an empty collection.
    pub fn build(self) -> Bar<S> {
        let mut load_errors = Vec::new();

        // A saved snapshot wins over the seed inventory so local edits survive.
        let ingredients = match self.storage.load_persisted_ingredients() {
            Ok(Some(saved)) => saved,
            Ok(None) => or_empty(self.source.load_ingredients(), &mut load_errors),
            Err(e) => {
                load_errors.push(snapshot_error("ingredients", e));
                or_empty(self.source.load_ingredients(), &mut load_errors)
            }
        };
        let categories = or_empty(self.source.load_categories(), &mut load_errors);
        let catalog = or_empty(self.source.load_drinks(), &mut load_errors);
        let shopping = match self.storage.load_persisted_shopping_list() {
            Ok(saved) => saved.unwrap_or_default(),
            Err(e) => {
                load_errors.push(snapshot_error("shopping list", e));
                ShoppingList::new()
            }
        };

        for error in &load_errors {
            warn!(%error, "bar data failed to load, continuing without it");
        }

        let config = self.config.normalized();

        let available =
            compute_availability(&catalog, &ingredients, config.allow_substitutions);

        Bar {
            store: IngredientStore::new(ingredients),
            categories,
            catalog,
            available,
            shopping,
            config,
            storage: self.storage,
            load_errors,
        }
    }
}

fn or_empty<T>(loaded: Result<Vec<T>, LoadError>, errors: &mut Vec<LoadError>) -> Vec<T> {
    loaded.unwrap_or_else(|e| {
        errors.push(e);
        Vec::new()
    })
}

fn snapshot_error(what: &str, source: StorageError) -> LoadError {
    LoadError::Snapshot {
        what: what.to_string(),
        source,
    }
}

impl<S: BarStorage> Bar<S> {
    pub fn builder<C: CatalogSource + ?Sized>(source: &C, storage: S) -> BarBuilder<'_, C, S> {
        BarBuilder::new(source, storage)
    }

    // --- Read access ---

    pub fn load_errors(&self) -> &[LoadError] {
        &self.load_errors
    }

    pub fn config(&self) -> &BarConfig {
        &self.config
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn into_storage(self) -> S {
        self.storage
    }

    pub fn store(&self) -> &IngredientStore {
        &self.store
    }

    pub fn ingredients(&self) -> &[Ingredient] {
        self.store.as_slice()
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// The catalog as loaded. `can_make` is never set here.
    pub fn catalog(&self) -> &[Drink] {
        &self.catalog
    }

    /// The catalog annotated with the current `can_make` values.
    pub fn drinks(&self) -> &[Drink] {
        &self.available
    }

    pub fn drink(&self, id: &str) -> Option<&Drink> {
        self.available.iter().find(|d| d.id == id)
    }

    pub fn allow_substitutions(&self) -> bool {
        self.config.allow_substitutions
    }

    pub fn makeable_count(&self) -> usize {
        count_makeable(&self.available)
    }

    pub fn shopping_list(&self) -> &ShoppingList {
        &self.shopping
    }

    /// Shopping list entries resolved to inventory ingredients, in list order.
    pub fn shopping_ingredients(&self) -> Vec<&Ingredient> {
        self.shopping.iter().filter_map(|id| self.store.get(id)).collect()
    }

    // --- Queries ---

    pub fn filtered(&self, filter: &DrinkFilter) -> Vec<&Drink> {
        filter_drinks(&self.available, filter)
    }

    pub fn page(&self, filter: &DrinkFilter, number: usize) -> Page<&Drink> {
        paginate(&self.filtered(filter), number, self.config.page_size)
    }

    fn catalog_drink(&self, drink_id: &str) -> Result<&Drink, BarError> {
        self.catalog
            .iter()
            .find(|d| d.id == drink_id)
            .ok_or_else(|| BarError::UnknownDrink(drink_id.to_string()))
    }

    /// Out-of-stock ingredients of a drink, ignoring substitutes.
    pub fn missing_for(&self, drink_id: &str) -> Result<Vec<&Ingredient>, BarError> {
        let drink = self.catalog_drink(drink_id)?;
        Ok(missing_ingredients(drink, self.store.as_slice()))
    }

    pub fn assess(&self, drink_id: &str) -> Result<DrinkAssessment, BarError> {
        let drink = self.catalog_drink(drink_id)?;
        let stock = StockSet::from_ingredients(self.store.as_slice());
        Ok(assess_drink(drink, &stock, self.config.allow_substitutions))
    }

    pub fn almost_makeable_ingredients(&self) -> Vec<&str> {
        let stock = StockSet::from_ingredients(self.store.as_slice());
        almost_makeable_ingredients(&self.catalog, &stock)
    }

    // --- Substitution policy ---

    pub fn set_allow_substitutions(&mut self, allow: bool) {
        if self.config.allow_substitutions != allow {
            self.config.allow_substitutions = allow;
            self.recompute();
        }
    }

    /// Returns the new setting.
    pub fn toggle_allow_substitutions(&mut self) -> bool {
        let allow = !self.config.allow_substitutions;
        self.set_allow_substitutions(allow);
        allow
    }

    // --- Ingredient mutations ---

    pub fn set_stock(&mut self, id: &str, in_stock: bool) -> Result<(), BarError> {
        self.store.set_stock(id, in_stock)?;
        self.stock_changed()
    }

    pub fn toggle_stock(&mut self, id: &str) -> Result<bool, BarError> {
        let in_stock = self.store.toggle_stock(id)?;
        self.stock_changed()?;
        Ok(in_stock)
    }

    pub fn set_amount(&mut self, id: &str, amount: f64) -> Result<(), BarError> {
        self.store.set_amount(id, amount)?;
        self.persist_ingredients()
    }

    pub fn set_amount_from_input(&mut self, id: &str, input: &str) -> Result<f64, BarError> {
        let amount = self.store.set_amount_from_input(id, input)?;
        self.persist_ingredients()?;
        Ok(amount)
    }

    pub fn update_ingredient(&mut self, updated: Ingredient) -> Result<(), BarError> {
        self.store.update_ingredient(updated)?;
        self.stock_changed()
    }

    pub fn set_stock_many<I, T>(&mut self, ids: I, in_stock: bool) -> Result<usize, BarError>
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let updated = self.store.set_stock_many(ids, in_stock);
        self.stock_changed()?;
        Ok(updated)
    }

    pub fn set_all_stock(&mut self, in_stock: bool) -> Result<(), BarError> {
        self.store.set_all_stock(in_stock);
        self.stock_changed()
    }

    // --- Shopping list mutations ---

    pub fn add_to_shopping_list(&mut self, id: &str) -> Result<bool, BarError> {
        let added = self.shopping.add(id);
        if added {
            info!(id, "added to shopping list");
        }
        self.persist_shopping_list()?;
        Ok(added)
    }

    pub fn remove_from_shopping_list(&mut self, id: &str) -> Result<bool, BarError> {
        let removed = self.shopping.remove(id);
        if removed {
            info!(id, "removed from shopping list");
        }
        self.persist_shopping_list()?;
        Ok(removed)
    }

    pub fn toggle_shopping_list(&mut self, id: &str) -> Result<bool, BarError> {
        let listed = self.shopping.toggle(id);
        self.persist_shopping_list()?;
        Ok(listed)
    }

    pub fn add_multiple_to_shopping_list<I, T>(&mut self, ids: I) -> Result<usize, BarError>
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let added = self.shopping.add_multiple(ids);
        info!(added, total = self.shopping.len(), "extended shopping list");
        self.persist_shopping_list()?;
        Ok(added)
    }

    /// Lists every ingredient missing from drinks that lack only one or two.
    pub fn add_almost_makeable_to_shopping_list(&mut self) -> Result<usize, BarError> {
        let ids: Vec<String> = self
            .almost_makeable_ingredients()
            .into_iter()
            .map(str::to_string)
            .collect();
        self.add_multiple_to_shopping_list(ids)
    }

    pub fn clear_shopping_list(&mut self) -> Result<(), BarError> {
        self.shopping.clear();
        self.persist_shopping_list()
    }

    /// Takes the ingredient off the shopping list and marks it in stock, then
    /// saves both snapshots. An id with no inventory entry is only removed
    /// from the list.
    pub fn mark_purchased(&mut self, id: &str) -> Result<(), BarError> {
        if self.shopping.mark_purchased(id, &mut self.store) {
            info!(id, "marked as purchased");
            self.recompute();
        } else {
            warn!(id, "purchased ingredient is not in the inventory, removed from shopping list only");
        }
        let ingredients = self.storage.persist_ingredients(self.store.as_slice());
        let list = self.storage.persist_shopping_list(&self.shopping);
        ingredients.and(list)?;
        Ok(())
    }

    // --- Internals ---

    fn recompute(&mut self) {
        self.available = compute_availability(
            &self.catalog,
            self.store.as_slice(),
            self.config.allow_substitutions,
        );
    }

    fn stock_changed(&mut self) -> Result<(), BarError> {
        self.recompute();
        self.persist_ingredients()
    }

    fn persist_ingredients(&mut self) -> Result<(), BarError> {
        self.storage
            .persist_ingredients(self.store.as_slice())
            .map_err(BarError::from)
    }

    fn persist_shopping_list(&mut self) -> Result<(), BarError> {
        self.storage
            .persist_shopping_list(&self.shopping)
            .map_err(BarError::from)
    }
}
