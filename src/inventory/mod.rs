//! The ingredient store: the single owner of ingredient values and their stock state.

use crate::error::InventoryError;
use crate::model::Ingredient;
use ahash::AHashMap;
use serde::{Deserialize, Serialize};

mod amount;

pub use amount::parse_amount;

/// Label used when grouping ingredients that carry no category.
pub const UNCATEGORIZED: &str = "Other";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IngredientStore {
    ingredients: Vec<Ingredient>,
}

impl IngredientStore {
    pub fn new(ingredients: Vec<Ingredient>) -> Self {
        Self { ingredients }
    }

    pub fn as_slice(&self) -> &[Ingredient] {
        &self.ingredients
    }

    pub fn into_inner(self) -> Vec<Ingredient> {
        self.ingredients
    }

    pub fn len(&self) -> usize {
        self.ingredients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ingredients.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Ingredient> {
        self.ingredients.iter().find(|i| i.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    fn get_mut(&mut self, id: &str) -> Result<&mut Ingredient, InventoryError> {
        self.ingredients
            .iter_mut()
            .find(|i| i.id == id)
            .ok_or_else(|| InventoryError::UnknownIngredient(id.to_string()))
    }

    pub fn set_stock(&mut self, id: &str, in_stock: bool) -> Result<(), InventoryError> {
        self.get_mut(id)?.in_stock = in_stock;
        Ok(())
    }

    /// Flips the stock flag and returns the new value.
    pub fn toggle_stock(&mut self, id: &str) -> Result<bool, InventoryError> {
        let ingredient = self.get_mut(id)?;
        ingredient.in_stock = !ingredient.in_stock;
        Ok(ingredient.in_stock)
    }

    pub fn set_amount(&mut self, id: &str, amount: f64) -> Result<(), InventoryError> {
        if !amount.is_finite() || amount < 0.0 {
            return Err(InventoryError::InvalidAmount {
                input: amount.to_string(),
            });
        }
        self.get_mut(id)?.amount = Some(amount);
        Ok(())
    }

    /// Parses raw user input and stores it as the amount. Rejected input
    /// leaves the store untouched.
    pub fn set_amount_from_input(&mut self, id: &str, input: &str) -> Result<f64, InventoryError> {
        let amount = parse_amount(input)?;
        self.set_amount(id, amount)?;
        Ok(amount)
    }

    /// Replaces the stored ingredient that has the same id.
    pub fn update_ingredient(&mut self, updated: Ingredient) -> Result<(), InventoryError> {
        let slot = self.get_mut(&updated.id)?;
        *slot = updated;
        Ok(())
    }

    /// Sets the stock flag of every listed ingredient that exists and returns
    /// how many were updated. Unknown ids are skipped.
    pub fn set_stock_many<I, S>(&mut self, ids: I, in_stock: bool) -> usize
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        ids.into_iter()
            .filter(|id| self.set_stock(id.as_ref(), in_stock).is_ok())
            .count()
    }

    pub fn set_all_stock(&mut self, in_stock: bool) {
        for ingredient in &mut self.ingredients {
            ingredient.in_stock = in_stock;
        }
    }

    pub fn in_stock(&self) -> impl Iterator<Item = &Ingredient> {
        self.ingredients.iter().filter(|i| i.in_stock)
    }

    pub fn out_of_stock(&self) -> impl Iterator<Item = &Ingredient> {
        self.ingredients.iter().filter(|i| !i.in_stock)
    }

    /// Groups ingredients by category in first-seen order.
    pub fn grouped_by_category(&self) -> Vec<(&str, Vec<&Ingredient>)> {
        let mut index: AHashMap<&str, usize> = AHashMap::new();
        let mut groups: Vec<(&str, Vec<&Ingredient>)> = Vec::new();
        for ingredient in &self.ingredients {
            let category = match ingredient.category.trim() {
                "" => UNCATEGORIZED,
                c => c,
            };
            let slot = *index.entry(category).or_insert_with(|| {
                groups.push((category, Vec::new()));
                groups.len() - 1
            });
            groups[slot].1.push(ingredient);
        }
        groups
    }
}

impl From<Vec<Ingredient>> for IngredientStore {
    fn from(ingredients: Vec<Ingredient>) -> Self {
        Self::new(ingredients)
    }
}
