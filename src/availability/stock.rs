use crate::model::Ingredient;
use ahash::AHashSet;

/// The set of ingredient ids currently in stock.
///
/// Built once per recomputation so every requirement check is a hash lookup.
/// Ids that do not exist in the inventory are simply never contained.
#[derive(Debug, Clone, Default)]
pub struct StockSet {
    ids: AHashSet<String>,
}

impl StockSet {
    pub fn from_ingredients(ingredients: &[Ingredient]) -> Self {
        Self {
            ids: ingredients
                .iter()
                .filter(|i| i.in_stock)
                .map(|i| i.id.clone())
                .collect(),
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for StockSet {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        Self {
            ids: iter.into_iter().map(Into::into).collect(),
        }
    }
}
