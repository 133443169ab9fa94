use crate::inventory::IngredientStore;
use serde::{Deserialize, Serialize};

/// Ingredient ids the user intends to buy.
///
/// Insertion order is kept for display; an id is never stored twice. Membership
/// is independent of stock: an in-stock ingredient may still be listed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct ShoppingList {
    ids: Vec<String>,
}

impl ShoppingList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|i| i == id)
    }

    /// Returns `false` when the id was already listed.
    pub fn add(&mut self, id: impl Into<String>) -> bool {
        let id = id.into();
        if self.contains(&id) {
            return false;
        }
        self.ids.push(id);
        true
    }

    /// Returns `false` when the id was not listed.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.ids.len();
        self.ids.retain(|i| i != id);
        self.ids.len() != before
    }

    /// Adds every id not yet listed, in first-seen order, and returns how many
    /// were added.
    pub fn add_multiple<I, S>(&mut self, ids: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut added = 0;
        for id in ids {
            if self.add(id) {
                added += 1;
            }
        }
        added
    }

    /// Adds the id when absent, removes it when present. Returns whether it is
    /// listed afterwards.
    pub fn toggle(&mut self, id: &str) -> bool {
        if self.remove(id) {
            false
        } else {
            self.ids.push(id.to_string());
            true
        }
    }

    /// Takes the id off the list and marks the matching ingredient as in
    /// stock. Returns whether an inventory entry was found.
    ///
    /// An id with no inventory entry is still removed from the list; the store
    /// is left as is. Calling it again is harmless.
    pub fn mark_purchased(&mut self, id: &str, store: &mut IngredientStore) -> bool {
        self.remove(id);
        store.set_stock(id, true).is_ok()
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.ids
    }
}

impl From<Vec<String>> for ShoppingList {
    /// Snapshots written by older versions may contain duplicates; the first
    /// occurrence wins.
    fn from(ids: Vec<String>) -> Self {
        let mut list = Self::new();
        list.add_multiple(ids);
        list
    }
}

impl From<ShoppingList> for Vec<String> {
    fn from(list: ShoppingList) -> Self {
        list.ids
    }
}
