use crate::availability::{StockSet, missing_count};
use crate::model::Drink;
use itertools::Itertools;

/// A drink missing at most this many ingredients counts as "almost makeable".
pub const ALMOST_MAKEABLE_MAX_MISSING: usize = 2;

fn is_almost_makeable(drink: &Drink, stock: &StockSet) -> bool {
    (1..=ALMOST_MAKEABLE_MAX_MISSING).contains(&missing_count(drink, stock))
}

/// Drinks that lack between one and [`ALMOST_MAKEABLE_MAX_MISSING`] of their
/// own ingredients. Substitutes are not considered.
pub fn almost_makeable_drinks<'a>(drinks: &'a [Drink], stock: &StockSet) -> Vec<&'a Drink> {
    drinks
        .iter()
        .filter(|d| is_almost_makeable(d, stock))
        .collect()
}

/// Missing ingredient ids across all almost-makeable drinks, deduplicated in
/// first-seen order. Ready to feed into
/// [`ShoppingList::add_multiple`](super::ShoppingList::add_multiple).
pub fn almost_makeable_ingredients<'a>(drinks: &'a [Drink], stock: &StockSet) -> Vec<&'a str> {
    almost_makeable_drinks(drinks, stock)
        .into_iter()
        .flat_map(|d| d.ingredients.iter())
        .map(|r| r.ingredient_id.as_str())
        .filter(|id| !stock.contains(id))
        .unique()
        .collect()
}
