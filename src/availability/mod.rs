//! The availability engine.
//!
//! Everything here is a pure function of its arguments: the catalog and the
//! inventory are read-only, and the annotated drinks are fresh copies.

use crate::model::{Drink, DrinkIngredient, Ingredient};
use tracing::debug;

mod assessment;
mod stock;

pub use assessment::{DrinkAssessment, RequirementStatus, assess_drink};
pub use stock::StockSet;

/// Returns a copy of every drink with `tags.can_make` recomputed against the
/// current inventory. Catalog order is preserved.
pub fn compute_availability(
    drinks: &[Drink],
    ingredients: &[Ingredient],
    allow_substitutions: bool,
) -> Vec<Drink> {
    let stock = StockSet::from_ingredients(ingredients);
    let annotated: Vec<Drink> = drinks
        .iter()
        .map(|drink| {
            let mut copy = drink.clone();
            copy.tags.can_make = can_make(drink, &stock, allow_substitutions);
            copy
        })
        .collect();

    debug!(
        drinks = annotated.len(),
        in_stock = stock.len(),
        makeable = count_makeable(&annotated),
        allow_substitutions,
        "recomputed drink availability"
    );
    annotated
}

/// True iff every requirement is in stock directly, or (when allowed) through
/// at least one in-stock substitute. A drink without requirements is makeable.
pub fn can_make(drink: &Drink, stock: &StockSet, allow_substitutions: bool) -> bool {
    drink
        .ingredients
        .iter()
        .all(|requirement| is_satisfied(requirement, stock, allow_substitutions))
}

fn is_satisfied(
    requirement: &DrinkIngredient,
    stock: &StockSet,
    allow_substitutions: bool,
) -> bool {
    stock.contains(&requirement.ingredient_id)
        || (allow_substitutions && requirement.substitutes.iter().any(|s| stock.contains(s)))
}

/// The ingredients from `ingredients` that the drink references but that are
/// out of stock, in inventory order.
///
/// Substitution-blind: an out-of-stock requirement is reported even when one
/// of its substitutes is in stock. Requirements pointing at unknown ids have
/// no inventory entry to return and are skipped.
pub fn missing_ingredients<'a>(drink: &Drink, ingredients: &'a [Ingredient]) -> Vec<&'a Ingredient> {
    let stock = StockSet::from_ingredients(ingredients);
    ingredients
        .iter()
        .filter(|ingredient| !stock.contains(&ingredient.id))
        .filter(|ingredient| {
            drink
                .ingredients
                .iter()
                .any(|r| r.ingredient_id == ingredient.id)
        })
        .collect()
}

/// Number of requirements whose own ingredient is out of stock, substitutes ignored.
pub fn missing_count(drink: &Drink, stock: &StockSet) -> usize {
    drink
        .ingredients
        .iter()
        .filter(|r| !stock.contains(&r.ingredient_id))
        .count()
}

pub fn count_makeable(drinks: &[Drink]) -> usize {
    drinks.iter().filter(|d| d.tags.can_make).count()
}
