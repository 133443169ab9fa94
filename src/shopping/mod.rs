//! Shopping list state and the "almost makeable" derivation that seeds it.

mod almost;
mod list;

pub use almost::{ALMOST_MAKEABLE_MAX_MISSING, almost_makeable_drinks, almost_makeable_ingredients};
pub use list::ShoppingList;
