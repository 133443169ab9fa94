//! Filtering, searching and paging over annotated drinks.

mod filter;
mod page;

pub use filter::{DrinkFilter, filter_drinks, filter_drinks_with, search_ingredients};
pub use page::{DEFAULT_PAGE_SIZE, Page, paginate};
