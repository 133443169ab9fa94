use crate::model::{Drink, Ingredient, Strength, TASTE_CATEGORIES, TasteCategory, expand_taste_categories};
use serde::{Deserialize, Serialize};

/// Declarative filter criteria over annotated drinks. Every set field is a
/// predicate; predicates are ANDed. An empty filter lets everything through.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DrinkFilter {
    pub can_make: Option<bool>,
    pub strength: Option<Strength>,
    #[serde(default)]
    pub taste_categories: Vec<String>,
    pub name_query: Option<String>,
}

impl DrinkFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn can_make(mut self, can_make: bool) -> Self {
        self.can_make = Some(can_make);
        self
    }

    pub fn strength(mut self, strength: Strength) -> Self {
        self.strength = Some(strength);
        self
    }

    pub fn taste_category(mut self, name: impl Into<String>) -> Self {
        self.taste_categories.push(name.into());
        self
    }

    pub fn name_query(mut self, query: impl Into<String>) -> Self {
        self.name_query = Some(query.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.can_make.is_none()
            && self.strength.is_none()
            && self.taste_categories.is_empty()
            && self.name_query.as_deref().is_none_or(|q| q.trim().is_empty())
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Filters with the built-in taste categories.
pub fn filter_drinks<'a>(drinks: &'a [Drink], filter: &DrinkFilter) -> Vec<&'a Drink> {
    filter_drinks_with(drinks, filter, TASTE_CATEGORIES)
}

/// Filters against a caller-supplied taste category table.
///
/// Selected categories are first expanded to their member labels; a drink
/// passes the taste predicate when any of its own labels equals one of them,
/// ignoring case. Catalog order is kept.
pub fn filter_drinks_with<'a>(
    drinks: &'a [Drink],
    filter: &DrinkFilter,
    categories: &[TasteCategory],
) -> Vec<&'a Drink> {
    let tastes = (!filter.taste_categories.is_empty())
        .then(|| expand_taste_categories(categories, filter.taste_categories.as_slice()));
    let query = filter
        .name_query
        .as_deref()
        .map(str::trim)
        .filter(|q| !q.is_empty())
        .map(str::to_lowercase);

    drinks
        .iter()
        .filter(|drink| filter.can_make.is_none_or(|wanted| drink.tags.can_make == wanted))
        .filter(|drink| filter.strength.is_none_or(|wanted| drink.tags.strength == wanted))
        .filter(|drink| {
            tastes.as_ref().is_none_or(|wanted| {
                drink
                    .tags
                    .taste
                    .iter()
                    .any(|t| wanted.contains(&t.to_lowercase()))
            })
        })
        .filter(|drink| {
            query
                .as_ref()
                .is_none_or(|q| drink.name.to_lowercase().contains(q.as_str()))
        })
        .collect()
}

/// Case-insensitive substring search on ingredient names. An empty query
/// returns every ingredient.
pub fn search_ingredients<'a>(ingredients: &'a [Ingredient], query: &str) -> Vec<&'a Ingredient> {
    let query = query.trim().to_lowercase();
    ingredients
        .iter()
        .filter(|i| query.is_empty() || i.name.to_lowercase().contains(&query))
        .collect()
}
