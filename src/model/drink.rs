use serde::{Deserialize, Serialize};
use std::fmt;

/// How a requirement is presented on a recipe card. Availability ignores it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IngredientRole {
    #[default]
    Primary,
    Secondary,
}

/// One line item of a recipe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DrinkIngredient {
    pub ingredient_id: String,
    /// Free-form quantity, e.g. `"2"` or `"a splash"`.
    #[serde(default)]
    pub amount: String,
    #[serde(default)]
    pub unit: String,
    #[serde(default)]
    pub category: IngredientRole,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub substitutes: Vec<String>,
}

impl DrinkIngredient {
    pub fn new(ingredient_id: impl Into<String>) -> Self {
        Self {
            ingredient_id: ingredient_id.into(),
            amount: String::new(),
            unit: String::new(),
            category: IngredientRole::Primary,
            substitutes: Vec::new(),
        }
    }

    pub fn with_amount(mut self, amount: impl Into<String>, unit: impl Into<String>) -> Self {
        self.amount = amount.into();
        self.unit = unit.into();
        self
    }

    pub fn secondary(mut self) -> Self {
        self.category = IngredientRole::Secondary;
        self
    }

    pub fn with_substitutes<I, S>(mut self, substitutes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.substitutes = substitutes.into_iter().map(Into::into).collect();
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strength {
    Light,
    Medium,
    Strong,
}

impl Strength {
    /// Maps a strength gauge position to a strength. Level 0 (and anything
    /// out of range) means "all strengths".
    pub fn from_level(level: u8) -> Option<Self> {
        match level {
            1 => Some(Strength::Light),
            2 => Some(Strength::Medium),
            3 => Some(Strength::Strong),
            _ => None,
        }
    }

    pub fn level(self) -> u8 {
        match self {
            Strength::Light => 1,
            Strength::Medium => 2,
            Strength::Strong => 3,
        }
    }
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strength::Light => write!(f, "light"),
            Strength::Medium => write!(f, "medium"),
            Strength::Strong => write!(f, "strong"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DrinkTags {
    pub strength: Strength,
    #[serde(default)]
    pub taste: Vec<String>,
    /// Derived by the availability engine. Catalog input never sets it.
    #[serde(default, skip_deserializing)]
    pub can_make: bool,
}

/// A recipe from the drink catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Drink {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub ingredients: Vec<DrinkIngredient>,
    #[serde(default)]
    pub instructions: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub tags: DrinkTags,
    #[serde(
        default,
        alias = "carAuctionEasterEgg",
        skip_serializing_if = "Option::is_none"
    )]
    pub easter_egg: Option<String>,
}

impl Drink {
    pub fn new(id: impl Into<String>, name: impl Into<String>, strength: Strength) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            ingredients: Vec::new(),
            instructions: String::new(),
            image: None,
            tags: DrinkTags {
                strength,
                taste: Vec::new(),
                can_make: false,
            },
            easter_egg: None,
        }
    }

    pub fn with_ingredient(mut self, requirement: DrinkIngredient) -> Self {
        self.ingredients.push(requirement);
        self
    }

    pub fn with_tastes<I, S>(mut self, tastes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags.taste = tastes.into_iter().map(Into::into).collect();
        self
    }

    pub fn can_make(&self) -> bool {
        self.tags.can_make
    }

    pub fn primary_requirements(&self) -> impl Iterator<Item = &DrinkIngredient> {
        self.ingredients
            .iter()
            .filter(|r| r.category == IngredientRole::Primary)
    }

    pub fn secondary_requirements(&self) -> impl Iterator<Item = &DrinkIngredient> {
        self.ingredients
            .iter()
            .filter(|r| r.category == IngredientRole::Secondary)
    }
}
