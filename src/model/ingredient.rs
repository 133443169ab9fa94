use serde::{Deserialize, Serialize};

/// A stockable item in the home bar.
///
/// Drinks and the shopping list refer to ingredients by `id` only; the
/// [`IngredientStore`](crate::inventory::IngredientStore) owns the values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ingredient {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub in_stock: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
}

impl Ingredient {
    pub fn new(id: impl Into<String>, name: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category: category.into(),
            in_stock: false,
            amount: None,
            unit: None,
        }
    }

    pub fn with_stock(mut self, in_stock: bool) -> Self {
        self.in_stock = in_stock;
        self
    }

    pub fn with_amount(mut self, amount: f64, unit: impl Into<String>) -> Self {
        self.amount = Some(amount);
        self.unit = Some(unit.into());
        self
    }
}

/// Static grouping of ingredients (spirits, mixers, garnish...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
}
