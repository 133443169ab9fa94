use super::StockSet;
use crate::model::{Drink, DrinkIngredient};
use itertools::Itertools;
use std::fmt;

/// How a single requirement is covered by the current stock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequirementStatus {
    InStock,
    /// The primary ingredient is out, but these substitutes are in stock.
    Substituted { available: Vec<String> },
    Missing,
}

impl RequirementStatus {
    pub fn is_satisfied(&self) -> bool {
        !matches!(self, RequirementStatus::Missing)
    }
}

/// Per-requirement breakdown of a drink's availability, in recipe order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrinkAssessment {
    pub drink_id: String,
    pub requirements: Vec<(String, RequirementStatus)>,
}

impl DrinkAssessment {
    pub fn can_make(&self) -> bool {
        self.requirements.iter().all(|(_, s)| s.is_satisfied())
    }

    pub fn missing(&self) -> impl Iterator<Item = &str> {
        self.requirements
            .iter()
            .filter(|(_, s)| matches!(s, RequirementStatus::Missing))
            .map(|(id, _)| id.as_str())
    }

    pub fn substituted(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.requirements.iter().filter_map(|(id, s)| match s {
            RequirementStatus::Substituted { available } => Some((id.as_str(), available.as_slice())),
            _ => None,
        })
    }
}

impl fmt::Display for DrinkAssessment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts = self.requirements.iter().map(|(id, status)| match status {
            RequirementStatus::InStock => id.clone(),
            RequirementStatus::Substituted { available } => {
                format!("{} (via {})", id, available.iter().join(" or "))
            }
            RequirementStatus::Missing => format!("{} (missing)", id),
        });
        write!(f, "{}", parts.format(", "))
    }
}

/// Explains, requirement by requirement, why a drink is or is not makeable.
/// Unlike [`can_make`](super::can_make) this never short-circuits.
pub fn assess_drink(drink: &Drink, stock: &StockSet, allow_substitutions: bool) -> DrinkAssessment {
    DrinkAssessment {
        drink_id: drink.id.clone(),
        requirements: drink
            .ingredients
            .iter()
            .map(|r| (r.ingredient_id.clone(), status_of(r, stock, allow_substitutions)))
            .collect(),
    }
}

fn status_of(requirement: &DrinkIngredient, stock: &StockSet, allow_substitutions: bool) -> RequirementStatus {
    if stock.contains(&requirement.ingredient_id) {
        return RequirementStatus::InStock;
    }
    if !allow_substitutions {
        return RequirementStatus::Missing;
    }
    let available: Vec<String> = requirement
        .substitutes
        .iter()
        .filter(|s| stock.contains(s))
        .cloned()
        .collect();
    if available.is_empty() {
        RequirementStatus::Missing
    } else {
        RequirementStatus::Substituted { available }
    }
}
