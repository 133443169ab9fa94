use ahash::AHashSet;

/// An umbrella name over related taste labels, used to group taste filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TasteCategory {
    pub name: &'static str,
    pub tastes: &'static [&'static str],
    pub color: Option<&'static str>,
}

impl TasteCategory {
    pub fn contains(&self, taste: &str) -> bool {
        let taste = taste.to_lowercase();
        self.tastes.iter().any(|t| t.to_lowercase() == taste)
    }
}

/// The built-in taste categories. A label belongs to at most one of them.
pub const TASTE_CATEGORIES: &[TasteCategory] = &[
    TasteCategory {
        name: "Sweet",
        tastes: &["Sweet", "Fruity", "Berry", "Tropical", "Caramel"],
        color: Some("#ff6b6b"),
    },
    TasteCategory {
        name: "Sour",
        tastes: &["Sour", "Citrus", "Lime", "Lemon"],
        color: Some("#ffe66d"),
    },
    TasteCategory {
        name: "Bitter",
        tastes: &["Bitter", "Coffee", "Chocolate", "Herbal"],
        color: Some("#88d8b0"),
    },
    TasteCategory {
        name: "Spicy",
        tastes: &["Spicy", "Ginger", "Cinnamon", "Pepper"],
        color: Some("#ff8e5e"),
    },
    TasteCategory {
        name: "Refreshing",
        tastes: &["Refreshing", "Mint", "Cucumber", "Light"],
        color: Some("#6abfff"),
    },
];

/// Finds the category a taste label belongs to, ignoring case.
pub fn find_category_for_taste<'a>(
    categories: &'a [TasteCategory],
    taste: &str,
) -> Option<&'a TasteCategory> {
    categories.iter().find(|c| c.contains(taste))
}

/// Expands selected category names into the lowercased set of their member
/// labels. Names match case-insensitively; unknown names add nothing.
pub fn expand_taste_categories<S: AsRef<str>>(
    categories: &[TasteCategory],
    selected: &[S],
) -> AHashSet<String> {
    selected
        .iter()
        .filter_map(|name| {
            let name = name.as_ref().to_lowercase();
            categories.iter().find(|c| c.name.to_lowercase() == name)
        })
        .flat_map(|c| c.tastes.iter().map(|t| t.to_lowercase()))
        .collect()
}
