//! Common test utilities for building inventories and drink catalogs.
use barkeep::prelude::*;

/// The inventory from the gin & tonic examples: gin and lime in stock,
/// tonic and soda out.
#[allow(dead_code)]
pub fn create_simple_inventory() -> Vec<Ingredient> {
    vec![
        Ingredient::new("gin", "Gin", "spirits").with_stock(true),
        Ingredient::new("tonic", "Tonic Water", "mixers"),
        Ingredient::new("lime", "Lime", "garnish").with_stock(true),
        Ingredient::new("soda", "Soda Water", "mixers"),
    ]
}

/// Gin + tonic, no substitutes.
#[allow(dead_code)]
pub fn create_gin_tonic() -> Drink {
    Drink::new("gt", "G&T", Strength::Medium)
        .with_ingredient(DrinkIngredient::new("gin").with_amount("5", "cl"))
        .with_ingredient(DrinkIngredient::new("tonic").with_amount("15", "cl"))
        .with_tastes(["Bitter", "Refreshing"])
}

/// Gin + tonic where soda may replace tonic.
#[allow(dead_code)]
pub fn create_gin_tonic_plus() -> Drink {
    Drink::new("gt-plus", "G&T+", Strength::Medium)
        .with_ingredient(DrinkIngredient::new("gin").with_amount("5", "cl"))
        .with_ingredient(
            DrinkIngredient::new("tonic")
                .with_amount("15", "cl")
                .with_substitutes(["soda"]),
        )
        .with_tastes(["Refreshing"])
}

/// A small but varied catalog, in a fixed order.
#[allow(dead_code)]
pub fn create_catalog() -> Vec<Drink> {
    vec![
        create_gin_tonic(),
        create_gin_tonic_plus(),
        Drink::new("gimlet", "Gimlet", Strength::Strong)
            .with_ingredient(DrinkIngredient::new("gin").with_amount("6", "cl"))
            .with_ingredient(DrinkIngredient::new("lime").with_amount("2", "cl"))
            .with_tastes(["Lime", "Sour"]),
        Drink::new("mojito", "Mojito", Strength::Light)
            .with_ingredient(DrinkIngredient::new("rum").with_amount("5", "cl"))
            .with_ingredient(DrinkIngredient::new("mint").with_amount("a handful", ""))
            .with_ingredient(DrinkIngredient::new("sugar").with_amount("2", "tsp"))
            .with_ingredient(DrinkIngredient::new("lime").with_amount("1", "pc"))
            .with_ingredient(DrinkIngredient::new("soda").with_amount("a splash", "").secondary())
            .with_tastes(["Mint", "Lime", "Sweet"]),
        Drink::new("water", "Glass of Water", Strength::Light),
    ]
}

#[allow(dead_code)]
pub fn create_inline_catalog() -> InlineCatalog {
    InlineCatalog::new(create_simple_inventory(), create_catalog()).with_categories(vec![
        Category {
            id: "spirits".to_string(),
            name: "Spirits".to_string(),
            description: "Base spirits".to_string(),
        },
    ])
}

/// Looks up an annotated drink by id.
#[allow(dead_code)]
pub fn find<'a>(drinks: &'a [Drink], id: &str) -> &'a Drink {
    drinks
        .iter()
        .find(|d| d.id == id)
        .unwrap_or_else(|| panic!("drink '{}' not in result", id))
}

/// A catalog source whose every load fails.
#[allow(dead_code)]
pub struct BrokenCatalog;

impl CatalogSource for BrokenCatalog {
    fn load_ingredients(&self) -> std::result::Result<Vec<Ingredient>, LoadError> {
        Err(LoadError::Io {
            path: "ingredients.json".to_string(),
            message: "unreachable".to_string(),
        })
    }

    fn load_categories(&self) -> std::result::Result<Vec<Category>, LoadError> {
        Err(LoadError::Io {
            path: "categories.json".to_string(),
            message: "unreachable".to_string(),
        })
    }

    fn load_drinks(&self) -> std::result::Result<Vec<Drink>, LoadError> {
        Err(LoadError::Parse {
            what: "drinks".to_string(),
            message: "expected value at line 1 column 1".to_string(),
        })
    }
}
