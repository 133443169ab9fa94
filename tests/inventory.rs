//! Tests for the ingredient store and amount input handling.
mod common;
use barkeep::inventory::{UNCATEGORIZED, parse_amount};
use barkeep::prelude::*;
use common::*;

#[test]
fn test_set_and_toggle_stock() {
    let mut store = IngredientStore::new(create_simple_inventory());

    store.set_stock("tonic", true).unwrap();
    assert!(store.get("tonic").unwrap().in_stock);

    assert!(!store.toggle_stock("tonic").unwrap());
    assert!(store.toggle_stock("tonic").unwrap());
}

#[test]
fn test_unknown_ingredient_is_reported() {
    let mut store = IngredientStore::new(create_simple_inventory());
    let before = store.clone();

    let err = store.set_stock("absinthe", true).unwrap_err();
    assert_eq!(err, InventoryError::UnknownIngredient("absinthe".to_string()));
    assert!(err.to_string().contains("absinthe"));
    assert_eq!(store, before);
}

#[test]
fn test_amount_input_validation() {
    assert_eq!(parse_amount("3").unwrap(), 3.0);
    assert_eq!(parse_amount(" 0.5 ").unwrap(), 0.5);
    assert_eq!(parse_amount("0").unwrap(), 0.0);

    for bad in ["", "abc", "-1", "NaN", "inf", "1,5"] {
        let err = parse_amount(bad).unwrap_err();
        assert_eq!(
            err,
            InventoryError::InvalidAmount {
                input: bad.to_string()
            }
        );
    }
}

#[test]
fn test_rejected_amount_leaves_store_unchanged() {
    let mut store = IngredientStore::new(create_simple_inventory());
    store.set_amount("gin", 70.0).unwrap();
    let before = store.clone();

    assert!(store.set_amount_from_input("gin", "-5").is_err());
    assert!(store.set_amount("gin", -1.0).is_err());
    assert!(store.set_amount("gin", f64::NAN).is_err());
    assert_eq!(store, before);

    assert_eq!(store.set_amount_from_input("gin", "35").unwrap(), 35.0);
    assert_eq!(store.get("gin").unwrap().amount, Some(35.0));
}

#[test]
fn test_update_ingredient_replaces_by_id() {
    let mut store = IngredientStore::new(create_simple_inventory());
    let updated = Ingredient::new("lime", "Fresh Lime", "garnish")
        .with_stock(false)
        .with_amount(4.0, "pc");

    store.update_ingredient(updated.clone()).unwrap();
    assert_eq!(store.get("lime"), Some(&updated));
    assert_eq!(store.len(), 4);

    let stranger = Ingredient::new("absinthe", "Absinthe", "spirits");
    assert!(store.update_ingredient(stranger).is_err());
}

#[test]
fn test_bulk_stock_operations() {
    let mut store = IngredientStore::new(create_simple_inventory());

    let updated = store.set_stock_many(["tonic", "soda", "absinthe"], true);
    assert_eq!(updated, 2);
    assert_eq!(store.out_of_stock().count(), 0);

    store.set_all_stock(false);
    assert_eq!(store.in_stock().count(), 0);
    assert_eq!(store.out_of_stock().count(), 4);
}

#[test]
fn test_grouped_by_category_keeps_first_seen_order() {
    let mut ingredients = create_simple_inventory();
    ingredients.push(Ingredient::new("cherry", "Cherry", ""));
    ingredients.push(Ingredient::new("rum", "Rum", "spirits"));
    let store = IngredientStore::new(ingredients);

    let groups = store.grouped_by_category();
    let names: Vec<_> = groups.iter().map(|(c, _)| *c).collect();
    assert_eq!(names, vec!["spirits", "mixers", "garnish", UNCATEGORIZED]);

    let spirits: Vec<_> = groups[0].1.iter().map(|i| i.id.as_str()).collect();
    assert_eq!(spirits, vec!["gin", "rum"]);
}

#[test]
fn test_ingredient_json_shape() {
    let json = r#"{"id":"gin","name":"Gin","category":"spirits","inStock":true,"amount":70,"unit":"cl"}"#;
    let ingredient: Ingredient = serde_json::from_str(json).unwrap();
    assert_eq!(
        ingredient,
        Ingredient::new("gin", "Gin", "spirits")
            .with_stock(true)
            .with_amount(70.0, "cl")
    );

    let value = serde_json::to_value(Ingredient::new("lime", "Lime", "garnish")).unwrap();
    assert_eq!(value["inStock"], serde_json::json!(false));
    assert!(value.get("amount").is_none());
}

#[test]
fn test_drink_json_shape() {
    let json = r#"{
        "id": "mojito",
        "name": "Mojito",
        "ingredients": [
            {"ingredientId": "rum", "amount": "5", "unit": "cl", "substitutes": ["cachaca"]},
            {"ingredientId": "soda", "amount": "a splash", "unit": "", "category": "secondary"}
        ],
        "instructions": "Muddle, build, top up.",
        "tags": {"strength": "light", "taste": ["Mint", "Lime"], "canMake": true},
        "carAuctionEasterEgg": "Sold!"
    }"#;
    let drink: Drink = serde_json::from_str(json).unwrap();

    // canMake is derived, never read from the catalog.
    assert!(!drink.can_make());
    assert_eq!(drink.ingredients[0].category, IngredientRole::Primary);
    assert_eq!(drink.ingredients[0].substitutes, vec!["cachaca"]);
    assert_eq!(drink.ingredients[1].category, IngredientRole::Secondary);
    assert_eq!(drink.tags.strength, Strength::Light);
    assert_eq!(drink.easter_egg.as_deref(), Some("Sold!"));
    assert_eq!(drink.primary_requirements().count(), 1);
    assert_eq!(drink.secondary_requirements().count(), 1);
}
