//! Tests for the shopping list state and the almost-makeable derivation.
mod common;
use barkeep::prelude::*;
use barkeep::shopping::{ALMOST_MAKEABLE_MAX_MISSING, almost_makeable_drinks};
use common::*;

#[test]
fn test_add_is_a_no_op_for_present_ids() {
    let mut list = ShoppingList::new();
    assert!(list.add("tonic"));
    assert!(!list.add("tonic"));
    assert_eq!(list.len(), 1);
    assert!(list.contains("tonic"));
}

#[test]
fn test_add_multiple_skips_known_ids_and_keeps_first_seen_order() {
    let mut list = ShoppingList::new();
    list.add("lime");

    let added = list.add_multiple(["tonic", "lime", "soda", "tonic", "mint"]);
    assert_eq!(added, 3);
    assert_eq!(list.iter().collect::<Vec<_>>(), vec!["lime", "tonic", "soda", "mint"]);
}

#[test]
fn test_no_duplicates_after_any_sequence() {
    let mut list = ShoppingList::new();
    for round in 0..3 {
        list.add("a");
        list.add_multiple(["b", "a", "c"]);
        if round == 1 {
            list.remove("b");
        }
        list.add_multiple(vec!["c".to_string(), "d".to_string()]);
    }
    let mut ids: Vec<_> = list.iter().collect();
    let total = ids.len();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), total);
}

#[test]
fn test_remove_reports_membership() {
    let mut list = ShoppingList::new();
    list.add("soda");
    assert!(list.remove("soda"));
    assert!(!list.remove("soda"));
    assert!(list.is_empty());
}

#[test]
fn test_toggle() {
    let mut list = ShoppingList::new();
    assert!(list.toggle("mint"));
    assert!(list.contains("mint"));
    assert!(!list.toggle("mint"));
    assert!(!list.contains("mint"));
}

#[test]
fn test_mark_purchased_removes_and_stocks() {
    let mut store = IngredientStore::new(create_simple_inventory());
    let mut list = ShoppingList::new();
    list.add_multiple(["tonic", "soda"]);

    assert!(list.mark_purchased("tonic", &mut store));
    assert!(!list.contains("tonic"));
    assert!(list.contains("soda"));
    assert!(store.get("tonic").unwrap().in_stock);

    // Second call: list unchanged, ingredient still in stock.
    assert!(list.mark_purchased("tonic", &mut store));
    assert_eq!(list.iter().collect::<Vec<_>>(), vec!["soda"]);
    assert!(store.get("tonic").unwrap().in_stock);
}

#[test]
fn test_mark_purchased_unknown_ingredient_still_leaves_list() {
    let mut store = IngredientStore::new(create_simple_inventory());
    let before = store.clone();
    let mut list = ShoppingList::new();
    list.add_multiple(["absinthe", "tonic"]);

    assert!(!list.mark_purchased("absinthe", &mut store));
    assert_eq!(list.iter().collect::<Vec<_>>(), vec!["tonic"]);
    assert_eq!(store, before);
}

#[test]
fn test_membership_is_independent_of_stock() {
    let mut store = IngredientStore::new(create_simple_inventory());
    let mut list = ShoppingList::new();
    list.add("gin");

    store.set_stock("gin", true).unwrap();
    assert!(list.contains("gin"));
    store.set_stock("gin", false).unwrap();
    assert!(list.contains("gin"));
}

#[test]
fn test_serializes_as_plain_id_array() {
    let mut list = ShoppingList::new();
    list.add_multiple(["tonic", "soda"]);
    assert_eq!(serde_json::to_string(&list).unwrap(), r#"["tonic","soda"]"#);

    let restored: ShoppingList = serde_json::from_str(r#"["lime","mint","lime"]"#).unwrap();
    assert_eq!(restored.iter().collect::<Vec<_>>(), vec!["lime", "mint"]);
}

#[test]
fn test_almost_makeable_keeps_only_one_or_two_missing() {
    let ingredients = vec![
        Ingredient::new("vodka", "Vodka", "spirits").with_stock(true),
        Ingredient::new("kahlua", "Kahlua", "liqueurs"),
        Ingredient::new("cream", "Cream", "dairy"),
        Ingredient::new("rum", "Rum", "spirits"),
        Ingredient::new("cola", "Cola", "mixers"),
        Ingredient::new("lime", "Lime", "garnish"),
    ];
    let drinks = vec![
        // Missing exactly one.
        Drink::new("black-russian", "Black Russian", Strength::Strong)
            .with_ingredient(DrinkIngredient::new("vodka"))
            .with_ingredient(DrinkIngredient::new("kahlua")),
        // Missing exactly three.
        Drink::new("cuba-libre", "Cuba Libre", Strength::Medium)
            .with_ingredient(DrinkIngredient::new("rum"))
            .with_ingredient(DrinkIngredient::new("cola"))
            .with_ingredient(DrinkIngredient::new("lime")),
    ];
    let stock = StockSet::from_ingredients(&ingredients);

    assert_eq!(almost_makeable_ingredients(&drinks, &stock), vec!["kahlua"]);
}

#[test]
fn test_almost_makeable_deduplicates_across_drinks() {
    let ingredients = create_simple_inventory();
    let stock = StockSet::from_ingredients(&ingredients);
    let drinks = create_catalog();

    // G&T and G&T+ both miss tonic; the mojito misses four, the gimlet none.
    assert_eq!(almost_makeable_ingredients(&drinks, &stock), vec!["tonic"]);
    let almost: Vec<_> = almost_makeable_drinks(&drinks, &stock)
        .iter()
        .map(|d| d.id.as_str())
        .collect();
    assert_eq!(almost, vec!["gt", "gt-plus"]);
}

#[test]
fn test_almost_makeable_boundary_and_substitution_blindness() {
    let ingredients = vec![Ingredient::new("soda", "Soda", "mixers").with_stock(true)];
    let stock = StockSet::from_ingredients(&ingredients);
    let drinks = vec![
        Drink::new("two", "Two Missing", Strength::Light)
            .with_ingredient(DrinkIngredient::new("a").with_substitutes(["soda"]))
            .with_ingredient(DrinkIngredient::new("b")),
        Drink::new("three", "Three Missing", Strength::Light)
            .with_ingredient(DrinkIngredient::new("c"))
            .with_ingredient(DrinkIngredient::new("d"))
            .with_ingredient(DrinkIngredient::new("e")),
    ];

    assert_eq!(ALMOST_MAKEABLE_MAX_MISSING, 2);
    assert_eq!(almost_makeable_ingredients(&drinks, &stock), vec!["a", "b"]);
}

#[test]
fn test_almost_makeable_feeds_shopping_list() {
    let ingredients = create_simple_inventory();
    let stock = StockSet::from_ingredients(&ingredients);
    let drinks = create_catalog();

    let mut list = ShoppingList::new();
    list.add("tonic");
    let added = list.add_multiple(almost_makeable_ingredients(&drinks, &stock));
    assert_eq!(added, 0);
    assert_eq!(list.len(), 1);
}
