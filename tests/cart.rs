//! Cart behavior over the real SQLite-backed slot store.

use stationer::cart::{CART_SLOT_KEY, CartStore};
use stationer::catalog::Catalog;
use stationer::domain::item::Item;
use stationer::domain::types::ItemId;
use stationer::repository::{DieselRepository, SlotWriter};

mod common;

fn catalog() -> Catalog {
    Catalog::bundled().expect("bundled catalog should parse")
}

fn item(catalog: &Catalog, id: i32) -> Item {
    catalog
        .item_by_id(ItemId::new(id).expect("valid id"))
        .expect("item should exist in bundled catalog")
        .clone()
}

#[test]
fn cart_persists_across_store_instances() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());
    let catalog = catalog();
    let book = item(&catalog, 101);

    CartStore::new(repo.clone()).add(&book, 3, None);

    // a fresh store over the same database sees the same cart
    let store = CartStore::new(repo);
    let cart = store.cart();
    assert_eq!(cart.len(), 1);
    assert_eq!(cart[0].id, 101);
    assert_eq!(cart[0].quantity.get(), 3);
    assert_eq!(store.total(), 1500.0);
    assert_eq!(store.count(), 3);
}

#[test]
fn repeated_adds_merge_into_one_persisted_line() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());
    let catalog = catalog();
    let book = item(&catalog, 101);

    let store = CartStore::new(repo);
    store.add(&book, 3, None);
    let cart = store.add(&book, 2, None);

    assert_eq!(cart.len(), 1);
    assert_eq!(cart[0].quantity.get(), 5);
    assert_eq!(store.total(), 2500.0);
}

#[test]
fn variant_lines_keep_their_own_prices() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());
    let catalog = catalog();
    let cards = item(&catalog, 201);
    let matte = cards.variants[0].clone();
    let glossy = cards.variants[1].clone();

    let store = CartStore::new(repo);
    store.add(&cards, 1, Some(&matte));
    let cart = store.add(&cards, 1, Some(&glossy));

    assert_eq!(cart.len(), 2);
    assert_eq!(store.total(), matte.price.get() + glossy.price.get());
}

#[test]
fn quantity_update_and_removal_round_trip() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());
    let catalog = catalog();
    let book = item(&catalog, 101);

    let store = CartStore::new(repo);
    store.add(&book, 3, None);

    store.set_quantity(book.id, None, 10);
    assert_eq!(store.total(), 5000.0);

    store.set_quantity(book.id, None, 0);
    assert!(store.cart().is_empty());

    store.add(&book, 1, None);
    store.remove(book.id, None);
    assert!(store.cart().is_empty());
}

#[test]
fn clear_deletes_the_persisted_slot() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());
    let catalog = catalog();

    let store = CartStore::new(repo);
    store.add(&item(&catalog, 104), 2, None);
    store.clear();

    assert!(store.cart().is_empty());
    assert_eq!(store.total(), 0.0);
}

#[test]
fn corrupted_slot_degrades_to_empty_cart() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());
    repo.write_slot(CART_SLOT_KEY, "not json at all")
        .expect("should write slot");

    let store = CartStore::new(repo);
    assert!(store.cart().is_empty());

    // the next mutation overwrites the corrupt payload
    let catalog = catalog();
    let cart = store.add(&item(&catalog, 102), 1, None);
    assert_eq!(cart.len(), 1);
    assert_eq!(store.cart().len(), 1);
}

#[test]
fn carts_with_different_keys_are_isolated() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());
    let catalog = catalog();

    let first = CartStore::with_key(repo.clone(), "cart:alice");
    let second = CartStore::with_key(repo, "cart:bob");

    first.add(&item(&catalog, 101), 1, None);
    assert!(second.cart().is_empty());
}
