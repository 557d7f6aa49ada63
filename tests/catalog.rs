//! Query-layer behavior over the bundled demo catalog.

use std::collections::HashSet;

use stationer::catalog::{Catalog, ItemQuery, SortKey};
use stationer::domain::types::ItemId;

fn catalog() -> Catalog {
    Catalog::bundled().expect("bundled catalog should parse")
}

#[test]
fn bundled_catalog_loads_every_row() {
    let catalog = catalog();
    assert_eq!(catalog.categories().len(), 4);
    assert_eq!(catalog.items().len(), 11);
    assert!(catalog.category_by_id("printing").is_some());
    assert!(catalog.category_by_id("nonexistent").is_none());
}

#[test]
fn empty_search_equals_all_items() {
    let catalog = catalog();
    let all: HashSet<i32> = catalog.items().iter().map(|i| i.id.get()).collect();
    let searched: HashSet<i32> = catalog.search("").iter().map(|i| i.id.get()).collect();
    assert_eq!(all, searched);
}

#[test]
fn all_sentinel_returns_full_catalog_and_unknown_returns_empty() {
    let catalog = catalog();
    assert_eq!(catalog.items_by_category("all").len(), catalog.items().len());
    assert!(catalog.items_by_category("nonexistent").is_empty());
}

#[test]
fn search_is_case_insensitive_across_fields() {
    let catalog = catalog();
    assert!(!catalog.search("BANNER").is_empty());
    // "printing" matches the category id of every printing service
    assert_eq!(catalog.search("printing").len(), 3);
}

#[test]
fn slug_and_string_id_lookups_agree() {
    let catalog = catalog();
    let by_slug = catalog.item_by_slug("business-cards").expect("slug exists");
    let by_id = catalog.item_by_id_str("201").expect("id exists");
    assert_eq!(by_slug, by_id);
}

#[test]
fn related_items_resolve_and_exclude_self() {
    let catalog = catalog();
    let current = ItemId::new(101).expect("valid id");
    let related = catalog.item_by_id(current).expect("item exists").related.clone();

    let items = catalog.related_items(current, &related);
    assert!(!items.is_empty());
    assert!(items.iter().all(|i| i.id != current));
}

#[test]
fn browse_query_composes_filters_conjunctively() {
    let catalog = catalog();

    let fast_printing = catalog.query(
        &ItemQuery::default()
            .category("printing")
            .fast_delivery(),
    );
    assert_eq!(fast_printing.len(), 1);
    assert_eq!(fast_printing[0].slug, "business-cards");

    let featured = catalog.query(&ItemQuery::default().featured());
    assert!(featured.iter().all(|i| i.featured));

    let cheap = catalog.query(&ItemQuery::default().price_range(0.0, 500.0));
    assert!(cheap.iter().all(|i| i.price.get() <= 500.0));
}

#[test]
fn price_sort_is_stable_against_the_store() {
    let catalog = catalog();
    let sorted = catalog.query(&ItemQuery::default().sort(SortKey::PriceAsc));

    let prices: Vec<f64> = sorted.iter().map(|i| i.price.get()).collect();
    let mut expected = prices.clone();
    expected.sort_by(f64::total_cmp);
    assert_eq!(prices, expected);

    // the store itself keeps file order
    assert_eq!(catalog.items()[0].id.get(), 101);
}

#[test]
fn rating_sort_treats_missing_as_zero() {
    let catalog = catalog();
    let sorted = catalog.query(&ItemQuery::default().sort(SortKey::RatingDesc));

    let ratings: Vec<f64> = sorted.iter().map(|i| i.rating.unwrap_or(0.0)).collect();
    assert!(ratings.windows(2).all(|w| w[0] >= w[1]));
    assert_eq!(sorted.last().map(|i| i.rating), Some(None));
}
