//! Static catalog store and its read-only query layer.
//!
//! The catalog is loaded once at startup and never mutated. Every query
//! returns owned copies so callers can sort and filter freely without
//! touching the store.

use std::collections::HashSet;
use std::path::Path;

use thiserror::Error;

use crate::domain::category::Category;
use crate::domain::item::Item;
use crate::domain::types::ItemId;
use crate::models::catalog::CatalogFile;

/// Errors raised while loading the catalog file. Individual malformed rows
/// do not reach this level; they are skipped with a warning.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse catalog file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Sort order applied to catalog query results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    PriceAsc,
    PriceDesc,
    /// Missing ratings sort as zero.
    RatingDesc,
    NameAsc,
}

/// Query parameters for browsing the catalog. Filters compose
/// conjunctively on top of the base category/search selection.
#[derive(Debug, Clone, Default)]
pub struct ItemQuery {
    /// Category id, `"all"` meaning no filter.
    pub category: Option<String>,
    /// Free-text search string.
    pub search: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub featured_only: bool,
    pub fast_delivery_only: bool,
    pub sort: Option<SortKey>,
}

impl ItemQuery {
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }
    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }
    pub fn price_range(mut self, min: f64, max: f64) -> Self {
        self.min_price = Some(min);
        self.max_price = Some(max);
        self
    }
    pub fn featured(mut self) -> Self {
        self.featured_only = true;
        self
    }
    pub fn fast_delivery(mut self) -> Self {
        self.fast_delivery_only = true;
        self
    }
    pub fn sort(mut self, sort: SortKey) -> Self {
        self.sort = Some(sort);
        self
    }
}

/// The immutable catalog store: categories plus items, in file order.
#[derive(Debug, Clone)]
pub struct Catalog {
    categories: Vec<Category>,
    items: Vec<Item>,
}

impl Catalog {
    /// Parses a catalog from its JSON representation. Rows that fail domain
    /// conversion are logged and skipped rather than failing the load.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = serde_json::from_str(json)?;

        let categories = file
            .categories
            .into_iter()
            .filter_map(|row| match Category::try_from(row.clone()) {
                Ok(category) => Some(category),
                Err(e) => {
                    log::warn!("Skipping malformed category {:?}: {e}", row.id);
                    None
                }
            })
            .collect();

        let items: Vec<Item> = file
            .items
            .into_iter()
            .filter_map(|row| {
                let id = row.id;
                match Item::try_from(row) {
                    Ok(item) => Some(item),
                    Err(e) => {
                        log::warn!("Skipping malformed catalog item {id}: {e}");
                        None
                    }
                }
            })
            .collect();

        let mut seen = HashSet::new();
        for item in &items {
            if !item.slug.is_empty() && !seen.insert(item.slug.as_str()) {
                log::warn!("Duplicate catalog slug {:?}; lookups return the first match", item.slug);
            }
        }

        Ok(Self { categories, items })
    }

    /// Loads the catalog from a JSON file on disk.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// The demo catalog bundled with the crate.
    pub fn bundled() -> Result<Self, CatalogError> {
        Self::from_json_str(include_str!("../../data/catalog.json"))
    }

    /// All categories, file order preserved.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Looks up a category by its string id.
    pub fn category_by_id(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    /// All items, file order preserved.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Looks up an item by id.
    pub fn item_by_id(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|i| i.id == id)
    }

    /// Looks up an item by a string-typed id, e.g. a URL path segment.
    /// Junk input is a lookup miss, not an error.
    pub fn item_by_id_str(&self, id: &str) -> Option<&Item> {
        ItemId::parse(id).and_then(|id| self.item_by_id(id))
    }

    /// First item carrying the given slug. Slug uniqueness is not enforced
    /// by the catalog; duplicates are logged at load time.
    pub fn item_by_slug(&self, slug: &str) -> Option<&Item> {
        self.items.iter().find(|i| i.slug == slug)
    }

    /// Items in the given category; the `"all"` sentinel returns everything.
    /// An unknown category yields an empty list, not an error.
    pub fn items_by_category(&self, category_id: &str) -> Vec<Item> {
        if category_id == crate::domain::types::CategoryId::ALL {
            return self.items.to_vec();
        }
        self.items
            .iter()
            .filter(|i| i.category == category_id)
            .cloned()
            .collect()
    }

    /// Case-insensitive substring search over name, description, category
    /// and subcategory. An empty or whitespace-only query acts as no filter.
    pub fn search(&self, query: &str) -> Vec<Item> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return self.items.to_vec();
        }
        self.items
            .iter()
            .filter(|i| i.matches_lowercase(&needle))
            .cloned()
            .collect()
    }

    /// Resolves related item ids to records, excluding `current` even when
    /// it appears in the list.
    pub fn related_items(&self, current: ItemId, related_ids: &[ItemId]) -> Vec<Item> {
        related_ids
            .iter()
            .filter(|id| **id != current)
            .filter_map(|id| self.item_by_id(*id))
            .cloned()
            .collect()
    }

    /// Runs a composed browse query: base category/search selection, then
    /// conjunctive price/featured/fast-delivery filters, then sorting on the
    /// copied result.
    pub fn query(&self, query: &ItemQuery) -> Vec<Item> {
        let mut items = match query.category.as_deref() {
            Some(category) => self.items_by_category(category),
            None => self.items.to_vec(),
        };

        if let Some(search) = query.search.as_deref() {
            let needle = search.trim().to_lowercase();
            if !needle.is_empty() {
                items.retain(|i| i.matches_lowercase(&needle));
            }
        }
        if let Some(min) = query.min_price {
            items.retain(|i| i.price.get() >= min);
        }
        if let Some(max) = query.max_price {
            items.retain(|i| i.price.get() <= max);
        }
        if query.featured_only {
            items.retain(|i| i.featured);
        }
        if query.fast_delivery_only {
            items.retain(|i| i.fast_delivery());
        }

        if let Some(sort) = query.sort {
            sort_items(&mut items, sort);
        }

        items
    }
}

/// Sorts a detached list of items. Never touches the catalog store; callers
/// pass the copies the query layer hands out.
pub fn sort_items(items: &mut [Item], sort: SortKey) {
    match sort {
        SortKey::PriceAsc => items.sort_by(|a, b| a.price.get().total_cmp(&b.price.get())),
        SortKey::PriceDesc => items.sort_by(|a, b| b.price.get().total_cmp(&a.price.get())),
        SortKey::RatingDesc => {
            items.sort_by(|a, b| b.rating_or_zero().total_cmp(&a.rating_or_zero()))
        }
        SortKey::NameAsc => items.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase())),
    }
}
