use serde::{Deserialize, Serialize};

use crate::domain::types::{CategoryId, ItemId, Price, VariantId};

/// A named priced sub-option of an item (e.g. a package size).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Variant {
    pub id: VariantId,
    pub name: String,
    pub price: Price,
    #[serde(default)]
    pub includes: Vec<String>,
}

/// A catalog item: a product or a service offered by the store.
///
/// Loaded once from the catalog file and immutable thereafter. Display-only
/// fields (`rating`, `reviews`, `delivery_time`) stay optional with no
/// defaults beyond absence.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Item {
    pub id: ItemId,
    /// URL-safe display identifier; not guaranteed unique across the catalog.
    pub slug: String,
    pub category: CategoryId,
    pub subcategory: Option<String>,
    /// `product` or `service`; free text carried through to cart snapshots.
    pub kind: Option<String>,
    pub name: String,
    pub description: String,
    pub long_description: Option<String>,
    pub price: Price,
    pub currency: String,
    /// Pricing unit suffix such as `page`; absent means no suffix.
    pub unit: Option<String>,
    pub variants: Vec<Variant>,
    pub featured: bool,
    pub popular: bool,
    pub rating: Option<f64>,
    pub reviews: Option<u32>,
    /// Free-text delivery estimate, e.g. `Same Day` or `24 hours`.
    pub delivery_time: Option<String>,
    pub related: Vec<ItemId>,
}

impl Item {
    /// Substring heuristic over the free-text delivery estimate. An item
    /// counts as fast when the text mentions `Same` or `24`. This is a known
    /// approximation carried over from the catalog data contract, not a
    /// structured field.
    pub fn fast_delivery(&self) -> bool {
        self.delivery_time
            .as_deref()
            .is_some_and(|d| d.contains("Same") || d.contains("24"))
    }

    /// Rating used for sorting; missing ratings sort as zero.
    pub fn rating_or_zero(&self) -> f64 {
        self.rating.unwrap_or(0.0)
    }

    /// Looks up a variant by id.
    pub fn variant(&self, id: &VariantId) -> Option<&Variant> {
        self.variants.iter().find(|v| &v.id == id)
    }

    /// Case-insensitive substring match against name, description, category
    /// and subcategory. `needle` must already be lowercased.
    pub(crate) fn matches_lowercase(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
            || self.category.as_str().to_lowercase().contains(needle)
            || self
                .subcategory
                .as_deref()
                .is_some_and(|s| s.to_lowercase().contains(needle))
    }
}
