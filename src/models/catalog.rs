//! Raw serde rows for the static catalog file.
//!
//! The catalog ships as loosely-typed JSON with camelCase keys and many
//! optional fields. These row types accept that shape as-is; conversion into
//! the strongly-typed domain records happens through `TryFrom`, and rows that
//! fail conversion are skipped by the loader rather than failing the whole
//! catalog.

use serde::Deserialize;

use crate::domain::category::Category;
use crate::domain::item::{Item, Variant};
use crate::domain::types::{CategoryId, ItemId, Price, TypeConstraintError, VariantId};

/// Top-level shape of the catalog file.
#[derive(Debug, Deserialize)]
pub struct CatalogFile {
    #[serde(default)]
    pub categories: Vec<CategoryRow>,
    /// The original data file called this list `productsServices`.
    #[serde(default, alias = "productsServices")]
    pub items: Vec<ItemRow>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CategoryRow {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub count: u32,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariantRow {
    pub id: String,
    pub name: String,
    pub price: f64,
    #[serde(default)]
    pub includes: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemRow {
    pub id: i32,
    #[serde(default)]
    pub slug: String,
    pub category: String,
    #[serde(default)]
    pub subcategory: Option<String>,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub long_description: Option<String>,
    pub price: f64,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub unit: Option<String>,
    #[serde(default)]
    pub variants: Vec<VariantRow>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub popular: bool,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub reviews: Option<u32>,
    #[serde(default)]
    pub delivery_time: Option<String>,
    #[serde(default)]
    pub related_services: Vec<i32>,
}

impl TryFrom<CategoryRow> for Category {
    type Error = TypeConstraintError;

    fn try_from(row: CategoryRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: CategoryId::new(row.id)?,
            name: row.name,
            description: row.description,
            icon: row.icon,
            count: row.count,
        })
    }
}

impl TryFrom<VariantRow> for Variant {
    type Error = TypeConstraintError;

    fn try_from(row: VariantRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: VariantId::new(row.id)?,
            name: row.name,
            price: Price::new(row.price)?,
            includes: row.includes,
        })
    }
}

impl TryFrom<ItemRow> for Item {
    type Error = TypeConstraintError;

    fn try_from(row: ItemRow) -> Result<Self, Self::Error> {
        let variants = row
            .variants
            .into_iter()
            .map(Variant::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        // Related ids referencing nothing are dropped silently; the lookup
        // excludes the current item at query time, not here.
        let related = row
            .related_services
            .into_iter()
            .filter_map(|id| ItemId::new(id).ok())
            .collect();

        Ok(Self {
            id: ItemId::new(row.id)?,
            slug: row.slug,
            category: CategoryId::new(row.category)?,
            subcategory: row.subcategory,
            kind: row.kind,
            name: row.name,
            description: row.description,
            long_description: row.long_description,
            price: Price::new(row.price)?,
            currency: row.currency.unwrap_or_else(|| "RWF".to_string()),
            unit: row.unit,
            variants,
            featured: row.featured,
            popular: row.popular,
            rating: row.rating,
            reviews: row.reviews,
            delivery_time: row.delivery_time,
            related,
        })
    }
}
