use serde::{Deserialize, Serialize};

use crate::domain::item::{Item, Variant};
use crate::domain::types::{ItemId, Price, Quantity, VariantId};

/// One (item, variant) entry in the shopping cart.
///
/// Everything except `id`, `variant_id` and `quantity` is a snapshot of the
/// catalog at the time of the first add. Snapshots are never re-synced
/// against the catalog, and the serde defaults let lines persisted by older
/// versions (or with unknown extra fields) load instead of being rejected.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartLine {
    pub id: ItemId,
    #[serde(default)]
    pub variant_id: VariantId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub price: Price,
    #[serde(default)]
    pub variant: Option<Variant>,
    #[serde(default = "Quantity::one")]
    pub quantity: Quantity,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub delivery_time: Option<String>,
    #[serde(default)]
    pub currency: Option<String>,
}

impl CartLine {
    /// Snapshot constructor. Price and variant metadata come from `variant`
    /// when one is chosen, otherwise from the item itself.
    pub fn snapshot(item: &Item, quantity: Quantity, variant: Option<&Variant>) -> Self {
        Self {
            id: item.id,
            variant_id: variant.map_or_else(VariantId::standard, |v| v.id.clone()),
            name: item.name.clone(),
            price: variant.map_or(item.price, |v| v.price),
            variant: variant.cloned(),
            quantity,
            category: Some(item.category.as_str().to_string()),
            kind: item.kind.clone(),
            delivery_time: item.delivery_time.clone(),
            currency: Some(item.currency.clone()),
        }
    }

    /// Whether this line is identified by the given (item, variant) pair.
    pub fn is_for(&self, id: ItemId, variant_id: &VariantId) -> bool {
        self.id == id && &self.variant_id == variant_id
    }

    /// Price times quantity for this line.
    pub fn line_total(&self) -> f64 {
        self.price.get() * f64::from(self.quantity.get())
    }
}
