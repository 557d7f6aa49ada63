//! Persisted shopping cart over a single serialized slot.
//!
//! The cart is one JSON array of [`CartLine`] records stored under one slot
//! key. Every operation is read-modify-write over the whole slot and fails
//! soft: storage errors are logged, the in-memory result is still returned,
//! and a caller re-reading immediately afterwards may not observe the
//! mutation. That weak consistency is the accepted model for a single-tab,
//! non-critical cart.

use crate::domain::cart::CartLine;
use crate::domain::item::{Item, Variant};
use crate::domain::types::{ItemId, Quantity, VariantId};
use crate::repository::{SlotReader, SlotWriter};

/// Slot key the cart is persisted under by default.
pub const CART_SLOT_KEY: &str = "cart";

/// Cart store bound to a slot repository.
///
/// Constructed once per application session and handed to whatever renders
/// or mutates the cart; tests instantiate isolated stores over their own
/// repositories.
pub struct CartStore<R> {
    repo: R,
    key: String,
}

impl<R> CartStore<R>
where
    R: SlotReader + SlotWriter,
{
    /// Store over the default `"cart"` slot.
    pub fn new(repo: R) -> Self {
        Self::with_key(repo, CART_SLOT_KEY)
    }

    /// Store over a custom slot key, for isolated carts.
    pub fn with_key(repo: R, key: impl Into<String>) -> Self {
        Self {
            repo,
            key: key.into(),
        }
    }

    /// Current cart contents. An absent, unreadable or malformed slot is an
    /// empty cart, never an error.
    pub fn cart(&self) -> Vec<CartLine> {
        let raw = match self.repo.read_slot(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                log::error!("Failed to read cart slot {:?}: {e}", self.key);
                return Vec::new();
            }
        };
        match serde_json::from_str(&raw) {
            Ok(lines) => lines,
            Err(e) => {
                log::warn!("Discarding malformed cart payload in slot {:?}: {e}", self.key);
                Vec::new()
            }
        }
    }

    fn persist(&self, lines: &[CartLine]) {
        let payload = match serde_json::to_string(lines) {
            Ok(payload) => payload,
            Err(e) => {
                log::error!("Failed to serialize cart: {e}");
                return;
            }
        };
        if let Err(e) = self.repo.write_slot(&self.key, &payload) {
            log::error!("Failed to persist cart slot {:?}: {e}", self.key);
        }
    }

    /// Adds an item to the cart. A line with the same (item, variant)
    /// identity has its quantity incremented; the price and name snapshot
    /// from the first add are kept. A zero quantity is a no-op returning the
    /// cart unchanged.
    pub fn add(&self, item: &Item, quantity: u32, variant: Option<&Variant>) -> Vec<CartLine> {
        let mut lines = self.cart();
        let quantity = match Quantity::new(quantity) {
            Ok(q) => q,
            Err(e) => {
                log::warn!("Ignoring add of item {}: {e}", item.id);
                return lines;
            }
        };

        let variant_id = variant.map_or_else(VariantId::standard, |v| v.id.clone());
        match lines.iter_mut().find(|l| l.is_for(item.id, &variant_id)) {
            Some(line) => line.quantity = line.quantity.saturating_add(quantity),
            None => lines.push(CartLine::snapshot(item, quantity, variant)),
        }

        self.persist(&lines);
        lines
    }

    /// Sets the quantity of a line absolutely. Zero removes the line; a
    /// missing line is a no-op.
    pub fn set_quantity(
        &self,
        id: ItemId,
        variant_id: Option<&str>,
        quantity: u32,
    ) -> Vec<CartLine> {
        let mut lines = self.cart();
        let variant_id = VariantId::from_opt(variant_id);

        match Quantity::new(quantity) {
            Ok(quantity) => {
                let Some(line) = lines.iter_mut().find(|l| l.is_for(id, &variant_id)) else {
                    return lines;
                };
                line.quantity = quantity;
            }
            // Dropping to zero (or below, unrepresentable here) removes the
            // line rather than leaving an empty one.
            Err(_) => {
                let before = lines.len();
                lines.retain(|l| !l.is_for(id, &variant_id));
                if lines.len() == before {
                    return lines;
                }
            }
        }

        self.persist(&lines);
        lines
    }

    /// Removes the line matching the (item, variant) pair; absence is not an
    /// error.
    pub fn remove(&self, id: ItemId, variant_id: Option<&str>) -> Vec<CartLine> {
        let mut lines = self.cart();
        let variant_id = VariantId::from_opt(variant_id);
        let before = lines.len();
        lines.retain(|l| !l.is_for(id, &variant_id));
        if lines.len() != before {
            self.persist(&lines);
        }
        lines
    }

    /// Deletes the persisted cart entirely.
    pub fn clear(&self) -> Vec<CartLine> {
        if let Err(e) = self.repo.delete_slot(&self.key) {
            log::error!("Failed to clear cart slot {:?}: {e}", self.key);
        }
        Vec::new()
    }

    /// Sum of price times quantity over all lines. No delivery fee or tax
    /// is added at this layer.
    pub fn total(&self) -> f64 {
        self.cart().iter().map(CartLine::line_total).sum()
    }

    /// Sum of quantities over all lines (cart badge count, not line count).
    pub fn count(&self) -> u64 {
        self.cart()
            .iter()
            .map(|l| u64::from(l.quantity.get()))
            .sum()
    }
}
