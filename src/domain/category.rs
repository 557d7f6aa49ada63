use serde::{Deserialize, Serialize};

use crate::domain::types::CategoryId;

/// Catalog category record.
///
/// Loaded once from the catalog file and immutable thereafter. The `count`
/// field is informational display data and is not enforced against the
/// actual number of items in the category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    pub description: String,
    /// Symbolic reference to a presentation glyph, resolved by the caller.
    pub icon: String,
    pub count: u32,
}
