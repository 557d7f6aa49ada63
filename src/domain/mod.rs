//! Domain entities and value objects for the storefront core.

pub mod cart;
pub mod category;
pub mod item;
pub mod order;
pub mod types;
