//! Cart and catalog core for a stationery/printing storefront.
//!
//! The crate exposes the static catalog store with its query layer, the
//! persisted shopping cart, checkout forms and the order submission service.
//! All public operations fail soft: lookup misses return empty results,
//! storage failures degrade to in-memory effects and submission failures are
//! structured outcomes, never panics across the boundary.

pub mod cart;
pub mod catalog;
pub mod db;
pub mod domain;
mod error_conversions;
pub mod forms;
pub mod models;
pub mod repository;
pub mod schema;
pub mod services;
