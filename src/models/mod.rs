//! Persistence and input row types with conversions into the domain layer.

pub mod catalog;
pub mod config;
pub mod slot;
