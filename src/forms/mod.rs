//! Form payloads with validation at the UI boundary.

pub mod checkout;
