use chrono::NaiveDateTime;
use diesel::prelude::*;

/// Diesel model representing one row of the `slots` table.
///
/// A slot is a single named serialized value, mirroring the one-key-per-blob
/// storage model of the original client (the cart lives in one slot, the
/// order history in another).
#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::slots, primary_key(key))]
pub struct Slot {
    pub key: String,
    pub value: String,
    pub updated_at: NaiveDateTime,
}

/// Insertable/patchable form of [`Slot`].
#[derive(Debug, Insertable, AsChangeset)]
#[diesel(table_name = crate::schema::slots)]
pub struct NewSlot<'a> {
    pub key: &'a str,
    pub value: &'a str,
    pub updated_at: NaiveDateTime,
}
