use crate::db::{DbConnection, DbPool};
use crate::repository::errors::RepositoryResult;

pub mod errors;
pub mod memory;
pub mod slot;

/// Repository implementation backed by Diesel and SQLite.
///
/// The underlying `r2d2::Pool` is cheap to clone, allowing the repository to
/// be passed around freely between stores and services.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool, // r2d2::Pool is cheap to clone
}

impl DieselRepository {
    /// Create a new repository from an established database pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Get a pooled database connection.
    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }
}

/// Read access to named serialized slots.
pub trait SlotReader {
    /// Returns the raw serialized value of a slot, `None` when the key has
    /// never been written.
    fn read_slot(&self, key: &str) -> RepositoryResult<Option<String>>;
}

/// Write access to named serialized slots. A slot is always replaced as a
/// whole; there is no partial update, matching the last-write-wins model of
/// the storage this emulates.
pub trait SlotWriter {
    /// Inserts or replaces the value of a slot.
    fn write_slot(&self, key: &str, value: &str) -> RepositoryResult<usize>;
    /// Deletes a slot entirely; absent keys are not an error.
    fn delete_slot(&self, key: &str) -> RepositoryResult<usize>;
}
