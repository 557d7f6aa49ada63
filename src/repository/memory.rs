use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use crate::repository::errors::RepositoryResult;
use crate::repository::{SlotReader, SlotWriter};

/// Slot store held entirely in memory.
///
/// Used by unit tests and by callers that want a cart without durable
/// storage; clones share the same underlying map.
#[derive(Clone, Default)]
pub struct MemoryRepository {
    slots: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, String>> {
        self.slots.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl SlotReader for MemoryRepository {
    fn read_slot(&self, key: &str) -> RepositoryResult<Option<String>> {
        Ok(self.lock().get(key).cloned())
    }
}

impl SlotWriter for MemoryRepository {
    fn write_slot(&self, key: &str, value: &str) -> RepositoryResult<usize> {
        self.lock().insert(key.to_string(), value.to_string());
        Ok(1)
    }

    fn delete_slot(&self, key: &str) -> RepositoryResult<usize> {
        Ok(usize::from(self.lock().remove(key).is_some()))
    }
}
