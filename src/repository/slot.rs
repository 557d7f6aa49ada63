use chrono::Utc;
use diesel::prelude::*;

use crate::models::slot::{NewSlot, Slot as DbSlot};
use crate::repository::errors::RepositoryResult;
use crate::repository::{DieselRepository, SlotReader, SlotWriter};

impl SlotReader for DieselRepository {
    fn read_slot(&self, key: &str) -> RepositoryResult<Option<String>> {
        use crate::schema::slots;

        let mut conn = self.conn()?;

        let slot = slots::table
            .filter(slots::key.eq(key))
            .first::<DbSlot>(&mut conn)
            .optional()?;

        Ok(slot.map(|s| s.value))
    }
}

impl SlotWriter for DieselRepository {
    fn write_slot(&self, key: &str, value: &str) -> RepositoryResult<usize> {
        use crate::schema::slots;

        let mut conn = self.conn()?;
        let new_slot = NewSlot {
            key,
            value,
            updated_at: Utc::now().naive_utc(),
        };

        let affected = diesel::insert_into(slots::table)
            .values(&new_slot)
            .on_conflict(slots::key)
            .do_update()
            .set((
                slots::value.eq(value),
                slots::updated_at.eq(new_slot.updated_at),
            ))
            .execute(&mut conn)?;

        Ok(affected)
    }

    fn delete_slot(&self, key: &str) -> RepositoryResult<usize> {
        use crate::schema::slots;

        let mut conn = self.conn()?;

        let affected =
            diesel::delete(slots::table.filter(slots::key.eq(key))).execute(&mut conn)?;

        Ok(affected)
    }
}
