//! Whole-collection snapshot repository

use crate::domain::Record;
use crate::error::Result;
use crate::infrastructure::{snapshot, KeyValueStore};
use std::marker::PhantomData;

/// List/get/insert/update/remove over one record collection.
///
/// `update` and `remove` on an unknown id leave the collection untouched
/// and report `false` instead of failing.
pub trait Repository<T: Record> {
    /// All records in stored order; empty if nothing was ever stored
    fn list(&self) -> Result<Vec<T>>;

    /// First record with the given id
    fn get(&self, id: &str) -> Result<Option<T>> {
        Ok(self.list()?.into_iter().find(|record| record.id() == id))
    }

    /// Append a record. Ids are not checked for uniqueness.
    fn insert(&self, record: T) -> Result<()>;

    /// Replace the record with the same id; returns whether one was found
    fn update(&self, record: T) -> Result<bool>;

    /// Drop every record with the given id; returns whether one was found
    fn remove(&self, id: &str) -> Result<bool>;
}

/// Repository that reads and rewrites the full collection on every call.
///
/// Each mutation is a read-modify-write of the whole snapshot with no locking.
#[derive(Debug, Clone)]
pub struct SnapshotRepository<T, S> {
    store: S,
    _record: PhantomData<fn() -> T>,
}

impl<T: Record, S: KeyValueStore> SnapshotRepository<T, S> {
    pub fn new(store: S) -> Self {
        SnapshotRepository {
            store,
            _record: PhantomData,
        }
    }

    /// Check whether the collection key exists, even if it holds an empty list
    pub fn is_stored(&self) -> Result<bool> {
        self.store.contains(T::STORAGE_KEY)
    }

    /// Replace the whole collection
    pub fn save_all(&self, records: &[T]) -> Result<()> {
        snapshot::save(&self.store, T::STORAGE_KEY, &records)
    }
}

impl<T: Record, S: KeyValueStore> Repository<T> for SnapshotRepository<T, S> {
    fn list(&self) -> Result<Vec<T>> {
        Ok(snapshot::load(&self.store, T::STORAGE_KEY)?.unwrap_or_default())
    }

    fn insert(&self, record: T) -> Result<()> {
        let mut records = self.list()?;
        records.push(record);
        self.save_all(&records)
    }

    fn update(&self, record: T) -> Result<bool> {
        let mut records = self.list()?;
        let Some(slot) = records.iter_mut().find(|r| r.id() == record.id()) else {
            log::warn!("update of unknown {} '{}' ignored", T::KIND, record.id());
            return Ok(false);
        };
        *slot = record;
        self.save_all(&records)?;
        Ok(true)
    }

    fn remove(&self, id: &str) -> Result<bool> {
        let mut records = self.list()?;
        let before = records.len();
        records.retain(|r| r.id() != id);
        let removed = records.len() != before;
        if !removed {
            log::warn!("remove of unknown {} '{}' ignored", T::KIND, id);
        }
        self.save_all(&records)?;
        Ok(removed)
    }
}
