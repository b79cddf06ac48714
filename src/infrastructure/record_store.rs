//! The four storefront collections over one key-value store

use crate::domain::{seed, Category, Channel, Plan, Record, User};
use crate::error::Result;
use crate::infrastructure::{KeyValueStore, SnapshotRepository};
use chrono::Utc;

#[derive(Debug, Clone)]
pub struct RecordStore<S> {
    store: S,
}

impl<S: KeyValueStore + Clone> RecordStore<S> {
    pub fn new(store: S) -> Self {
        RecordStore { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn users(&self) -> SnapshotRepository<User, S> {
        SnapshotRepository::new(self.store.clone())
    }

    pub fn plans(&self) -> SnapshotRepository<Plan, S> {
        SnapshotRepository::new(self.store.clone())
    }

    pub fn channels(&self) -> SnapshotRepository<Channel, S> {
        SnapshotRepository::new(self.store.clone())
    }

    pub fn categories(&self) -> SnapshotRepository<Category, S> {
        SnapshotRepository::new(self.store.clone())
    }

    /// Write the seed data for every collection that has never been stored.
    ///
    /// A collection that exists but is empty counts as stored and is left alone.
    pub fn initialize(&self) -> Result<()> {
        self.seed_if_absent(&self.users(), || seed::users(Utc::now()))?;
        self.seed_if_absent(&self.plans(), seed::plans)?;
        self.seed_if_absent(&self.channels(), seed::channels)?;
        self.seed_if_absent(&self.categories(), seed::categories)?;
        Ok(())
    }

    fn seed_if_absent<T, F>(&self, repo: &SnapshotRepository<T, S>, records: F) -> Result<bool>
    where
        T: Record,
        F: FnOnce() -> Vec<T>,
    {
        if repo.is_stored()? {
            return Ok(false);
        }
        let records = records();
        repo.save_all(&records)?;
        log::info!("seeded {} with {} records", T::STORAGE_KEY, records.len());
        Ok(true)
    }
}
