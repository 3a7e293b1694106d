//! Thread-safe handle around a relationship store
//!
//! Every mutation holds the write lock for its whole duration, so readers
//! never see a store that is halfway through a rescale. Queries take the read
//! lock and return owned copies.

use super::association::Association;
use super::bounds::Bounds;
use super::metrics::StoreMetrics;
use super::person::Person;
use super::store::{RelationshipStore, StoreSnapshot};
use crate::Result;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

/// Cloneable, lock-guarded [`RelationshipStore`] for one owner
#[derive(Clone, Debug)]
pub struct SharedStore {
    inner: Arc<RwLock<RelationshipStore>>,
    metrics: StoreMetrics,
}

impl SharedStore {
    pub fn new(store: RelationshipStore) -> Self {
        Self {
            inner: Arc::new(RwLock::new(store)),
            metrics: StoreMetrics::new(),
        }
    }

    /// Empty store with the given bounds and the default duplicate policy
    pub fn with_bounds(bounds: Bounds) -> Self {
        Self::new(RelationshipStore::new(bounds))
    }

    pub fn metrics(&self) -> &StoreMetrics {
        &self.metrics
    }

    pub async fn bounds(&self) -> Bounds {
        self.inner.read().await.bounds()
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.is_empty()
    }

    /// Run `f` against the store under the read lock
    pub async fn read<R>(&self, f: impl FnOnce(&RelationshipStore) -> R) -> R {
        let store = self.inner.read().await;
        f(&store)
    }

    /// Run `f` against the store under the write lock
    pub async fn write<R>(&self, f: impl FnOnce(&mut RelationshipStore) -> R) -> R {
        let mut store = self.inner.write().await;
        f(&mut store)
    }

    /// Swap in a different store, returning the previous one
    pub async fn replace(&self, store: RelationshipStore) -> RelationshipStore {
        let mut guard = self.inner.write().await;
        std::mem::replace(&mut *guard, store)
    }

    pub async fn add(&self, person: Person) -> Result<()> {
        let result = self.inner.write().await.add(person);
        match &result {
            Ok(()) => self.metrics.record_introduction(false),
            Err(_) => self.metrics.record_rejected(),
        }
        result
    }

    pub async fn introduce_safe(&self, person: Person) -> Result<Option<f64>> {
        let result = self.inner.write().await.introduce_safe(person);
        self.track(&result);
        result
    }

    pub async fn set_value(&self, id: Uuid, value: f64) -> Result<Option<f64>> {
        let result = self.inner.write().await.set_value(id, value);
        self.track(&result);
        result
    }

    /// See [`RelationshipStore::upsert_value`]
    pub async fn upsert_value(&self, id: Uuid, name: Option<&str>, value: f64) -> Result<Option<f64>> {
        let result = self.inner.write().await.upsert_value(id, name, value);
        self.track(&result);
        result
    }

    pub async fn set_association(&self, id: Uuid, association: Association) -> Result<()> {
        self.inner.write().await.set_association(id, association)
    }

    pub async fn remove(&self, id: Uuid) -> Option<Person> {
        self.inner.write().await.remove(id)
    }

    pub async fn multiply_all(&self, multiplier: f64) -> Result<()> {
        self.inner.write().await.multiply_all(multiplier)?;
        self.metrics.record_bulk_multiply();
        Ok(())
    }

    pub async fn halve_all(&self) -> Result<()> {
        self.multiply_all(0.5).await
    }

    /// See [`RelationshipStore::multiply_in_range`]; bounds are not enforced
    pub async fn multiply_in_range(&self, multiplier: f64, lower: f64, upper: f64) -> Result<usize> {
        let touched = self
            .inner
            .write()
            .await
            .multiply_in_range(multiplier, lower, upper)?;
        self.metrics.record_bulk_multiply();
        Ok(touched)
    }

    pub async fn verify_invariant(&self) -> Result<()> {
        self.inner.read().await.verify_invariant()
    }

    pub async fn get(&self, id: Uuid) -> Option<Person> {
        self.inner.read().await.get(id).cloned()
    }

    pub async fn find_by_name(&self, name: &str) -> Option<Person> {
        self.inner.read().await.find_by_name(name).cloned()
    }

    pub async fn query<F>(&self, predicate: F) -> Vec<Person>
    where
        F: Fn(&Person) -> bool,
    {
        self.inner.read().await.query(predicate)
    }

    pub async fn by_exact_value(&self, value: f64) -> Vec<Person> {
        self.inner.read().await.by_exact_value(value)
    }

    pub async fn by_association(&self, association: Association) -> Vec<Person> {
        self.inner.read().await.by_association(association)
    }

    pub async fn by_range(&self, lower: f64, upper: f64) -> Vec<Person> {
        self.inner.read().await.by_range(lower, upper)
    }

    pub async fn snapshot(&self) -> StoreSnapshot {
        self.inner.read().await.snapshot()
    }

    fn track<T>(&self, result: &Result<Option<T>>) {
        match result {
            Ok(rescale) => self.metrics.record_introduction(rescale.is_some()),
            Err(_) => self.metrics.record_rejected(),
        }
    }
}

impl Default for SharedStore {
    fn default() -> Self {
        Self::new(RelationshipStore::default())
    }
}
