//! Trait definitions for store persistence

use async_trait::async_trait;
use std::fmt::Debug;

use crate::relationships::StoreSnapshot;
use crate::storage::errors::StorageError;

/// Loads and saves the full state of one relationship store
#[async_trait]
pub trait StoreRepository: Send + Sync + 'static + Debug {
    /// Load the last saved snapshot, or `None` if nothing was saved yet
    async fn load(&self) -> std::result::Result<Option<StoreSnapshot>, StorageError>;

    /// Persist a snapshot, replacing whatever was saved before
    async fn save(&self, snapshot: &StoreSnapshot) -> std::result::Result<(), StorageError>;

    /// Remove any saved state
    async fn clear(&self) -> std::result::Result<(), StorageError>;
}
