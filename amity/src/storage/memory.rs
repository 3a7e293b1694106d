//! In-memory repository for tests and embedded hosts

use crate::relationships::StoreSnapshot;
use crate::storage::errors::StorageError;
use crate::storage::traits::StoreRepository;
use async_trait::async_trait;
use std::sync::Mutex;

#[derive(Debug, Default)]
pub struct InMemoryRepository {
    snapshot: Mutex<Option<StoreSnapshot>>,
}

impl InMemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Option<StoreSnapshot>>, StorageError> {
        self.snapshot
            .lock()
            .map_err(|e| StorageError::Other(format!("Repository lock poisoned: {}", e)))
    }
}

#[async_trait]
impl StoreRepository for InMemoryRepository {
    async fn load(&self) -> Result<Option<StoreSnapshot>, StorageError> {
        Ok(self.lock()?.clone())
    }

    async fn save(&self, snapshot: &StoreSnapshot) -> Result<(), StorageError> {
        *self.lock()? = Some(snapshot.clone());
        Ok(())
    }

    async fn clear(&self) -> Result<(), StorageError> {
        *self.lock()? = None;
        Ok(())
    }
}
