//! JSON file repository

use crate::relationships::StoreSnapshot;
use crate::storage::errors::StorageError;
use crate::storage::traits::StoreRepository;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Keeps a store snapshot as pretty-printed JSON in a single file.
///
/// Writes go to a sibling temporary file that is renamed over the target, so
/// a crash mid-write never leaves a truncated snapshot behind.
#[derive(Debug, Clone)]
pub struct JsonFileRepository {
    path: PathBuf,
}

impl JsonFileRepository {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

#[async_trait]
impl StoreRepository for JsonFileRepository {
    async fn load(&self) -> Result<Option<StoreSnapshot>, StorageError> {
        if !tokio::fs::try_exists(&self.path).await? {
            debug!("No store file at {}", self.path.display());
            return Ok(None);
        }

        let contents = tokio::fs::read_to_string(&self.path).await?;
        let snapshot: StoreSnapshot = serde_json::from_str(&contents)?;
        debug!(
            "Loaded {} persons from {}",
            snapshot.persons.len(),
            self.path.display()
        );
        Ok(Some(snapshot))
    }

    async fn save(&self, snapshot: &StoreSnapshot) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            tokio::fs::create_dir_all(parent).await?;
        }

        let json = serde_json::to_string_pretty(snapshot)?;
        let temp = self.temp_path();
        tokio::fs::write(&temp, json).await?;
        tokio::fs::rename(&temp, &self.path).await?;

        debug!(
            "Saved {} persons to {}",
            snapshot.persons.len(),
            self.path.display()
        );
        Ok(())
    }

    async fn clear(&self) -> Result<(), StorageError> {
        if tokio::fs::try_exists(&self.path).await? {
            tokio::fs::remove_file(&self.path).await?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::relationships::{Association, Bounds, PersonRecord};
    use tempfile::tempdir;
    use uuid::Uuid;

    fn sample() -> StoreSnapshot {
        StoreSnapshot {
            bounds: Bounds::new(-4.0, 4.0).unwrap(),
            persons: vec![PersonRecord {
                id: Uuid::new_v4(),
                name: "Steve".to_string(),
                value: 1.5,
                association: Association::Ally,
            }],
        }
    }

    #[tokio::test]
    async fn test_missing_file_loads_as_none() {
        let dir = tempdir().unwrap();
        let repo = JsonFileRepository::new(dir.path().join("absent.json"));
        assert!(repo.load().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_save_creates_parent_dirs_and_reloads() {
        let dir = tempdir().unwrap();
        let repo = JsonFileRepository::new(dir.path().join("nested/deeper/friends.json"));

        repo.save(&sample()).await.unwrap();
        assert!(repo.path().exists());
        assert!(!repo.temp_path().exists());

        let loaded = repo.load().await.unwrap().unwrap();
        assert_eq!(loaded.bounds, Bounds::new(-4.0, 4.0).unwrap());
        assert_eq!(loaded.persons[0].name, "Steve");

        repo.clear().await.unwrap();
        assert!(repo.load().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_invalid_bounds_in_file_fail_to_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(
            &path,
            r#"{"bounds": {"minimum": 1.0, "maximum": -1.0}, "persons": []}"#,
        )
        .unwrap();

        let repo = JsonFileRepository::new(&path);
        assert!(matches!(
            repo.load().await,
            Err(StorageError::Serialization(_))
        ));
    }
}
