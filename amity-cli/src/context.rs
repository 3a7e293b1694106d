use amity::config::{AmityConfig, ConfigBuilder, ConfigLoader};
use amity::prelude::*;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, warn};

pub struct AmityCliContext {
    pub friends: FriendList,
    pub repository: JsonFileRepository,
    pub config: AmityConfig,
}

impl AmityCliContext {
    /// Load configuration and the friend list stored at `store` (or the configured path).
    ///
    /// `min` / `max` override the configured bounds for a list that does not
    /// exist yet; an existing list keeps the bounds it was saved with.
    pub async fn new(
        store: Option<PathBuf>,
        min: Option<f64>,
        max: Option<f64>,
    ) -> amity::Result<Self> {
        let mut config = ConfigLoader::new().load_default_files().load_env().extract()?;

        let overridden = min.is_some() || max.is_some();
        if overridden {
            config.bounds.minimum = min.unwrap_or(config.bounds.minimum);
            config.bounds.maximum = max.unwrap_or(config.bounds.maximum);
        }

        let ctx = Self::with_config(config, store).await?;

        let bounds = ctx.friends.store().bounds().await;
        if overridden
            && (bounds.minimum() != ctx.config.bounds.minimum
                || bounds.maximum() != ctx.config.bounds.maximum)
        {
            warn!(
                minimum = bounds.minimum(),
                maximum = bounds.maximum(),
                "Existing friend list keeps its saved bounds"
            );
        }

        Ok(ctx)
    }

    pub async fn with_config(config: AmityConfig, store: Option<PathBuf>) -> amity::Result<Self> {
        let path = store.unwrap_or_else(|| config.store.path());
        let repository = JsonFileRepository::new(&path);
        let friends = FriendList::from_config(&config, Arc::new(OfflineResolver::new()))?;

        let loaded = friends
            .load_from(&repository, config.store.duplicate_policy)
            .await?;
        debug!(path = %path.display(), persons = loaded, "Opened friend list");

        Ok(Self {
            friends,
            repository,
            config,
        })
    }

    /// Context over the list at `path` with default settings
    pub async fn for_path(path: impl Into<PathBuf>) -> amity::Result<Self> {
        let config = ConfigBuilder::new().build()?;
        Self::with_config(config, Some(path.into())).await
    }

    pub async fn save(&self) -> amity::Result<()> {
        self.friends.save_to(&self.repository).await
    }
}
