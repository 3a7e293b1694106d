//! # Amity
//!
//! Bounded friendliness tracking. Every peer an owner knows about carries a
//! value inside a fixed range; introducing a value beyond the range shrinks the
//! whole collection proportionally instead of clamping the newcomer, so the
//! ordering and ratios between peers survive.
//!
//! ## Quick Start
//!
//! ```rust
//! use amity::prelude::*;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let friends = FriendList::new(SharedStore::default(), Arc::new(OfflineResolver::new()));
//!
//!     friends.add_friend_by_name("Steve").await?;
//!     friends.set_value_by_name("Alex", -4.0).await?;
//!
//!     // Alex was pinned to the minimum and Steve halved along with everyone else
//!     assert_eq!(friends.get_value_by_name("Alex").await?, -2.0);
//!     assert_eq!(friends.get_value_by_name("Steve").await?, 0.5);
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! - **relationships**: bounds, persons, the rescaling store and its shared handle
//! - **identity**: name to id resolution
//! - **storage**: snapshot repositories (JSON file, in-memory)
//! - **friends**: the id / name keyed facade over all of the above

pub mod config;
pub mod friends;
pub mod identity;
pub mod logging;
pub mod relationships;
pub mod storage;

use uuid::Uuid;

/// The prelude re-exports commonly used types for convenience
pub mod prelude {
    pub use crate::init;

    pub use crate::config::{AmityConfig, ConfigBuilder, ConfigLoader, LogFormat, LogLevel};

    pub use crate::friends::{FriendList, FriendLists};

    pub use crate::identity::{IdentityResolver, OfflineResolver, StaticResolver};

    pub use crate::relationships::{
        Association, Bounds, DuplicatePolicy, Person, RelationshipStore, SharedStore,
        StoreSnapshot,
    };

    pub use crate::storage::{InMemoryRepository, JsonFileRepository, StoreRepository};

    pub use crate::{AmityError, Result};
}

/// Current library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Error type for Amity operations
#[derive(Debug, thiserror::Error)]
pub enum AmityError {
    /// Bounds that cannot hold a neutral value or are otherwise malformed
    #[error("Invalid bounds [{minimum}, {maximum}]: {reason}")]
    InvalidBounds {
        minimum: f64,
        maximum: f64,
        reason: String,
    },

    /// An insert reused an id already present in the store
    #[error("Person {0} is already in the store")]
    DuplicateIdentity(Uuid),

    /// A stored value ended up outside the bounds
    #[error("Invariant violation: {0}")]
    InvariantViolation(String),

    /// A name the identity resolver does not know
    #[error("Unknown identity '{0}'")]
    UnknownIdentity(String),

    /// Plain insert of a value outside the bounds
    #[error("Value {value} is outside the bounds [{minimum}, {maximum}]")]
    ValueOutOfBounds { value: f64, minimum: f64, maximum: f64 },

    /// NaN or infinite value
    #[error("Invalid value {0}: values must be finite")]
    InvalidValue(f64),

    #[error("No person with id {0}")]
    PersonNotFound(Uuid),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Logging error
    #[error("Logging error: {0}")]
    Logging(#[from] crate::logging::LogError),

    /// Error during storage operations
    #[error("Storage error: {0}")]
    Storage(String),
}

impl From<crate::config::ConfigError> for AmityError {
    fn from(err: crate::config::ConfigError) -> Self {
        AmityError::Configuration(err.to_string())
    }
}

/// Result type for Amity operations
pub type Result<T> = std::result::Result<T, AmityError>;

/// Initialize Amity with the provided configuration
///
/// Sets up logging and returns an empty store with the configured bounds and
/// duplicate policy.
///
/// # Examples
///
/// ```rust
/// use amity::prelude::*;
///
/// # fn example() -> Result<()> {
/// let config = ConfigBuilder::testing().with_bounds(-10.0, 10.0).build()?;
/// let store = init(&config)?;
/// # Ok(())
/// # }
/// ```
pub fn init(config: &config::AmityConfig) -> Result<relationships::SharedStore> {
    // Ignore errors if tracing is already initialized
    let _ = logging::init(&config.logging);

    let store = relationships::RelationshipStore::with_policy(
        config.bounds()?,
        config.store.duplicate_policy,
    );
    tracing::debug!(
        minimum = store.bounds().minimum(),
        maximum = store.bounds().maximum(),
        "Initialized relationship store"
    );
    Ok(relationships::SharedStore::new(store))
}
