//! Identity resolution
//!
//! The store is keyed by stable ids. Turning a display name into an id is the
//! job of an [`IdentityResolver`]; name-based operations resolve first and then
//! use the id-keyed core.

use crate::{AmityError, Result};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::RwLock;
use uuid::Uuid;

/// Maps display names to stable ids
#[async_trait]
pub trait IdentityResolver: Send + Sync + std::fmt::Debug {
    /// Resolve `name`, failing with [`AmityError::UnknownIdentity`] if no such peer exists
    async fn resolve(&self, name: &str) -> Result<Uuid>;
}

/// Case-insensitive in-memory name table
#[derive(Debug, Default)]
pub struct StaticResolver {
    names: RwLock<HashMap<String, Uuid>>,
}

impl StaticResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `name` under `id`, returning the id it previously mapped to
    pub fn register(&self, name: &str, id: Uuid) -> Option<Uuid> {
        match self.names.write() {
            Ok(mut names) => names.insert(name.to_lowercase(), id),
            Err(poisoned) => poisoned.into_inner().insert(name.to_lowercase(), id),
        }
    }

    /// Builder-style [`StaticResolver::register`]
    pub fn with(self, name: &str, id: Uuid) -> Self {
        self.register(name, id);
        self
    }

    fn lookup(&self, name: &str) -> Option<Uuid> {
        let key = name.to_lowercase();
        match self.names.read() {
            Ok(names) => names.get(&key).copied(),
            Err(poisoned) => poisoned.into_inner().get(&key).copied(),
        }
    }
}

#[async_trait]
impl IdentityResolver for StaticResolver {
    async fn resolve(&self, name: &str) -> Result<Uuid> {
        self.lookup(name)
            .ok_or_else(|| AmityError::UnknownIdentity(name.to_string()))
    }
}

/// Derives offline-mode ids from names without any lookup.
///
/// Every well-formed name resolves, case-insensitively, to the same UUID v5.
#[derive(Debug, Clone, Copy, Default)]
pub struct OfflineResolver;

/// Longest name the offline resolver accepts
pub const MAX_NAME_LENGTH: usize = 16;

impl OfflineResolver {
    pub fn new() -> Self {
        Self
    }

    /// The id a name maps to, if the name is well formed
    pub fn id_for(name: &str) -> Option<Uuid> {
        let name = name.trim();
        let well_formed = !name.is_empty()
            && name.len() <= MAX_NAME_LENGTH
            && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_');
        if !well_formed {
            return None;
        }

        let key = format!("OfflinePlayer:{}", name.to_lowercase());
        Some(Uuid::new_v5(&Uuid::NAMESPACE_OID, key.as_bytes()))
    }
}

#[async_trait]
impl IdentityResolver for OfflineResolver {
    async fn resolve(&self, name: &str) -> Result<Uuid> {
        Self::id_for(name).ok_or_else(|| AmityError::UnknownIdentity(name.to_string()))
    }
}
