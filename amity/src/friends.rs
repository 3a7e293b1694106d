//! Friend list facade
//!
//! [`FriendList`] is the everyday API: mark peers as friends or enemies, look
//! up how someone is regarded, and persist the list. Every operation exists
//! keyed by id and, through the configured [`IdentityResolver`], by name.

use crate::identity::IdentityResolver;
use crate::relationships::{
    Association, DuplicatePolicy, NEUTRAL_VALUE, Person, RelationshipStore, SharedStore,
    StoreSnapshot,
};
use crate::storage::StoreRepository;
use crate::Result;
use std::sync::Arc;
use tracing::{debug, info};
use uuid::Uuid;

/// One owner's friend list
#[derive(Clone, Debug)]
pub struct FriendList {
    store: SharedStore,
    resolver: Arc<dyn IdentityResolver>,
}

impl FriendList {
    pub fn new(store: SharedStore, resolver: Arc<dyn IdentityResolver>) -> Self {
        Self { store, resolver }
    }

    /// Friend list over a fresh store built from `config`
    pub fn from_config(
        config: &crate::config::AmityConfig,
        resolver: Arc<dyn IdentityResolver>,
    ) -> Result<Self> {
        let store = RelationshipStore::with_policy(config.bounds()?, config.store.duplicate_policy);
        Ok(Self::new(SharedStore::new(store), resolver))
    }

    pub fn store(&self) -> &SharedStore {
        &self.store
    }

    pub fn resolver(&self) -> &Arc<dyn IdentityResolver> {
        &self.resolver
    }

    /// Mark a peer as a friend (value 1)
    pub async fn add_friend(&self, id: Uuid) -> Result<Option<f64>> {
        self.set_value(id, Association::Ally.value()).await
    }

    pub async fn add_friend_by_name(&self, name: &str) -> Result<Option<f64>> {
        self.set_value_by_name(name, Association::Ally.value()).await
    }

    /// Mark a peer as an enemy (value -1)
    pub async fn add_enemy(&self, id: Uuid) -> Result<Option<f64>> {
        self.set_value(id, Association::Enemy.value()).await
    }

    pub async fn add_enemy_by_name(&self, name: &str) -> Result<Option<f64>> {
        self.set_value_by_name(name, Association::Enemy.value()).await
    }

    /// Mark a peer as neutral (value 0)
    pub async fn set_neutral(&self, id: Uuid) -> Result<Option<f64>> {
        self.set_value(id, NEUTRAL_VALUE).await
    }

    pub async fn set_neutral_by_name(&self, name: &str) -> Result<Option<f64>> {
        self.set_value_by_name(name, NEUTRAL_VALUE).await
    }

    /// Set a peer's value, rescaling the whole list if it exceeds the bounds.
    ///
    /// Returns the rescale multiplier, if one was applied.
    pub async fn set_value(&self, id: Uuid, value: f64) -> Result<Option<f64>> {
        self.store.upsert_value(id, None, value).await
    }

    pub async fn set_value_by_name(&self, name: &str, value: f64) -> Result<Option<f64>> {
        let id = self.resolve(name).await?;
        self.store.upsert_value(id, Some(name), value).await
    }

    /// Current value of a peer. Peers without a value are neutral.
    pub async fn get_value(&self, id: Uuid) -> f64 {
        self.store
            .get(id)
            .await
            .map(|p| p.value())
            .unwrap_or(NEUTRAL_VALUE)
    }

    pub async fn get_value_by_name(&self, name: &str) -> Result<f64> {
        let id = self.resolve(name).await?;
        Ok(self.get_value(id).await)
    }

    pub async fn is_friend(&self, id: Uuid) -> bool {
        self.get_value(id).await > NEUTRAL_VALUE
    }

    pub async fn is_friend_by_name(&self, name: &str) -> Result<bool> {
        Ok(self.get_value_by_name(name).await? > NEUTRAL_VALUE)
    }

    pub async fn is_enemy(&self, id: Uuid) -> bool {
        self.get_value(id).await < NEUTRAL_VALUE
    }

    pub async fn is_enemy_by_name(&self, name: &str) -> Result<bool> {
        Ok(self.get_value_by_name(name).await? < NEUTRAL_VALUE)
    }

    pub async fn is_neutral(&self, id: Uuid) -> bool {
        self.get_value(id).await == NEUTRAL_VALUE
    }

    pub async fn is_neutral_by_name(&self, name: &str) -> Result<bool> {
        Ok(self.get_value_by_name(name).await? == NEUTRAL_VALUE)
    }

    /// Whether a value was ever stored for the peer
    pub async fn has_value(&self, id: Uuid) -> bool {
        self.store.get(id).await.is_some()
    }

    pub async fn has_value_by_name(&self, name: &str) -> Result<bool> {
        let id = self.resolve(name).await?;
        Ok(self.has_value(id).await)
    }

    /// Stored association of a peer, `None` if the peer is unknown
    pub async fn association(&self, id: Uuid) -> Option<Association> {
        self.store.get(id).await.map(|p| p.association())
    }

    pub async fn set_association(&self, id: Uuid, association: Association) -> Result<()> {
        self.store.set_association(id, association).await
    }

    pub async fn get(&self, id: Uuid) -> Option<Person> {
        self.store.get(id).await
    }

    pub async fn get_by_name(&self, name: &str) -> Result<Option<Person>> {
        let id = self.resolve(name).await?;
        Ok(self.store.get(id).await)
    }

    pub async fn remove(&self, id: Uuid) -> Option<Person> {
        self.store.remove(id).await
    }

    pub async fn remove_by_name(&self, name: &str) -> Result<Option<Person>> {
        let id = self.resolve(name).await?;
        Ok(self.store.remove(id).await)
    }

    pub async fn friends(&self) -> Vec<Person> {
        self.store.by_association(Association::Ally).await
    }

    pub async fn enemies(&self) -> Vec<Person> {
        self.store.by_association(Association::Enemy).await
    }

    pub async fn snapshot(&self) -> StoreSnapshot {
        self.store.snapshot().await
    }

    /// Persist the current list
    pub async fn save_to(&self, repository: &dyn StoreRepository) -> Result<()> {
        let snapshot = self.store.snapshot().await;
        repository.save(&snapshot).await?;
        debug!(persons = snapshot.persons.len(), "Saved friend list");
        Ok(())
    }

    /// Replace the list with the repository's saved state.
    ///
    /// Returns the number of persons loaded; nothing changes if nothing was saved.
    pub async fn load_from(
        &self,
        repository: &dyn StoreRepository,
        policy: DuplicatePolicy,
    ) -> Result<usize> {
        let Some(snapshot) = repository.load().await? else {
            return Ok(0);
        };

        let store = RelationshipStore::from_snapshot(snapshot, policy)?;
        let count = store.len();
        self.store.replace(store).await;
        info!(persons = count, "Loaded friend list");
        Ok(count)
    }

    async fn resolve(&self, name: &str) -> Result<Uuid> {
        let id = self.resolver.resolve(name).await?;
        debug!(name, %id, "Resolved identity");
        Ok(id)
    }
}

/// Owner-keyed collection of friend lists sharing one resolver
#[derive(Clone, Debug)]
pub struct FriendLists {
    lists: Arc<tokio::sync::RwLock<std::collections::HashMap<Uuid, FriendList>>>,
    resolver: Arc<dyn IdentityResolver>,
    bounds: crate::relationships::Bounds,
    policy: DuplicatePolicy,
}

impl FriendLists {
    pub fn new(
        resolver: Arc<dyn IdentityResolver>,
        bounds: crate::relationships::Bounds,
        policy: DuplicatePolicy,
    ) -> Self {
        Self {
            lists: Arc::new(tokio::sync::RwLock::new(std::collections::HashMap::new())),
            resolver,
            bounds,
            policy,
        }
    }

    /// The friend list of `owner`, created empty on first use
    pub async fn for_owner(&self, owner: Uuid) -> FriendList {
        if let Some(list) = self.lists.read().await.get(&owner) {
            return list.clone();
        }

        let mut lists = self.lists.write().await;
        lists
            .entry(owner)
            .or_insert_with(|| {
                let store = RelationshipStore::with_policy(self.bounds, self.policy);
                FriendList::new(SharedStore::new(store), Arc::clone(&self.resolver))
            })
            .clone()
    }

    pub async fn owners(&self) -> Vec<Uuid> {
        self.lists.read().await.keys().copied().collect()
    }

    /// Drop the list of `owner`, returning it if there was one
    pub async fn remove_owner(&self, owner: Uuid) -> Option<FriendList> {
        self.lists.write().await.remove(&owner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AmityError;
    use crate::identity::StaticResolver;
    use crate::relationships::Bounds;
    use crate::storage::InMemoryRepository;

    fn friend_list() -> (FriendList, Uuid, Uuid) {
        let steve = Uuid::new_v4();
        let alex = Uuid::new_v4();
        let resolver = StaticResolver::new().with("Steve", steve).with("Alex", alex);
        (
            FriendList::new(SharedStore::default(), Arc::new(resolver)),
            steve,
            alex,
        )
    }

    #[tokio::test]
    async fn test_unknown_peers_are_neutral() {
        let (list, steve, _) = friend_list();
        assert_eq!(list.get_value(steve).await, 0.0);
        assert!(list.is_neutral(steve).await);
        assert!(!list.has_value(steve).await);
        assert_eq!(list.association(steve).await, None);
    }

    #[tokio::test]
    async fn test_friend_and_enemy_by_name() {
        let (list, steve, alex) = friend_list();
        list.add_friend_by_name("steve").await.unwrap();
        list.add_enemy_by_name("Alex").await.unwrap();

        assert!(list.is_friend(steve).await);
        assert!(list.is_enemy_by_name("ALEX").await.unwrap());
        assert_eq!(list.association(alex).await, Some(Association::Enemy));
        assert_eq!(list.get(steve).await.unwrap().name, "steve");

        list.set_neutral_by_name("Steve").await.unwrap();
        assert!(list.is_neutral(steve).await);
        assert!(list.has_value(steve).await);
        // association is not re-derived when the value changes
        assert_eq!(list.association(steve).await, Some(Association::Ally));
    }

    #[tokio::test]
    async fn test_unknown_name_propagates_error() {
        let (list, _, _) = friend_list();
        assert!(matches!(
            list.add_friend_by_name("Herobrine").await,
            Err(AmityError::UnknownIdentity(_))
        ));
        assert!(list.is_friend_by_name("Herobrine").await.is_err());
        assert!(list.store().is_empty().await);
    }

    #[tokio::test]
    async fn test_set_value_rescales_list() {
        let (list, steve, alex) = friend_list();
        list.add_friend(steve).await.unwrap();
        let multiplier = list.set_value(alex, -8.0).await.unwrap();

        assert_eq!(multiplier, Some(0.25));
        assert_eq!(list.get_value(steve).await, 0.25);
        assert_eq!(list.get_value(alex).await, -2.0);
        assert_eq!(list.friends().await.len(), 1);
        assert_eq!(list.enemies().await.len(), 1);
    }

    #[tokio::test]
    async fn test_save_and_load_round_trip() {
        let (list, steve, alex) = friend_list();
        list.add_friend(steve).await.unwrap();
        list.add_enemy(alex).await.unwrap();
        list.set_association(alex, Association::Neutral).await.unwrap();

        let repository = InMemoryRepository::new();
        list.save_to(&repository).await.unwrap();

        let (restored, _, _) = friend_list();
        let count = restored
            .load_from(&repository, DuplicatePolicy::Reject)
            .await
            .unwrap();

        assert_eq!(count, 2);
        assert_eq!(restored.get_value(alex).await, -1.0);
        assert_eq!(restored.association(alex).await, Some(Association::Neutral));
    }

    #[tokio::test]
    async fn test_load_from_empty_repository_keeps_list() {
        let (list, steve, _) = friend_list();
        list.add_friend(steve).await.unwrap();

        let loaded = list
            .load_from(&InMemoryRepository::new(), DuplicatePolicy::Reject)
            .await
            .unwrap();
        assert_eq!(loaded, 0);
        assert!(list.is_friend(steve).await);
    }

    #[tokio::test]
    async fn test_owner_lists_are_independent() {
        let (template, steve, _) = friend_list();
        let lists = FriendLists::new(
            Arc::clone(template.resolver()),
            Bounds::standard(),
            DuplicatePolicy::Reject,
        );
        let owner_a = Uuid::new_v4();
        let owner_b = Uuid::new_v4();

        lists.for_owner(owner_a).await.add_friend(steve).await.unwrap();
        lists.for_owner(owner_b).await.add_enemy(steve).await.unwrap();

        assert!(lists.for_owner(owner_a).await.is_friend(steve).await);
        assert!(lists.for_owner(owner_b).await.is_enemy(steve).await);
        assert_eq!(lists.owners().await.len(), 2);

        let removed = lists.remove_owner(owner_a).await.unwrap();
        assert!(removed.is_friend(steve).await);
        assert!(lists.remove_owner(owner_a).await.is_none());
        assert!(lists.remove_owner(Uuid::new_v4()).await.is_none());
        assert!(lists.for_owner(owner_a).await.is_neutral(steve).await);
    }
}
