//! The bounded relationship store
//!
//! Holds one owner's persons together with the [`Bounds`] their values must
//! respect. Inserting a value beyond the bounds through
//! [`RelationshipStore::introduce_safe`] rescales the whole collection so the
//! new value lands exactly on the violated limit while every ratio between
//! stored values is preserved.

use super::association::{Association, NEUTRAL_VALUE};
use super::bounds::Bounds;
use super::person::{Person, PersonRecord};
use crate::{AmityError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::{debug, info, warn};
use uuid::Uuid;

/// What to do when a person is inserted under an id the store already holds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DuplicatePolicy {
    /// Fail with [`AmityError::DuplicateIdentity`]
    #[default]
    Reject,

    /// Replace the existing record
    Overwrite,
}

/// Serializable state of a store: its bounds and every person record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreSnapshot {
    pub bounds: Bounds,
    pub persons: Vec<PersonRecord>,
}

/// Persons keyed by id, with every value kept inside `bounds`
#[derive(Debug, Clone)]
pub struct RelationshipStore {
    bounds: Bounds,
    policy: DuplicatePolicy,
    persons: HashMap<Uuid, Person>,
}

impl RelationshipStore {
    /// Create an empty store that rejects duplicate ids
    pub fn new(bounds: Bounds) -> Self {
        Self::with_policy(bounds, DuplicatePolicy::default())
    }

    pub fn with_policy(bounds: Bounds, policy: DuplicatePolicy) -> Self {
        Self {
            bounds,
            policy,
            persons: HashMap::new(),
        }
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn policy(&self) -> DuplicatePolicy {
        self.policy
    }

    pub fn len(&self) -> usize {
        self.persons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.persons.is_empty()
    }

    pub fn contains(&self, id: Uuid) -> bool {
        self.persons.contains_key(&id)
    }

    pub fn get(&self, id: Uuid) -> Option<&Person> {
        self.persons.get(&id)
    }

    /// Find a person by display name, ignoring case
    pub fn find_by_name(&self, name: &str) -> Option<&Person> {
        self.persons
            .values()
            .find(|p| p.name.eq_ignore_ascii_case(name))
    }

    pub fn persons(&self) -> impl Iterator<Item = &Person> {
        self.persons.values()
    }

    /// Insert a person whose value is already within the bounds.
    ///
    /// Never rescales: an out-of-range value is rejected with
    /// [`AmityError::ValueOutOfBounds`]. Use [`RelationshipStore::introduce_safe`]
    /// to accept any finite value.
    pub fn add(&mut self, person: Person) -> Result<()> {
        self.check_insertable(&person)?;

        let value = person.value();
        if !self.bounds.contains(value) {
            warn!(id = %person.id(), value, "Rejected out-of-bounds value");
            return Err(AmityError::ValueOutOfBounds {
                value,
                minimum: self.bounds.minimum(),
                maximum: self.bounds.maximum(),
            });
        }

        if self.persons.insert(person.id(), person).is_some() {
            debug!("Overwrote existing person");
        }
        Ok(())
    }

    /// Insert a person, rescaling the whole store if its value is out of bounds.
    ///
    /// Returns the multiplier applied to every value, or `None` when the value
    /// already fit. After a rescale the new person's value equals the violated
    /// limit exactly. On error nothing is changed.
    pub fn introduce_safe(&mut self, mut person: Person) -> Result<Option<f64>> {
        self.check_insertable(&person)?;

        let id = person.id();
        let value = person.value();
        let Some(multiplier) = self.bounds.rescale_factor(value)? else {
            debug!(%id, value, "Introduced person within bounds");
            self.persons.insert(id, person);
            return Ok(None);
        };

        let limit = self.bounds.violated_limit(value).ok_or_else(|| {
            AmityError::InvariantViolation(format!(
                "rescale requested for in-bounds value {}",
                value
            ))
        })?;

        // Under Overwrite the old record with this id is replaced, not scaled
        let staged = self.stage_scaled(multiplier, Some(id))?;
        let scaled = staged.len();
        self.commit(staged);
        person.set_value(limit);
        self.persons.insert(id, person);

        info!(
            %id,
            value,
            multiplier,
            scaled,
            "Rescaled store to keep introduced value within bounds"
        );
        Ok(Some(multiplier))
    }

    /// Give an existing person a new value, rescaling the store if needed.
    ///
    /// The stored association is kept.
    pub fn set_value(&mut self, id: Uuid, value: f64) -> Result<Option<f64>> {
        let Some(original) = self.persons.remove(&id) else {
            return Err(AmityError::PersonNotFound(id));
        };

        let mut updated = original.clone();
        updated.set_value(value);
        match self.introduce_safe(updated) {
            Ok(multiplier) => Ok(multiplier),
            Err(e) => {
                self.persons.insert(id, original);
                Err(e)
            }
        }
    }

    /// Set the value of `id`, introducing a new person if the id is unknown.
    ///
    /// A given `name` replaces the stored one. New persons without a name are
    /// named after their id.
    pub fn upsert_value(&mut self, id: Uuid, name: Option<&str>, value: f64) -> Result<Option<f64>> {
        if !self.contains(id) {
            let name = name.map(str::to_string).unwrap_or_else(|| id.to_string());
            return self.introduce_safe(Person::new(id, name, value));
        }

        let multiplier = self.set_value(id, value)?;
        if let Some(name) = name
            && let Some(person) = self.persons.get_mut(&id)
        {
            person.name = name.to_string();
        }
        Ok(multiplier)
    }

    /// Change only the association of an existing person
    pub fn set_association(&mut self, id: Uuid, association: Association) -> Result<()> {
        let person = self
            .persons
            .get_mut(&id)
            .ok_or(AmityError::PersonNotFound(id))?;
        person.set_association(association);
        Ok(())
    }

    pub fn remove(&mut self, id: Uuid) -> Option<Person> {
        let removed = self.persons.remove(&id);
        if removed.is_some() {
            debug!(%id, "Removed person");
        }
        removed
    }

    /// Snapshot of every person matching `predicate`
    pub fn query<F>(&self, predicate: F) -> Vec<Person>
    where
        F: Fn(&Person) -> bool,
    {
        self.persons
            .values()
            .filter(|p| predicate(p))
            .cloned()
            .collect()
    }

    /// Persons whose value is exactly `value`.
    ///
    /// Rarely what you want for anything but neutral; see
    /// [`RelationshipStore::by_association`].
    pub fn by_exact_value(&self, value: f64) -> Vec<Person> {
        self.query(|p| p.value() == value)
    }

    /// Persons on the side of neutral an association stands for.
    ///
    /// `Ally` matches every value above neutral and `Enemy` every value below,
    /// however large; `Neutral` matches exactly the neutral value.
    pub fn by_association(&self, association: Association) -> Vec<Person> {
        match association {
            Association::Ally => self.friends(),
            Association::Enemy => self.enemies(),
            Association::Neutral => self.by_exact_value(NEUTRAL_VALUE),
        }
    }

    /// Persons with `lower <= value <= upper`
    pub fn by_range(&self, lower: f64, upper: f64) -> Vec<Person> {
        self.query(|p| p.value() >= lower && p.value() <= upper)
    }

    pub fn friends(&self) -> Vec<Person> {
        self.query(Person::is_friend)
    }

    pub fn enemies(&self) -> Vec<Person> {
        self.query(Person::is_enemy)
    }

    /// Multiply every value by `multiplier`.
    ///
    /// Fails without changing anything if a result would leave the bounds.
    pub fn multiply_all(&mut self, multiplier: f64) -> Result<()> {
        if !multiplier.is_finite() {
            return Err(AmityError::InvalidValue(multiplier));
        }

        let staged = self.stage_scaled(multiplier, None)?;
        debug!(multiplier, count = staged.len(), "Multiplied all values");
        self.commit(staged);
        Ok(())
    }

    pub fn halve_all(&mut self) -> Result<()> {
        self.multiply_all(0.5)
    }

    /// Multiply only the values within `[lower, upper]`, returning how many changed.
    ///
    /// Bounds are NOT enforced here; a multiplier above 1 can push values out
    /// of range. Check with [`RelationshipStore::verify_invariant`] afterwards.
    /// A non-finite multiplier fails with [`AmityError::InvalidValue`] and
    /// changes nothing.
    pub fn multiply_in_range(&mut self, multiplier: f64, lower: f64, upper: f64) -> Result<usize> {
        if !multiplier.is_finite() {
            return Err(AmityError::InvalidValue(multiplier));
        }

        let bounds = self.bounds;
        let mut touched = 0;
        for person in self.persons.values_mut() {
            let value = person.value();
            if value < lower || value > upper {
                continue;
            }
            let scaled = value * multiplier;
            if !bounds.contains(scaled) {
                warn!(id = %person.id(), value = scaled, "Range multiply left value out of bounds");
            }
            person.set_value(scaled);
            touched += 1;
        }
        Ok(touched)
    }

    /// Check that every stored value lies within the bounds
    pub fn verify_invariant(&self) -> Result<()> {
        match self.persons.values().find(|p| !self.bounds.contains(p.value())) {
            Some(person) => Err(AmityError::InvariantViolation(format!(
                "value {} of {} ({}) outside bounds [{}, {}]",
                person.value(),
                person.name,
                person.id(),
                self.bounds.minimum(),
                self.bounds.maximum()
            ))),
            None => Ok(()),
        }
    }

    /// Plain records of the store's state, ordered by name then id
    pub fn snapshot(&self) -> StoreSnapshot {
        let mut persons: Vec<PersonRecord> = self.persons.values().map(PersonRecord::from).collect();
        persons.sort_by(|a, b| a.name.cmp(&b.name).then(a.id.cmp(&b.id)));
        StoreSnapshot {
            bounds: self.bounds,
            persons,
        }
    }

    /// Rebuild a store from a snapshot, validating every record
    pub fn from_snapshot(snapshot: StoreSnapshot, policy: DuplicatePolicy) -> Result<Self> {
        let mut store = Self::with_policy(snapshot.bounds, policy);
        for record in snapshot.persons {
            store.add(Person::from(record))?;
        }
        Ok(store)
    }

    fn check_insertable(&self, person: &Person) -> Result<()> {
        if !person.value().is_finite() {
            return Err(AmityError::InvalidValue(person.value()));
        }
        if self.policy == DuplicatePolicy::Reject && self.contains(person.id()) {
            warn!(id = %person.id(), "Rejected duplicate identity");
            return Err(AmityError::DuplicateIdentity(person.id()));
        }
        Ok(())
    }

    /// Scaled values for every person except `skip`, verified against the bounds
    fn stage_scaled(&self, multiplier: f64, skip: Option<Uuid>) -> Result<Vec<(Uuid, f64)>> {
        self.persons
            .values()
            .filter(|p| Some(p.id()) != skip)
            .map(|p| {
                let scaled = p.value() * multiplier;
                // a zero factor turns negative values into -0.0
                let scaled = if scaled == 0.0 { 0.0 } else { scaled };
                if self.bounds.contains(scaled) {
                    Ok((p.id(), scaled))
                } else {
                    Err(AmityError::InvariantViolation(format!(
                        "scaling {} by {} gives {}, outside bounds [{}, {}]",
                        p.value(),
                        multiplier,
                        scaled,
                        self.bounds.minimum(),
                        self.bounds.maximum()
                    )))
                }
            })
            .collect()
    }

    fn commit(&mut self, staged: Vec<(Uuid, f64)>) {
        for (id, value) in staged {
            if let Some(person) = self.persons.get_mut(&id) {
                person.set_value(value);
            }
        }
    }
}

impl Default for RelationshipStore {
    fn default() -> Self {
        Self::new(Bounds::standard())
    }
}
