//! A peer tracked by a relationship store

use super::association::Association;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A peer and how the owner regards them.
///
/// `association` is stored alongside `value` rather than derived from it:
/// changing one never updates the other. Use [`Person::sync_association`]
/// to re-derive the association from the current value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    id: Uuid,
    pub name: String,
    value: f64,
    association: Association,
}

impl Person {
    /// Create a person, deriving the initial association from `value`
    pub fn new(id: Uuid, name: impl Into<String>, value: f64) -> Self {
        Self {
            id,
            name: name.into(),
            value,
            association: Association::closest_to(value),
        }
    }

    /// Create a person with an explicit association, which may disagree with `value`
    pub fn with_association(
        id: Uuid,
        name: impl Into<String>,
        value: f64,
        association: Association,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            value,
            association,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn association(&self) -> Association {
        self.association
    }

    /// Change the friendliness value. The stored association is left as is.
    pub fn set_value(&mut self, value: f64) {
        self.value = value;
    }

    /// Change the association. The friendliness value is left as is.
    pub fn set_association(&mut self, association: Association) {
        self.association = association;
    }

    /// Association implied by the current value
    pub fn derived_association(&self) -> Association {
        Association::closest_to(self.value)
    }

    /// Overwrite the stored association with the one implied by the value
    pub fn sync_association(&mut self) -> Association {
        self.association = self.derived_association();
        self.association
    }

    pub fn is_friend(&self) -> bool {
        self.value > super::association::NEUTRAL_VALUE
    }

    pub fn is_enemy(&self) -> bool {
        self.value < super::association::NEUTRAL_VALUE
    }

    pub fn is_neutral(&self) -> bool {
        self.value == super::association::NEUTRAL_VALUE
    }
}

/// Plain `(identity, value, association)` record handed to persistence
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonRecord {
    pub id: Uuid,
    pub name: String,
    pub value: f64,
    pub association: Association,
}

impl From<&Person> for PersonRecord {
    fn from(person: &Person) -> Self {
        Self {
            id: person.id,
            name: person.name.clone(),
            value: person.value,
            association: person.association,
        }
    }
}

impl From<PersonRecord> for Person {
    fn from(record: PersonRecord) -> Self {
        Person::with_association(record.id, record.name, record.value, record.association)
    }
}
