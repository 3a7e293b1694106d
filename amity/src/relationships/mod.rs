//! Bounded Relationship Tracking
//!
//! Provides the friendliness store, its bounds and rescaling rules, and the
//! ally / neutral / enemy classification of stored values.

pub mod association;
pub mod bounds;
pub mod metrics;
pub mod person;
pub mod shared;
pub mod store;

// Re-export key types for convenience
pub use association::{Association, NEUTRAL_VALUE};
pub use bounds::Bounds;
pub use metrics::{MetricsSnapshot, StoreMetrics};
pub use person::{Person, PersonRecord};
pub use shared::SharedStore;
pub use store::{DuplicatePolicy, RelationshipStore, StoreSnapshot};
