//! Persistence abstractions and implementations
//!
//! The store itself never touches disk. A [`StoreRepository`] loads and saves
//! [`StoreSnapshot`](crate::relationships::StoreSnapshot)s on its behalf.
//!
//! ## Repository Implementations
//!
//! - **JsonFileRepository**: one pretty-printed JSON file per store
//! - **InMemoryRepository**: process-local, for tests and embedding

pub mod errors;
pub mod json;
pub mod memory;
pub mod traits;

pub use errors::{StorageError, StorageResult};
pub use json::JsonFileRepository;
pub use memory::InMemoryRepository;
pub use traits::StoreRepository;
