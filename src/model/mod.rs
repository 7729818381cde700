//! Models - JSON document storage keyed by collection and id.
//!
//! Models provide a small CRUD abstraction over a document store. Each model
//! type names its collection and exposes its id; the store keeps serialized
//! documents and hands typed values back.
//!
//! ## Example
//!
//! ```ignore
//! use student_records::model::{InMemoryModelStore, Model, ModelsExt};
//!
//! #[derive(Serialize, Deserialize, Clone)]
//! struct Course {
//!     pub id: String,
//!     pub title: String,
//! }
//!
//! impl Model for Course {
//!     const COLLECTION: &'static str = "courses";
//!     fn id(&self) -> &str { &self.id }
//! }
//!
//! let store = InMemoryModelStore::new();
//! store.models::<Course>().insert(&course)?;
//! let loaded = store.models::<Course>().get("c-1")?;
//! ```

mod backend;
mod file;
mod in_memory;
mod model_repository;
mod store;

use serde::{de::DeserializeOwned, Serialize};
use std::fmt;

/// Trait for types that can be stored as models.
pub trait Model: Serialize + DeserializeOwned + Clone + Send + Sync {
    /// The collection name for this model type (e.g. "students").
    /// Maps to a collection in a document database or a key prefix in KV stores.
    const COLLECTION: &'static str;

    /// Returns the unique identifier for this model instance.
    fn id(&self) -> &str;
}

/// Error type for model store operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    /// A document with this id already exists.
    AlreadyExists { collection: String, id: String },
    /// Serialization/deserialization error.
    Serde(String),
    /// Storage-level error (I/O, poisoned lock, bad connection url).
    Storage(String),
    /// Model not found.
    NotFound { collection: String, id: String },
}

impl fmt::Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelError::AlreadyExists { collection, id } => {
                write!(f, "model already exists: {}:{}", collection, id)
            }
            ModelError::Serde(msg) => write!(f, "model serialization error: {}", msg),
            ModelError::Storage(msg) => write!(f, "model storage error: {}", msg),
            ModelError::NotFound { collection, id } => {
                write!(f, "model not found: {}:{}", collection, id)
            }
        }
    }
}

impl std::error::Error for ModelError {}

impl From<serde_json::Error> for ModelError {
    fn from(err: serde_json::Error) -> Self {
        ModelError::Serde(err.to_string())
    }
}

impl From<std::io::Error> for ModelError {
    fn from(err: std::io::Error) -> Self {
        ModelError::Storage(err.to_string())
    }
}

pub use backend::StoreBackend;
pub use file::FileModelStore;
pub use in_memory::InMemoryModelStore;
pub use model_repository::{ModelRepository, ModelsExt};
pub use store::ModelStore;
