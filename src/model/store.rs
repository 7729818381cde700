//! ModelStore - Abstract CRUD storage for models.

use super::{Model, ModelError};

/// Abstract CRUD storage for models.
///
/// Every method touches at most one document and is atomic with respect to
/// other calls on the same store.
pub trait ModelStore: Send + Sync {
    /// Get a model by ID. Returns None if not found.
    fn get_model<M: Model>(&self, id: &str) -> Result<Option<M>, ModelError>;

    /// Insert a new model. Fails if it already exists.
    fn insert_model<M: Model>(&self, model: &M) -> Result<M, ModelError>;

    /// Replace an existing model. Fails with `NotFound` if it does not exist.
    fn replace_model<M: Model>(&self, model: &M) -> Result<M, ModelError>;

    /// Delete a model by ID. Returns true if it existed.
    fn delete_model<M: Model>(&self, id: &str) -> Result<bool, ModelError>;

    /// All models of a collection, in insertion order.
    fn list_models<M: Model>(&self) -> Result<Vec<M>, ModelError>;
}
