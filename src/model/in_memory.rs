//! InMemoryModelStore - HashMap-backed model store for testing and development.

use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{Model, ModelError, ModelStore};

/// Internal stored representation of a model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(super) struct StoredModel {
    seq: u64,
    doc: Value,
}

/// The document set shared by the in-memory and file-backed stores.
///
/// Storage key is `"COLLECTION:id"`. `next_seq` only grows, so listing by
/// `seq` yields insertion order.
#[derive(Debug, Default, Serialize, Deserialize)]
pub(super) struct Documents {
    next_seq: u64,
    entries: HashMap<String, StoredModel>,
}

impl Documents {
    fn make_key(collection: &str, id: &str) -> String {
        format!("{}:{}", collection, id)
    }

    pub(super) fn get<M: Model>(&self, id: &str) -> Result<Option<M>, ModelError> {
        let key = Self::make_key(M::COLLECTION, id);
        match self.entries.get(&key) {
            Some(stored) => Ok(Some(serde_json::from_value(stored.doc.clone())?)),
            None => Ok(None),
        }
    }

    pub(super) fn insert<M: Model>(&mut self, model: &M) -> Result<M, ModelError> {
        let key = Self::make_key(M::COLLECTION, model.id());
        if self.entries.contains_key(&key) {
            return Err(ModelError::AlreadyExists {
                collection: M::COLLECTION.to_string(),
                id: model.id().to_string(),
            });
        }

        let doc = serde_json::to_value(model)?;
        self.next_seq += 1;
        self.entries.insert(
            key,
            StoredModel {
                seq: self.next_seq,
                doc,
            },
        );
        Ok(model.clone())
    }

    pub(super) fn replace<M: Model>(&mut self, model: &M) -> Result<M, ModelError> {
        let key = Self::make_key(M::COLLECTION, model.id());
        let doc = serde_json::to_value(model)?;
        let stored = self
            .entries
            .get_mut(&key)
            .ok_or_else(|| ModelError::NotFound {
                collection: M::COLLECTION.to_string(),
                id: model.id().to_string(),
            })?;
        stored.doc = doc;
        Ok(model.clone())
    }

    pub(super) fn delete<M: Model>(&mut self, id: &str) -> bool {
        self.remove::<M>(id).is_some()
    }

    /// Remove a document, handing back its stored form for [`Self::restore`].
    pub(super) fn remove<M: Model>(&mut self, id: &str) -> Option<StoredModel> {
        let key = Self::make_key(M::COLLECTION, id);
        self.entries.remove(&key)
    }

    /// Put a removed document back, keeping its original list position.
    pub(super) fn restore<M: Model>(&mut self, id: &str, stored: StoredModel) {
        self.entries.insert(Self::make_key(M::COLLECTION, id), stored);
    }

    pub(super) fn list<M: Model>(&self) -> Result<Vec<M>, ModelError> {
        let prefix = format!("{}:", M::COLLECTION);
        let mut stored: Vec<&StoredModel> = self
            .entries
            .iter()
            .filter(|(key, _)| key.starts_with(&prefix))
            .map(|(_, stored)| stored)
            .collect();
        stored.sort_by_key(|s| s.seq);

        stored
            .into_iter()
            .map(|s| serde_json::from_value(s.doc.clone()).map_err(ModelError::from))
            .collect()
    }

    pub(super) fn len(&self) -> usize {
        self.entries.len()
    }
}

pub(super) fn read_lock(
    lock: &RwLock<Documents>,
) -> Result<RwLockReadGuard<'_, Documents>, ModelError> {
    lock.read()
        .map_err(|_| ModelError::Storage("lock poisoned".into()))
}

pub(super) fn write_lock(
    lock: &RwLock<Documents>,
) -> Result<RwLockWriteGuard<'_, Documents>, ModelError> {
    lock.write()
        .map_err(|_| ModelError::Storage("lock poisoned".into()))
}

/// In-memory model store backed by a HashMap.
///
/// Clone-friendly via Arc; clones share the same documents.
#[derive(Clone, Default)]
pub struct InMemoryModelStore {
    storage: Arc<RwLock<Documents>>,
}

impl InMemoryModelStore {
    /// Create a new empty model store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored documents across all collections.
    pub fn len(&self) -> Result<usize, ModelError> {
        Ok(read_lock(&self.storage)?.len())
    }

    pub fn is_empty(&self) -> Result<bool, ModelError> {
        Ok(self.len()? == 0)
    }
}

impl ModelStore for InMemoryModelStore {
    fn get_model<M: Model>(&self, id: &str) -> Result<Option<M>, ModelError> {
        read_lock(&self.storage)?.get(id)
    }

    fn insert_model<M: Model>(&self, model: &M) -> Result<M, ModelError> {
        write_lock(&self.storage)?.insert(model)
    }

    fn replace_model<M: Model>(&self, model: &M) -> Result<M, ModelError> {
        write_lock(&self.storage)?.replace(model)
    }

    fn delete_model<M: Model>(&self, id: &str) -> Result<bool, ModelError> {
        Ok(write_lock(&self.storage)?.delete::<M>(id))
    }

    fn list_models<M: Model>(&self) -> Result<Vec<M>, ModelError> {
        read_lock(&self.storage)?.list()
    }
}
