//! FileModelStore - model store persisted to a single JSON file.
//!
//! Documents live in memory exactly as in [`InMemoryModelStore`]; after every
//! successful write the whole document set is written to a sibling temp file
//! and renamed over the target, so a reader never observes a half-written file.
//!
//! [`InMemoryModelStore`]: super::InMemoryModelStore

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use tracing::debug;

use super::in_memory::{read_lock, write_lock, Documents};
use super::{Model, ModelError, ModelStore};

/// Model store backed by a JSON file on disk.
#[derive(Clone)]
pub struct FileModelStore {
    path: PathBuf,
    storage: Arc<RwLock<Documents>>,
}

impl FileModelStore {
    /// Open the store at `path`. A missing file starts an empty store.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, ModelError> {
        let path = path.into();
        let documents = match fs::read(&path) {
            Ok(bytes) if bytes.is_empty() => Documents::default(),
            Ok(bytes) => serde_json::from_slice(&bytes).map_err(|e| {
                ModelError::Storage(format!("corrupt store file {}: {}", path.display(), e))
            })?,
            Err(err) if err.kind() == ErrorKind::NotFound => Documents::default(),
            Err(err) => return Err(err.into()),
        };
        debug!(path = %path.display(), documents = documents.len(), "opened file store");

        Ok(Self {
            path,
            storage: Arc::new(RwLock::new(documents)),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self, documents: &Documents) -> Result<(), ModelError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let bytes = serde_json::to_vec_pretty(documents)?;
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, bytes)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl ModelStore for FileModelStore {
    fn get_model<M: Model>(&self, id: &str) -> Result<Option<M>, ModelError> {
        read_lock(&self.storage)?.get(id)
    }

    fn insert_model<M: Model>(&self, model: &M) -> Result<M, ModelError> {
        let mut documents = write_lock(&self.storage)?;
        let inserted = documents.insert(model)?;
        if let Err(err) = self.persist(&documents) {
            documents.delete::<M>(model.id());
            return Err(err);
        }
        Ok(inserted)
    }

    fn replace_model<M: Model>(&self, model: &M) -> Result<M, ModelError> {
        let mut documents = write_lock(&self.storage)?;
        let previous: Option<M> = documents.get(model.id())?;
        let replaced = documents.replace(model)?;
        if let Err(err) = self.persist(&documents) {
            if let Some(previous) = previous {
                documents.replace(&previous)?;
            }
            return Err(err);
        }
        Ok(replaced)
    }

    fn delete_model<M: Model>(&self, id: &str) -> Result<bool, ModelError> {
        let mut documents = write_lock(&self.storage)?;
        let Some(removed) = documents.remove::<M>(id) else {
            return Ok(false);
        };
        if let Err(err) = self.persist(&documents) {
            documents.restore::<M>(id, removed);
            return Err(err);
        }
        Ok(true)
    }

    fn list_models<M: Model>(&self) -> Result<Vec<M>, ModelError> {
        read_lock(&self.storage)?.list()
    }
}
