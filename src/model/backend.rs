//! StoreBackend - pick a concrete model store from a connection url.

use std::path::PathBuf;

use tracing::info;

use super::{FileModelStore, InMemoryModelStore, Model, ModelError, ModelStore};

/// One of the available model stores, chosen at startup.
#[derive(Clone)]
pub enum StoreBackend {
    Memory(InMemoryModelStore),
    File(FileModelStore),
}

impl StoreBackend {
    /// Connect to the store named by `url`.
    ///
    /// - `""` or `memory://` - a fresh in-memory store
    /// - `file://<path>` or a bare path - a JSON file store at `<path>`
    pub fn connect(url: &str) -> Result<Self, ModelError> {
        let url = url.trim();
        if url.is_empty() || url == "memory://" {
            info!("using in-memory store");
            return Ok(StoreBackend::Memory(InMemoryModelStore::new()));
        }

        let path = match url.split_once("://") {
            Some(("file", path)) => PathBuf::from(path),
            Some((scheme, _)) => {
                return Err(ModelError::Storage(format!(
                    "unsupported database url scheme: {}",
                    scheme
                )))
            }
            None => PathBuf::from(url),
        };
        info!(path = %path.display(), "using file store");
        Ok(StoreBackend::File(FileModelStore::open(path)?))
    }
}

impl ModelStore for StoreBackend {
    fn get_model<M: Model>(&self, id: &str) -> Result<Option<M>, ModelError> {
        match self {
            StoreBackend::Memory(store) => store.get_model(id),
            StoreBackend::File(store) => store.get_model(id),
        }
    }

    fn insert_model<M: Model>(&self, model: &M) -> Result<M, ModelError> {
        match self {
            StoreBackend::Memory(store) => store.insert_model(model),
            StoreBackend::File(store) => store.insert_model(model),
        }
    }

    fn replace_model<M: Model>(&self, model: &M) -> Result<M, ModelError> {
        match self {
            StoreBackend::Memory(store) => store.replace_model(model),
            StoreBackend::File(store) => store.replace_model(model),
        }
    }

    fn delete_model<M: Model>(&self, id: &str) -> Result<bool, ModelError> {
        match self {
            StoreBackend::Memory(store) => store.delete_model::<M>(id),
            StoreBackend::File(store) => store.delete_model::<M>(id),
        }
    }

    fn list_models<M: Model>(&self) -> Result<Vec<M>, ModelError> {
        match self {
            StoreBackend::Memory(store) => store.list_models(),
            StoreBackend::File(store) => store.list_models(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_urls() {
        assert!(matches!(
            StoreBackend::connect("memory://").unwrap(),
            StoreBackend::Memory(_)
        ));
        assert!(matches!(
            StoreBackend::connect("  ").unwrap(),
            StoreBackend::Memory(_)
        ));
    }

    #[test]
    fn file_urls() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("students.json");

        let url = format!("file://{}", path.display());
        match StoreBackend::connect(&url).unwrap() {
            StoreBackend::File(store) => assert_eq!(store.path(), path.as_path()),
            StoreBackend::Memory(_) => panic!("expected file store"),
        }

        let bare = path.display().to_string();
        assert!(matches!(
            StoreBackend::connect(&bare).unwrap(),
            StoreBackend::File(_)
        ));
    }

    #[test]
    fn unknown_scheme_is_rejected() {
        let err = StoreBackend::connect("mongodb://localhost:27017/student_db")
            .err()
            .unwrap();
        assert!(matches!(err, ModelError::Storage(msg) if msg.contains("mongodb")));
    }
}
