//! StudentStore - CRUD over the `students` collection.

use tracing::{debug, info};
use uuid::Uuid;

use super::{Student, StudentError, StudentFields};
use crate::model::{ModelStore, ModelsExt};

/// The persistence layer for student records.
///
/// Generic over the underlying [`ModelStore`]; each operation touches a
/// single document.
#[derive(Clone)]
pub struct StudentStore<S> {
    store: S,
}

impl<S: ModelStore> StudentStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// All records, in insertion order. An empty collection is not an error.
    pub fn list(&self) -> Result<Vec<Student>, StudentError> {
        Ok(self.store.models::<Student>().list()?)
    }

    pub fn get(&self, id: &str) -> Result<Student, StudentError> {
        self.store
            .models::<Student>()
            .get(id)?
            .ok_or_else(|| StudentError::NotFound(id.to_string()))
    }

    /// Validate `fields`, assign a fresh id and persist the record.
    pub fn create(&self, fields: StudentFields) -> Result<Student, StudentError> {
        let id = Uuid::new_v4().simple().to_string();
        let student = fields.into_student(id)?;
        let created = self.store.models::<Student>().insert(&student)?;
        info!(id = %created.id, "created student");
        Ok(created)
    }

    /// Merge `fields` over the stored record, re-validate and persist it.
    pub fn update(&self, id: &str, fields: StudentFields) -> Result<Student, StudentError> {
        let repo = self.store.models::<Student>();
        let existing = repo
            .get(id)?
            .ok_or_else(|| StudentError::NotFound(id.to_string()))?;

        if fields.is_empty() {
            debug!(id, "empty update, record unchanged");
            return Ok(existing);
        }

        let merged = fields.merge_into(&existing)?;
        let updated = repo.replace(&merged)?;
        info!(id, "updated student");
        Ok(updated)
    }

    /// Remove the record, returning its id.
    pub fn delete(&self, id: &str) -> Result<String, StudentError> {
        if !self.store.models::<Student>().delete(id)? {
            return Err(StudentError::NotFound(id.to_string()));
        }
        info!(id, "deleted student");
        Ok(id.to_string())
    }
}
