//! Student Service API - stateless request handlers over a [`StudentStore`].
//!
//! `StudentService<S>` turns each CRUD operation into a [`ServiceResponse`]
//! (status code + JSON body), independent of any HTTP framework. The axum
//! transport in `http` (requires the "http" feature) maps routes onto it.
//!
//! | Operation    | Success                | Not found | Invalid input | Failure |
//! |--------------|------------------------|-----------|---------------|---------|
//! | list         | 200 + array            |           |               | 500     |
//! | get by id    | 200 + record           | 404       |               | 500     |
//! | create       | 201 + record           |           | 400           | 500     |
//! | update by id | 200 + record           | 404       | 400           | 500     |
//! | delete by id | 200 + `{message, id}`  | 404       |               | 500     |
//!
//! Every error body is `{ "error": message }`.
//!
//! ## Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use student_records::model::InMemoryModelStore;
//! use student_records::service::{self, StudentService};
//!
//! let service = Arc::new(StudentService::new(InMemoryModelStore::new()));
//! let response = service.create(&json!({ "name": "Nguyễn Văn A", "age": 18, "class": "12A1" }));
//! assert_eq!(response.status, 201);
//!
//! // HTTP transport (requires "http" feature)
//! // service::serve(service, "0.0.0.0:5000").await?;
//! ```

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::{error, warn};

use crate::model::ModelStore;
use crate::student::{StudentError, StudentFields, StudentStore};

#[cfg(feature = "http")]
mod http;
#[cfg(feature = "http")]
pub use http::{router, serve};

/// Base path of the student routes.
pub const STUDENTS_PATH: &str = "/api/students";

/// Confirmation message returned by a successful delete.
pub const DELETED_MESSAGE: &str = "Deleted student";

/// The response produced by a service operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceResponse {
    /// HTTP-style status code.
    pub status: u16,
    /// Response body (record, list, confirmation or `{error}`).
    pub body: Value,
}

impl ServiceResponse {
    fn with_status(status: u16, body: Value) -> Self {
        Self { status, body }
    }

    /// Build an error response from a `StudentError`.
    pub fn from_error(err: StudentError) -> Self {
        let status = err.status_code();
        if status >= 500 {
            error!("student operation failed: {}", err);
        } else {
            warn!(status, "student request rejected: {}", err);
        }
        Self {
            status,
            body: json!({ "error": err.to_string() }),
        }
    }

    fn from_result<T: Serialize>(status: u16, result: Result<T, StudentError>) -> Self {
        match result.and_then(|value| {
            serde_json::to_value(value).map_err(|e| StudentError::Unexpected(e.to_string()))
        }) {
            Ok(body) => Self::with_status(status, body),
            Err(err) => Self::from_error(err),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

impl From<StudentError> for ServiceResponse {
    fn from(err: StudentError) -> Self {
        Self::from_error(err)
    }
}

/// The HTTP-independent student API.
///
/// Holds no per-request state; concurrent calls only meet inside the store.
pub struct StudentService<S> {
    store: StudentStore<S>,
}

impl<S: ModelStore> StudentService<S> {
    /// Create a service over the given model store.
    pub fn new(store: S) -> Self {
        Self {
            store: StudentStore::new(store),
        }
    }

    /// `GET /api/students`
    pub fn list(&self) -> ServiceResponse {
        ServiceResponse::from_result(200, self.store.list())
    }

    /// `GET /api/students/:id`
    pub fn get(&self, id: &str) -> ServiceResponse {
        ServiceResponse::from_result(200, self.store.get(id))
    }

    /// `POST /api/students`
    pub fn create(&self, body: &Value) -> ServiceResponse {
        let result = StudentFields::from_json(body).and_then(|fields| self.store.create(fields));
        ServiceResponse::from_result(201, result)
    }

    /// `PUT /api/students/:id`
    ///
    /// A missing id wins over an invalid body, so an update can never be
    /// mistaken for a create.
    pub fn update(&self, id: &str, body: &Value) -> ServiceResponse {
        let result = self.store.get(id).and_then(|_| {
            let fields = StudentFields::from_json(body)?;
            self.store.update(id, fields)
        });
        ServiceResponse::from_result(200, result)
    }

    /// `DELETE /api/students/:id`
    pub fn delete(&self, id: &str) -> ServiceResponse {
        match self.store.delete(id) {
            Ok(id) => ServiceResponse::with_status(200, json!({ "message": DELETED_MESSAGE, "id": id })),
            Err(err) => ServiceResponse::from_error(err),
        }
    }
}
