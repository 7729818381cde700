//! Client - the record list controller and the API it talks to.
//!
//! [`StudentController`] is the client's single source of truth: the record
//! list as last fetched or patched, the edit form, the search term and sort
//! direction, and the busy/error flags. It reaches the service only through a
//! [`StudentApi`]; [`HttpStudentApi`] is the reqwest-backed implementation.
//!
//! ## Example
//!
//! ```ignore
//! use student_records::client::{HttpStudentApi, StudentController};
//!
//! let api = HttpStudentApi::new("http://localhost:5001/api/students");
//! let mut controller = StudentController::new(api);
//! controller.refresh().await;
//!
//! controller.set_name("Nguyễn Văn A");
//! controller.set_age("18");
//! controller.set_class("12A1");
//! controller.submit().await;
//!
//! for student in controller.visible_records() {
//!     println!("{} {}", student.name, student.class);
//! }
//! ```

mod controller;
mod error;
mod http;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::student::Student;

pub use controller::{FormFields, Outcome, StudentController};
pub use error::ClientError;
pub use http::HttpStudentApi;

/// Default API base when none is configured.
pub const DEFAULT_API_BASE: &str = "http://localhost:5001/api/students";

/// Body sent on create and update.
///
/// `age` is whatever number the form held, or `null` when it did not parse;
/// the service decides whether it is acceptable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentPayload {
    pub name: String,
    pub age: Value,
    pub class: String,
}

/// The remote operations the controller needs.
#[async_trait]
pub trait StudentApi: Send + Sync {
    /// Every record.
    async fn list(&self) -> Result<Vec<Student>, ClientError>;

    /// Create a record; returns it with its assigned id.
    async fn create(&self, payload: &StudentPayload) -> Result<Student, ClientError>;

    /// Update a record; returns the stored result.
    async fn update(&self, id: &str, payload: &StudentPayload) -> Result<Student, ClientError>;

    /// Delete a record; returns the confirmed id.
    async fn delete(&self, id: &str) -> Result<String, ClientError>;
}
