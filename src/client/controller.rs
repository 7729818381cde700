//! StudentController - client-side state for the record list and edit form.

use serde_json::{Number, Value};
use tracing::{debug, warn};

use super::{ClientError, StudentApi, StudentPayload};
use crate::student::Student;
use crate::view::{derive_view, SortDirection};

/// Message shown when the list cannot be loaded.
pub const REFRESH_ERROR: &str = "Không thể tải danh sách học sinh.";
/// Message shown when a create or update fails.
pub const SUBMIT_ERROR: &str = "Có lỗi khi lưu dữ liệu.";
/// Message shown when a delete fails.
pub const REMOVE_ERROR: &str = "Có lỗi khi xóa học sinh.";

/// The edit form, exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    pub name: String,
    pub age: String,
    pub class: String,
}

impl FormFields {
    /// Whether the form holds enough to submit.
    pub fn is_complete(&self) -> bool {
        !self.name.trim().is_empty() && !self.class.trim().is_empty() && !self.age.trim().is_empty()
    }

    fn payload(&self) -> StudentPayload {
        StudentPayload {
            name: self.name.trim().to_string(),
            age: parse_age(&self.age),
            class: self.class.trim().to_string(),
        }
    }
}

/// The number the age input holds, or `null` when it is not a number.
fn parse_age(raw: &str) -> Value {
    let raw = raw.trim();
    if let Ok(n) = raw.parse::<i64>() {
        return Value::from(n);
    }
    raw.parse::<f64>()
        .ok()
        .and_then(Number::from_f64)
        .map(Value::Number)
        .unwrap_or(Value::Null)
}

/// What an operation ended up doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// A guard stopped it before any request was sent.
    Skipped,
    Completed,
    /// The request failed; `last_error` says so.
    Failed,
}

/// Holds the record list and the edit session.
///
/// Writes patch `records` locally after the service confirms them (append on
/// create, replace on update, remove on delete) instead of re-fetching.
pub struct StudentController<A> {
    api: A,
    records: Vec<Student>,
    form: FormFields,
    editing_id: Option<String>,
    search_term: String,
    sort_direction: SortDirection,
    is_busy: bool,
    last_error: Option<String>,
}

impl<A: StudentApi> StudentController<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            records: Vec::new(),
            form: FormFields::default(),
            editing_id: None,
            search_term: String::new(),
            sort_direction: SortDirection::default(),
            is_busy: false,
            last_error: None,
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn records(&self) -> &[Student] {
        &self.records
    }

    pub fn form(&self) -> &FormFields {
        &self.form
    }

    pub fn editing_id(&self) -> Option<&str> {
        self.editing_id.as_deref()
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn sort_direction(&self) -> SortDirection {
        self.sort_direction
    }

    pub fn is_busy(&self) -> bool {
        self.is_busy
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// The submit control is disabled while a request is in flight.
    pub fn can_submit(&self) -> bool {
        !self.is_busy
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.form.name = name.into();
    }

    pub fn set_age(&mut self, age: impl Into<String>) {
        self.form.age = age.into();
    }

    pub fn set_class(&mut self, class: impl Into<String>) {
        self.form.class = class.into();
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    pub fn set_sort_direction(&mut self, direction: SortDirection) {
        self.sort_direction = direction;
    }

    pub fn toggle_sort(&mut self) {
        self.sort_direction = self.sort_direction.toggle();
    }

    /// The filtered, sorted rows for the current state.
    pub fn visible_records(&self) -> Vec<&Student> {
        derive_view(&self.records, &self.search_term, self.sort_direction)
    }

    /// Replace `records` with the service's list. On failure the previous
    /// list stays as it was.
    pub async fn refresh(&mut self) -> Outcome {
        self.start();
        let outcome = match self.api.list().await {
            Ok(records) => {
                debug!(count = records.len(), "fetched students");
                self.records = records;
                Outcome::Completed
            }
            Err(err) => self.fail(REFRESH_ERROR, &err),
        };
        self.is_busy = false;
        outcome
    }

    /// Create a record, or update the one being edited, from the form.
    ///
    /// Skipped while busy or when name, class or age is blank. On success the
    /// form and edit target are cleared.
    pub async fn submit(&mut self) -> Outcome {
        if self.is_busy || !self.form.is_complete() {
            return Outcome::Skipped;
        }

        let payload = self.form.payload();
        self.start();
        let result = match self.editing_id.clone() {
            Some(id) => self.api.update(&id, &payload).await.map(|updated| {
                for record in self.records.iter_mut().filter(|r| r.id == id) {
                    *record = updated.clone();
                }
            }),
            None => self
                .api
                .create(&payload)
                .await
                .map(|created| self.records.push(created)),
        };

        let outcome = match result {
            Ok(()) => {
                self.reset_form();
                Outcome::Completed
            }
            Err(err) => self.fail(SUBMIT_ERROR, &err),
        };
        self.is_busy = false;
        outcome
    }

    /// Load a record into the form and make it the edit target.
    pub fn begin_edit(&mut self, record: &Student) {
        self.editing_id = Some(record.id.clone());
        self.form = FormFields {
            name: record.name.clone(),
            age: if record.age == 0 {
                String::new()
            } else {
                record.age.to_string()
            },
            class: record.class.clone(),
        };
    }

    /// Abandon the edit and clear the form.
    pub fn cancel_edit(&mut self) {
        self.reset_form();
    }

    /// Delete a record once `confirm` agrees.
    ///
    /// `confirm` runs before any request; declining leaves everything as is.
    pub async fn remove<F>(&mut self, id: &str, confirm: F) -> Outcome
    where
        F: FnOnce() -> bool,
    {
        if !confirm() {
            return Outcome::Skipped;
        }

        self.start();
        let outcome = match self.api.delete(id).await {
            Ok(_) => {
                self.records.retain(|r| r.id != id);
                Outcome::Completed
            }
            Err(err) => self.fail(REMOVE_ERROR, &err),
        };
        self.is_busy = false;
        outcome
    }

    fn start(&mut self) {
        self.is_busy = true;
        self.last_error = None;
    }

    fn fail(&mut self, message: &str, err: &ClientError) -> Outcome {
        warn!(status = ?err.status(), "{} {}", message, err);
        self.last_error = Some(message.to_string());
        Outcome::Failed
    }

    fn reset_form(&mut self) {
        self.form = FormFields::default();
        self.editing_id = None;
    }
}
