//! Field input for create and update, with the schema-level casts and checks.

use serde_json::{Map, Value};

use super::{Student, StudentError};

/// The writable fields of a student. `None` means "not supplied".
///
/// On create every field must be supplied; on update the supplied fields are
/// merged over the stored record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StudentFields {
    pub name: Option<String>,
    pub age: Option<u32>,
    pub class: Option<String>,
}

impl StudentFields {
    /// All three fields supplied.
    pub fn new(name: impl Into<String>, age: u32, class: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            age: Some(age),
            class: Some(class.into()),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_age(mut self, age: u32) -> Self {
        self.age = Some(age);
        self
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.age.is_none() && self.class.is_none()
    }

    /// Parse a request body.
    ///
    /// The body must be a JSON object. Absent keys stay `None`; a key that is
    /// present but `null` or of the wrong type is a validation error. Numeric
    /// strings are accepted for `age`. Unknown keys (including `id`) are ignored.
    pub fn from_json(body: &Value) -> Result<Self, StudentError> {
        let object = body
            .as_object()
            .ok_or_else(|| StudentError::Validation("request body must be a JSON object".into()))?;

        Ok(Self {
            name: text_field(object, "name")?,
            age: age_field(object)?,
            class: text_field(object, "class")?,
        })
    }

    /// Build a new record with `id`, requiring every field.
    pub(crate) fn into_student(self, id: String) -> Result<Student, StudentError> {
        let student = Student {
            id,
            name: trimmed(self.name.ok_or_else(|| required("name"))?),
            age: self.age.ok_or_else(|| required("age"))?,
            class: trimmed(self.class.ok_or_else(|| required("class"))?),
        };
        validate(&student)?;
        Ok(student)
    }

    /// Merge the supplied fields over `existing`; the id never changes.
    pub(crate) fn merge_into(self, existing: &Student) -> Result<Student, StudentError> {
        let student = Student {
            id: existing.id.clone(),
            name: self.name.map_or_else(|| existing.name.clone(), trimmed),
            age: self.age.unwrap_or(existing.age),
            class: self.class.map_or_else(|| existing.class.clone(), trimmed),
        };
        validate(&student)?;
        Ok(student)
    }
}

/// Field constraints every persisted record satisfies.
pub(crate) fn validate(student: &Student) -> Result<(), StudentError> {
    if student.name.trim().is_empty() {
        return Err(required("name"));
    }
    if student.class.trim().is_empty() {
        return Err(required("class"));
    }
    if student.age == 0 {
        return Err(not_positive());
    }
    Ok(())
}

fn trimmed(value: String) -> String {
    value.trim().to_string()
}

fn required(field: &str) -> StudentError {
    StudentError::Validation(format!("{} is required", field))
}

fn not_positive() -> StudentError {
    StudentError::Validation("age must be a positive integer".into())
}

fn text_field(object: &Map<String, Value>, field: &str) -> Result<Option<String>, StudentError> {
    match object.get(field) {
        None => Ok(None),
        Some(Value::String(s)) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                Err(required(field))
            } else {
                Ok(Some(trimmed.to_string()))
            }
        }
        Some(Value::Null) => Err(required(field)),
        Some(_) => Err(StudentError::Validation(format!("{} must be a string", field))),
    }
}

fn age_field(object: &Map<String, Value>) -> Result<Option<u32>, StudentError> {
    let age = match object.get("age") {
        None => return Ok(None),
        Some(Value::Null) => return Err(required("age")),
        Some(Value::Number(n)) => {
            if let Some(v) = n.as_u64() {
                v
            } else if let Some(f) = n.as_f64() {
                if f.fract() != 0.0 || f < 1.0 || f > f64::from(u32::MAX) {
                    return Err(not_positive());
                }
                f as u64
            } else {
                return Err(not_positive());
            }
        }
        Some(Value::String(s)) => s.trim().parse::<u64>().map_err(|_| not_positive())?,
        Some(_) => return Err(not_positive()),
    };

    match u32::try_from(age) {
        Ok(age) if age > 0 => Ok(Some(age)),
        _ => Err(not_positive()),
    }
}
