//! Students - the record type and the store that owns it.
//!
//! A [`Student`] is the only entity: `{ id, name, age, class }`. The
//! [`StudentStore`] assigns ids, validates fields on every write and is the
//! sole owner of persisted records. It works over any [`ModelStore`].
//!
//! [`ModelStore`]: crate::model::ModelStore

mod error;
mod fields;
mod store;

use serde::{Deserialize, Serialize};

use crate::model::Model;

pub use error::StudentError;
pub use fields::StudentFields;
pub use store::StudentStore;

/// One student's persisted record.
///
/// `age` and `class` default when absent so that sparse documents still
/// deserialize on the client side; the store never writes such a record.
/// `_id` is accepted as an alias for `id` when reading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub age: u32,
    #[serde(default)]
    pub class: String,
}

impl Model for Student {
    const COLLECTION: &'static str = "students";

    fn id(&self) -> &str {
        &self.id
    }
}
