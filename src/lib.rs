//! Student records manager.
//!
//! - [`model`]: JSON document storage (in-memory or file-backed)
//! - [`student`]: the record type and the store that validates and owns it
//! - [`service`]: the CRUD API over the store, served by axum with the "http" feature
//! - [`client`]: the client-side controller and its reqwest API ("client" feature)
//! - [`view`]: the filtered, Vietnamese-collated projection of records
//! - [`config`]: flags/environment for the binaries

pub mod config;
pub mod model;
pub mod service;
pub mod student;
pub mod view;

#[cfg(feature = "client")]
pub mod client;

pub use model::{InMemoryModelStore, Model, ModelError, ModelStore, StoreBackend};
pub use service::{ServiceResponse, StudentService};
pub use student::{Student, StudentError, StudentFields, StudentStore};
pub use view::{derive_view, SortDirection};
