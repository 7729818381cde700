//! Student API integration tests.
//!
//! Starts an axum server on port 0 and exercises it with reqwest, directly and
//! through the client controller.

#[cfg(feature = "http")]
mod support;

#[cfg(feature = "http")]
mod http;

#[cfg(all(feature = "http", feature = "client"))]
mod controller;

#[cfg(feature = "http")]
mod persistence;
