//! In-process stub of the content API for tests and local runs.
//!
//! Serves the full REST table from memory: bearer-token auth issued by
//! `/auth/login`, a unique service slug, multipart uploads, and a log of
//! every request received.

pub mod auth;
pub mod errors;
pub mod routes;
pub mod startup;
pub mod state;

pub use startup::{closed_base_url, spawn, spawn_with, StubServer};
pub use state::{Credentials, RequestRecord, StoredUpload, StubState, Table};
