//! The shared library for Mergington High School's extracurricular activities service.
//!
//! This library provides the pieces used by both the frontend and backend:
//! wire data types, typed identifiers, error types, logging setup, the HTTP
//! API client and frontend macros.

pub mod api;
pub mod data;
pub mod errors;
pub mod id;
pub mod log;
pub mod macros;

pub use serde;
pub use serde_json;
pub use tracing;
pub use tracing::{debug, error, info, trace, warn};
