//! Request handlers for the HTTP API.

pub mod activities;
pub mod error;
pub mod health;

pub use error::ApiError;
