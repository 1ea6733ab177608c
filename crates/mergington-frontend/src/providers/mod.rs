//! Shared services used by the pages.

pub mod api;
