//! Data transfer objects shared across the API surface.

pub mod api;
pub mod user;
