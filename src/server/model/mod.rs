//! Server-side domain models.
//!
//! Domain models are built from DTOs at the controller boundary, travel through the
//! service and data layers, and are turned back into DTOs for the response.

pub mod user;
