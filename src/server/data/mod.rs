//! Data access layer over the document store.
//!
//! The data layer is split into the store seam (`store`), the process-wide connection
//! cache (`connection`), the MongoDB implementation of the seam (`mongo`) and the
//! repositories that run document operations for each domain (`user`). Repositories
//! obtain their store handle from the `ConnectionManager` on every call and return domain
//! models or raw operation outcomes to the service layer.

pub mod connection;
pub mod mongo;
pub mod store;
pub mod user;
