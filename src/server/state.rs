//! Application state shared across all request handlers.

use std::sync::Arc;

use crate::server::data::connection::ConnectionManager;

/// Application state containing shared resources.
///
/// Initialized once during startup and cloned for each request through Axum's state
/// extraction. Cloning only bumps the reference count of the connection manager.
#[derive(Clone)]
pub struct AppState {
    /// Lazily-established connection to the document store.
    ///
    /// Shared by every request; the first request to use it opens the connection.
    pub connection: Arc<ConnectionManager>,
}

impl AppState {
    pub fn new(connection: Arc<ConnectionManager>) -> Self {
        Self { connection }
    }
}
