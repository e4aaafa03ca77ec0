//! Process-wide document store connection.
//!
//! The `ConnectionManager` establishes the store session on first use and hands out the
//! same handle for the rest of the process lifetime. Initialization runs under a
//! `OnceCell`, so concurrent first requests share a single connection attempt.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::OnceCell;

use crate::server::{
    data::store::DocumentStore,
    error::store::{BoxError, StoreError},
};

/// Opens a new session with the document store.
#[async_trait]
pub trait Connector: Send + Sync {
    async fn connect(&self) -> Result<Arc<dyn DocumentStore>, BoxError>;
}

/// Lazily connects to the document store and caches the handle.
pub struct ConnectionManager {
    connector: Box<dyn Connector>,
    handle: OnceCell<Arc<dyn DocumentStore>>,
}

impl ConnectionManager {
    /// Creates a manager that will use `connector` on first access.
    ///
    /// No connection is attempted until `get_connection` is called.
    pub fn new(connector: impl Connector + 'static) -> Self {
        Self {
            connector: Box::new(connector),
            handle: OnceCell::new(),
        }
    }

    /// Returns the shared store handle, connecting on the first call.
    ///
    /// # Returns
    /// - `Ok(Arc<dyn DocumentStore>)` - The cached handle; every call returns the same `Arc`
    /// - `Err(StoreError::ConnectionFailed)` - The connection attempt failed. The cause is
    ///   logged and the next call attempts to connect again.
    pub async fn get_connection(&self) -> Result<Arc<dyn DocumentStore>, StoreError> {
        let handle = self
            .handle
            .get_or_try_init(|| async {
                self.connector.connect().await.map_err(|source| {
                    tracing::error!("MongoDB connection error: {}", source);
                    StoreError::ConnectionFailed { source }
                })
            })
            .await?;

        Ok(Arc::clone(handle))
    }

    /// Closes the store session if one was ever established.
    pub async fn shutdown(&self) {
        if let Some(handle) = self.handle.get() {
            handle.shutdown().await;
        }
    }
}
