//! Document store seam.
//!
//! `DocumentStore` is the connection handle the rest of the data layer works with. The
//! production implementation is backed by MongoDB; tests use an in-memory store.

use async_trait::async_trait;
use serde_json::{Map, Value};

use crate::server::error::store::StoreError;

/// A schemaless document as exchanged with the store.
pub type Document = Map<String, Value>;

/// Equality filter on a single top-level field.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldFilter {
    pub field: &'static str,
    pub value: String,
}

impl FieldFilter {
    pub fn eq(field: &'static str, value: impl Into<String>) -> Self {
        Self {
            field,
            value: value.into(),
        }
    }
}

/// Counts reported by a single-document update.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UpdateOutcome {
    pub matched_count: u64,
    pub modified_count: u64,
    pub upserted_count: u64,
}

impl UpdateOutcome {
    /// True when the update modified an existing document or inserted a new one.
    pub fn changed(&self) -> bool {
        self.modified_count > 0 || self.upserted_count > 0
    }
}

/// Count reported by a single-document delete.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeleteOutcome {
    pub deleted_count: u64,
}

/// Handle to an established document store session.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Inserts `document` into `collection`.
    async fn insert_one(&self, collection: &str, document: Document) -> Result<(), StoreError>;

    /// Returns every document in `collection`.
    async fn find_all(&self, collection: &str) -> Result<Vec<Document>, StoreError>;

    /// Returns the first document matching `filter`, if any.
    async fn find_one(
        &self,
        collection: &str,
        filter: &FieldFilter,
    ) -> Result<Option<Document>, StoreError>;

    /// Merges the fields of `set` into the first document matching `filter`.
    ///
    /// With `upsert`, a document made of the filter field and `set` is inserted when
    /// nothing matches.
    async fn update_one(
        &self,
        collection: &str,
        filter: &FieldFilter,
        set: Document,
        upsert: bool,
    ) -> Result<UpdateOutcome, StoreError>;

    /// Removes the first document matching `filter`.
    async fn delete_one(
        &self,
        collection: &str,
        filter: &FieldFilter,
    ) -> Result<DeleteOutcome, StoreError>;

    /// Closes the session. Called once when the server stops.
    async fn shutdown(&self) {}
}
