//! User account domain model.
//!
//! A user account is an untyped document. The model only knows about the handful of
//! fields the backend itself reads or writes; everything else passes through untouched.

use serde_json::Value;

use crate::{model::user::UserDocumentDto, server::data::store::Document};

/// Application-assigned identifier used as the lookup key for every single-user operation.
pub const USER_ID_FIELD: &str = "userId";

/// Timestamp added to each document when it is created.
pub const CREATED_ON_FIELD: &str = "createdOn";

/// Store-internal identifier, never part of an update payload.
pub const STORE_ID_FIELD: &str = "_id";

/// A user account document.
#[derive(Debug, Clone, PartialEq)]
pub struct UserAccount {
    document: Document,
}

impl UserAccount {
    /// Wraps a document read from or destined for the store.
    pub fn from_document(document: Document) -> Self {
        Self { document }
    }

    /// Converts a request body into the domain model.
    pub fn from_dto(dto: UserDocumentDto) -> Self {
        Self::from_document(dto.0)
    }

    /// Converts the domain model into a response body.
    pub fn into_dto(self) -> UserDocumentDto {
        UserDocumentDto(self.document)
    }

    /// Sets the creation timestamp, replacing any caller-supplied value.
    pub fn set_created_on(&mut self, timestamp: String) {
        self.document
            .insert(CREATED_ON_FIELD.to_string(), Value::String(timestamp));
    }

    /// Removes the store-internal identifier if the caller included one.
    pub fn strip_store_id(&mut self) {
        self.document.remove(STORE_ID_FIELD);
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn into_document(self) -> Document {
        self.document
    }
}
