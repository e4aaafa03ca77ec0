//! User account repository for document operations.
//!
//! This module provides the `UserRepository` for managing user account documents in the
//! `userAccounts` collection. Every operation obtains the shared store handle from the
//! `ConnectionManager` first, so the first request of the process also establishes the
//! connection.

use crate::server::{
    data::{
        connection::ConnectionManager,
        store::{DeleteOutcome, FieldFilter, UpdateOutcome},
    },
    error::store::StoreError,
    model::user::{UserAccount, USER_ID_FIELD},
    util::time::current_timestamp,
};

/// Collection holding user account documents.
pub const USER_COLLECTION: &str = "userAccounts";

/// Repository providing document operations for user accounts.
pub struct UserRepository<'a> {
    connection: &'a ConnectionManager,
}

impl<'a> UserRepository<'a> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `connection` - Reference to the shared connection manager
    ///
    /// # Returns
    /// - `UserRepository` - New repository instance
    pub fn new(connection: &'a ConnectionManager) -> Self {
        Self { connection }
    }

    /// Inserts a new user account.
    ///
    /// Stamps the document with a `createdOn` timestamp before inserting it. The
    /// returned account is the caller's document plus that timestamp; identifiers
    /// assigned by the store are not included.
    ///
    /// # Arguments
    /// - `user` - The user account document to insert
    ///
    /// # Returns
    /// - `Ok(UserAccount)` - The document as inserted
    /// - `Err(StoreError)` - Connection or insert failure
    pub async fn create(&self, mut user: UserAccount) -> Result<UserAccount, StoreError> {
        let store = self.connection.get_connection().await?;

        user.set_created_on(current_timestamp());
        store
            .insert_one(USER_COLLECTION, user.document().clone())
            .await?;

        Ok(user)
    }

    /// Returns every user account, unfiltered and unsorted.
    pub async fn get_all(&self) -> Result<Vec<UserAccount>, StoreError> {
        let store = self.connection.get_connection().await?;

        let documents = store.find_all(USER_COLLECTION).await?;

        Ok(documents.into_iter().map(UserAccount::from_document).collect())
    }

    /// Finds the user account whose `userId` equals `id`.
    ///
    /// # Returns
    /// - `Ok(Some(UserAccount))` - A matching account
    /// - `Ok(None)` - No account has that identifier
    /// - `Err(StoreError)` - Connection or query failure
    pub async fn get_by_id(&self, id: &str) -> Result<Option<UserAccount>, StoreError> {
        let store = self.connection.get_connection().await?;

        let document = store
            .find_one(USER_COLLECTION, &FieldFilter::eq(USER_ID_FIELD, id))
            .await?;

        Ok(document.map(UserAccount::from_document))
    }

    /// Merges the fields of `user` into the account identified by `id`.
    ///
    /// Only the submitted fields are written; fields absent from `user` keep their stored
    /// values. When no account matches, one is created from `id` and the submitted fields.
    /// A store identifier in the payload is dropped when the account already exists, as
    /// it cannot be changed.
    ///
    /// # Arguments
    /// - `id` - Value of `userId` to match
    /// - `user` - Fields to set
    ///
    /// # Returns
    /// - `Ok(UpdateOutcome)` - Matched, modified and upserted counts
    /// - `Err(StoreError)` - Connection or update failure
    pub async fn update(
        &self,
        id: &str,
        mut user: UserAccount,
    ) -> Result<UpdateOutcome, StoreError> {
        let store = self.connection.get_connection().await?;
        let filter = FieldFilter::eq(USER_ID_FIELD, id);

        if store.find_one(USER_COLLECTION, &filter).await?.is_some() {
            user.strip_store_id();
        }

        store
            .update_one(USER_COLLECTION, &filter, user.into_document(), true)
            .await
    }

    /// Deletes at most one account whose `userId` equals `id`.
    ///
    /// # Returns
    /// - `Ok(DeleteOutcome)` - Number of deleted documents (0 or 1)
    /// - `Err(StoreError)` - Connection or delete failure
    pub async fn delete(&self, id: &str) -> Result<DeleteOutcome, StoreError> {
        let store = self.connection.get_connection().await?;

        let outcome = store
            .delete_one(USER_COLLECTION, &FieldFilter::eq(USER_ID_FIELD, id))
            .await?;

        tracing::debug!("Deleted count: {}", outcome.deleted_count);

        Ok(outcome)
    }
}
