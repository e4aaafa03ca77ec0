use crate::server::{
    data::{connection::ConnectionManager, user::UserRepository},
    error::{AppError, USER_NOT_FOUND},
    model::user::UserAccount,
};

pub struct UserService<'a> {
    connection: &'a ConnectionManager,
}

impl<'a> UserService<'a> {
    pub fn new(connection: &'a ConnectionManager) -> Self {
        Self { connection }
    }

    /// Creates a user account and returns it with its creation timestamp
    pub async fn create(&self, user: UserAccount) -> Result<UserAccount, AppError> {
        let user = UserRepository::new(self.connection).create(user).await?;

        Ok(user)
    }

    /// Gets every user account
    pub async fn get_all(&self) -> Result<Vec<UserAccount>, AppError> {
        let users = UserRepository::new(self.connection).get_all().await?;

        Ok(users)
    }

    /// Gets a user account by its `userId`
    pub async fn get_by_id(&self, id: &str) -> Result<UserAccount, AppError> {
        UserRepository::new(self.connection)
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(USER_NOT_FOUND.to_string()))
    }

    /// Merges `user` into the account with the given `userId`, creating it if absent.
    ///
    /// Returns the submitted document rather than the stored one. An update that neither
    /// modified nor inserted a document is reported as not found.
    pub async fn update(&self, id: &str, user: UserAccount) -> Result<UserAccount, AppError> {
        let outcome = UserRepository::new(self.connection)
            .update(id, user.clone())
            .await?;

        if !outcome.changed() {
            return Err(AppError::NotFound(USER_NOT_FOUND.to_string()));
        }

        Ok(user)
    }

    /// Deletes the account with the given `userId`
    pub async fn delete(&self, id: &str) -> Result<(), AppError> {
        let outcome = UserRepository::new(self.connection).delete(id).await?;

        if outcome.deleted_count == 0 {
            return Err(AppError::NotFound(USER_NOT_FOUND.to_string()));
        }

        Ok(())
    }
}
