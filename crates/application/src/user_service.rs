//! User record ports and application service.
//!
//! Owns the five record operations: list with filters, lookup, create,
//! merge update and delete.

use std::sync::Arc;

use async_trait::async_trait;

use utilisateur_core::{AppError, AppResult};
use utilisateur_domain::{USER_NOT_FOUND_MESSAGE, UserFilter, UserId, UserPatch, UserRecord};

// ---------------------------------------------------------------------------
// Ports
// ---------------------------------------------------------------------------

/// Repository port for user persistence.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Persists a new record. The identifier is already assigned.
    async fn create(&self, record: &UserRecord) -> AppResult<()>;

    /// Finds a record by its identifier.
    async fn find_by_id(&self, user_id: UserId) -> AppResult<Option<UserRecord>>;

    /// Overwrites the stored names of an existing record.
    ///
    /// Returns `false` when no row has the record's identifier.
    async fn update(&self, record: &UserRecord) -> AppResult<bool>;

    /// Removes a record. Returns `false` when no row had the identifier.
    async fn delete(&self, user_id: UserId) -> AppResult<bool>;

    /// Lists records matching the filter in store order.
    async fn list(&self, filter: &UserFilter) -> AppResult<Vec<UserRecord>>;
}

// ---------------------------------------------------------------------------
// Service
// ---------------------------------------------------------------------------

/// Application service for user records.
#[derive(Clone)]
pub struct UserService {
    user_repository: Arc<dyn UserRepository>,
}

impl UserService {
    /// Creates a new user service.
    #[must_use]
    pub fn new(user_repository: Arc<dyn UserRepository>) -> Self {
        Self { user_repository }
    }

    /// Lists users whose names contain the filter values.
    pub async fn list_users(&self, filter: UserFilter) -> AppResult<Vec<UserRecord>> {
        self.user_repository.list(&filter).await
    }

    /// Returns the user with the given identifier.
    pub async fn get_user(&self, user_id: UserId) -> AppResult<UserRecord> {
        self.user_repository
            .find_by_id(user_id)
            .await?
            .ok_or_else(user_not_found)
    }

    /// Creates a user. Both names are required.
    pub async fn create_user(&self, first_name: &str, last_name: &str) -> AppResult<UserRecord> {
        let record = UserRecord::create(first_name, last_name)?;
        self.user_repository.create(&record).await?;
        Ok(record)
    }

    /// Merges the non-empty fields of `patch` into the stored user.
    pub async fn update_user(&self, user_id: UserId, patch: UserPatch) -> AppResult<UserRecord> {
        let mut record = self.get_user(user_id).await?;
        if patch.is_empty() {
            return Ok(record);
        }

        record.apply_patch(patch);
        if !self.user_repository.update(&record).await? {
            return Err(user_not_found());
        }

        Ok(record)
    }

    /// Deletes the user with the given identifier.
    pub async fn delete_user(&self, user_id: UserId) -> AppResult<()> {
        if !self.user_repository.delete(user_id).await? {
            return Err(user_not_found());
        }

        Ok(())
    }
}

fn user_not_found() -> AppError {
    AppError::NotFound(USER_NOT_FOUND_MESSAGE.to_owned())
}
