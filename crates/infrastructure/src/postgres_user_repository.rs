//! PostgreSQL-backed user repository.

use async_trait::async_trait;
use sqlx::PgPool;

use utilisateur_application::UserRepository;
use utilisateur_core::{AppError, AppResult};
use utilisateur_domain::{UserFilter, UserId, UserRecord};

/// PostgreSQL implementation of the user repository port.
#[derive(Clone)]
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    /// Creates a repository with the provided connection pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct UserRow {
    id: uuid::Uuid,
    prenom: String,
    nom: String,
}

impl From<UserRow> for UserRecord {
    fn from(row: UserRow) -> Self {
        UserRecord::from_parts(UserId::from_uuid(row.id), row.prenom, row.nom)
    }
}

mod read;
mod write;

#[cfg(test)]
mod tests;

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn create(&self, record: &UserRecord) -> AppResult<()> {
        self.create_impl(record).await
    }

    async fn find_by_id(&self, user_id: UserId) -> AppResult<Option<UserRecord>> {
        self.find_by_id_impl(user_id).await
    }

    async fn update(&self, record: &UserRecord) -> AppResult<bool> {
        self.update_impl(record).await
    }

    async fn delete(&self, user_id: UserId) -> AppResult<bool> {
        self.delete_impl(user_id).await
    }

    async fn list(&self, filter: &UserFilter) -> AppResult<Vec<UserRecord>> {
        self.list_impl(filter).await
    }
}

fn internal(operation: &str) -> impl FnOnce(sqlx::Error) -> AppError + '_ {
    move |error| AppError::Internal(format!("failed to {operation}: {error}"))
}
