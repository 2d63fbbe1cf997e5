use async_trait::async_trait;
use tokio::sync::RwLock;
use utilisateur_application::UserRepository;
use utilisateur_core::AppResult;
use utilisateur_domain::{UserFilter, UserId, UserRecord};

/// In-memory user repository implementation.
///
/// Rows are kept in insertion order, which is the order `list` returns.
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    rows: RwLock<Vec<UserRecord>>,
}

impl InMemoryUserRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self {
            rows: RwLock::new(Vec::new()),
        }
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, record: &UserRecord) -> AppResult<()> {
        self.rows.write().await.push(record.clone());
        Ok(())
    }

    async fn find_by_id(&self, user_id: UserId) -> AppResult<Option<UserRecord>> {
        Ok(self
            .rows
            .read()
            .await
            .iter()
            .find(|row| row.id() == user_id)
            .cloned())
    }

    async fn update(&self, record: &UserRecord) -> AppResult<bool> {
        let mut rows = self.rows.write().await;
        let Some(row) = rows.iter_mut().find(|row| row.id() == record.id()) else {
            return Ok(false);
        };

        *row = record.clone();
        Ok(true)
    }

    async fn delete(&self, user_id: UserId) -> AppResult<bool> {
        let mut rows = self.rows.write().await;
        let Some(position) = rows.iter().position(|row| row.id() == user_id) else {
            return Ok(false);
        };

        rows.remove(position);
        Ok(true)
    }

    async fn list(&self, filter: &UserFilter) -> AppResult<Vec<UserRecord>> {
        Ok(self
            .rows
            .read()
            .await
            .iter()
            .filter(|row| filter.matches(row))
            .cloned()
            .collect())
    }
}
