use std::sync::Arc;

use utilisateur_application::{UserRepository, UserService};
use utilisateur_core::AppError;
use utilisateur_infrastructure::{InMemoryUserRepository, PostgresUserRepository};

use crate::api_config::UserStoreConfig;
use crate::state::AppState;

use super::database::connect_and_migrate;

pub async fn build_app_state(user_store: &UserStoreConfig) -> Result<AppState, AppError> {
    let user_repository: Arc<dyn UserRepository> = match user_store {
        UserStoreConfig::Memory => Arc::new(InMemoryUserRepository::new()),
        UserStoreConfig::Postgres(postgres) => {
            let pool = connect_and_migrate(postgres).await?;
            Arc::new(PostgresUserRepository::new(pool))
        }
    };

    Ok(AppState {
        user_service: UserService::new(user_repository),
    })
}
