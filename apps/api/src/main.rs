//! Utilisateur API composition root.

#![forbid(unsafe_code)]

mod api_config;
mod api_router;
mod api_services;
mod dto;
mod error;
mod extract;
mod handlers;
mod state;

use tracing::info;
use utilisateur_core::AppError;

use crate::api_config::{ApiConfig, UserStoreConfig, init_tracing};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = ApiConfig::load()?;

    if config.migrate_only {
        match &config.user_store {
            UserStoreConfig::Postgres(postgres) => {
                api_services::connect_and_migrate(postgres).await?;
                info!("database migrations applied successfully");
            }
            UserStoreConfig::Memory => info!("in-memory user store has no migrations to apply"),
        }
        return Ok(());
    }

    let app_state = api_services::build_app_state(&config.user_store).await?;
    info!(user_store = config.user_store.as_str(), "user store ready");

    let app = api_router::build_router(app_state, &config.frontend_url)?;
    let address = config.socket_address()?;

    let listener = tokio::net::TcpListener::bind(address)
        .await
        .map_err(|error| AppError::Internal(format!("failed to bind listener: {error}")))?;

    info!(%address, "utilisateur-api listening");

    axum::serve(listener, app)
        .await
        .map_err(|error| AppError::Internal(format!("api server error: {error}")))
}
