use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use utilisateur_core::AppError;

use crate::api_config::PostgresRuntimeConfig;

pub async fn connect_and_migrate(config: &PostgresRuntimeConfig) -> Result<PgPool, AppError> {
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.database_url)
        .await
        .map_err(|error| AppError::Internal(format!("failed to connect to database: {error}")))?;

    sqlx::migrate!("../../crates/infrastructure/migrations")
        .run(&pool)
        .await
        .map_err(|error| AppError::Internal(format!("failed to run migrations: {error}")))?;

    Ok(pool)
}
