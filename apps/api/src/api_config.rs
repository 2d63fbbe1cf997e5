use std::env;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;

use tracing_subscriber::EnvFilter;
use utilisateur_core::AppError;

const DEFAULT_MAX_CONNECTIONS: u32 = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostgresRuntimeConfig {
    pub database_url: String,
    pub max_connections: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserStoreConfig {
    Memory,
    Postgres(PostgresRuntimeConfig),
}

impl UserStoreConfig {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Memory => "memory",
            Self::Postgres(_) => "postgres",
        }
    }
}

#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub migrate_only: bool,
    pub user_store: UserStoreConfig,
    pub frontend_url: String,
    pub api_host: String,
    pub api_port: u16,
}

impl ApiConfig {
    pub fn load() -> Result<Self, AppError> {
        let migrate_only = env::args().nth(1).as_deref() == Some("migrate");
        Self::from_lookup(migrate_only, |name| env::var(name).ok())
    }

    pub fn from_lookup(
        migrate_only: bool,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, AppError> {
        let user_store = match lookup("USER_STORE")
            .unwrap_or_else(|| "postgres".to_owned())
            .as_str()
        {
            "memory" => UserStoreConfig::Memory,
            "postgres" => {
                let database_url = required_non_empty(&lookup, "DATABASE_URL")?;
                let max_connections = lookup("DATABASE_MAX_CONNECTIONS")
                    .map(|value| {
                        value.parse::<u32>().map_err(|error| {
                            AppError::Validation(format!(
                                "invalid DATABASE_MAX_CONNECTIONS: {error}"
                            ))
                        })
                    })
                    .transpose()?
                    .unwrap_or(DEFAULT_MAX_CONNECTIONS);

                UserStoreConfig::Postgres(PostgresRuntimeConfig {
                    database_url,
                    max_connections,
                })
            }
            other => {
                return Err(AppError::Validation(format!(
                    "USER_STORE must be either 'memory' or 'postgres', got '{other}'"
                )));
            }
        };

        let frontend_url =
            lookup("FRONTEND_URL").unwrap_or_else(|| "http://localhost:3000".to_owned());
        let api_host = lookup("API_HOST").unwrap_or_else(|| "127.0.0.1".to_owned());
        let api_port = lookup("API_PORT")
            .map(|value| {
                value
                    .parse::<u16>()
                    .map_err(|error| AppError::Validation(format!("invalid API_PORT: {error}")))
            })
            .transpose()?
            .unwrap_or(3001);

        Ok(Self {
            migrate_only,
            user_store,
            frontend_url,
            api_host,
            api_port,
        })
    }

    pub fn socket_address(&self) -> Result<SocketAddr, AppError> {
        let host = IpAddr::from_str(&self.api_host).map_err(|error| {
            AppError::Validation(format!("invalid API_HOST '{}': {error}", self.api_host))
        })?;
        Ok(SocketAddr::from((host, self.api_port)))
    }
}

pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .init();
}

fn required_non_empty(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &str,
) -> Result<String, AppError> {
    let value = lookup(name).ok_or_else(|| AppError::Validation(format!("{name} is required")))?;
    if value.trim().is_empty() {
        return Err(AppError::Validation(format!("{name} must not be empty")));
    }

    Ok(value)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use utilisateur_core::AppError;

    use super::{ApiConfig, PostgresRuntimeConfig, UserStoreConfig};

    fn load(vars: &[(&str, &str)]) -> Result<ApiConfig, AppError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(name, value)| ((*name).to_owned(), (*value).to_owned()))
            .collect();
        ApiConfig::from_lookup(false, |name| vars.get(name).cloned())
    }

    #[test]
    fn postgres_store_requires_database_url() {
        let result = load(&[]);
        assert!(matches!(result, Err(AppError::Validation(ref message)) if message == "DATABASE_URL is required"));
    }

    #[test]
    fn postgres_store_reads_pool_settings() {
        let config = load(&[
            ("DATABASE_URL", "postgres://localhost/utilisateurs"),
            ("DATABASE_MAX_CONNECTIONS", "4"),
        ]);

        assert_eq!(
            config.ok().map(|config| config.user_store),
            Some(UserStoreConfig::Postgres(PostgresRuntimeConfig {
                database_url: "postgres://localhost/utilisateurs".to_owned(),
                max_connections: 4,
            }))
        );
    }

    #[test]
    fn memory_store_uses_defaults() {
        let Ok(config) = load(&[("USER_STORE", "memory")]) else {
            panic!("memory configuration must load");
        };

        assert_eq!(config.user_store, UserStoreConfig::Memory);
        assert_eq!(config.frontend_url, "http://localhost:3000");
        assert_eq!(
            config.socket_address().ok().map(|address| address.to_string()),
            Some("127.0.0.1:3001".to_owned())
        );
    }

    #[test]
    fn unknown_store_is_rejected() {
        assert!(matches!(
            load(&[("USER_STORE", "sqlite")]),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn invalid_port_is_rejected() {
        assert!(matches!(
            load(&[("USER_STORE", "memory"), ("API_PORT", "http")]),
            Err(AppError::Validation(_))
        ));
    }
}
