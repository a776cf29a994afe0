//! Account service configuration.

use std::env;

use common::{DatabaseConfig, ServiceConfig};

/// Account service configuration.
#[derive(Debug, Clone)]
pub struct AccountServiceConfig {
    /// Bind address, port, and log level
    pub service: ServiceConfig,
    /// Database connection settings
    pub database: DatabaseConfig,
}

impl AccountServiceConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    ///
    /// Missing or unparsable values fall back to the defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        Self {
            service: ServiceConfig {
                service_name: defaults.service.service_name,
                host: lookup("ACCOUNT_SERVICE_HOST").unwrap_or(defaults.service.host),
                port: lookup("ACCOUNT_SERVICE_PORT")
                    .and_then(|p| p.parse().ok())
                    .unwrap_or(defaults.service.port),
                log_level: lookup("ACCOUNT_SERVICE_LOG_LEVEL")
                    .unwrap_or(defaults.service.log_level),
            },
            database: DatabaseConfig {
                url: lookup("ACCOUNT_SERVICE_DATABASE_URL")
                    .or_else(|| lookup("DATABASE_URL"))
                    .unwrap_or(defaults.database.url),
                max_connections: lookup("ACCOUNT_SERVICE_DB_MAX_CONNECTIONS")
                    .and_then(|n| n.parse().ok())
                    .unwrap_or(defaults.database.max_connections),
                min_connections: lookup("ACCOUNT_SERVICE_DB_MIN_CONNECTIONS")
                    .and_then(|n| n.parse().ok())
                    .unwrap_or(defaults.database.min_connections),
            },
        }
    }
}

impl Default for AccountServiceConfig {
    fn default() -> Self {
        Self {
            service: ServiceConfig {
                service_name: "account-service".to_string(),
                ..ServiceConfig::default()
            },
            database: DatabaseConfig::default(),
        }
    }
}
