use crate::core::{AppError, Result};
use sqlx::mysql::{MySqlConnectOptions, MySqlPool, MySqlPoolOptions};
use std::env;
use std::str::FromStr;
use std::time::Duration;

/// Connection settings for the fleet database holding the `vehicles` table
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    /// Connections kept open while idle
    pub pool_size: u32,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
}

fn env_u32(key: &str, default: u32) -> Result<u32> {
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|_| AppError::Configuration(format!("Invalid {}", key))),
        Err(_) => Ok(default),
    }
}

impl DatabaseConfig {
    pub fn from_env() -> Result<Self> {
        let url = env::var("DATABASE_URL")
            .map_err(|_| AppError::Configuration("DATABASE_URL not set".to_string()))?;

        Ok(DatabaseConfig {
            url,
            pool_size: env_u32("DATABASE_POOL_SIZE", 2)?,
            max_connections: env_u32("DATABASE_MAX_CONNECTIONS", 10)?,
            acquire_timeout: Duration::from_secs(env_u32("DATABASE_ACQUIRE_TIMEOUT_SECS", 5)?.into()),
        })
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_connections == 0 {
            return Err(AppError::Configuration(
                "DATABASE_MAX_CONNECTIONS must be greater than 0".to_string(),
            ));
        }

        if self.pool_size > self.max_connections {
            return Err(AppError::Configuration(format!(
                "DATABASE_POOL_SIZE ({}) exceeds DATABASE_MAX_CONNECTIONS ({})",
                self.pool_size, self.max_connections
            )));
        }

        MySqlConnectOptions::from_str(&self.url)
            .map(|_| ())
            .map_err(|e| AppError::Configuration(format!("Invalid DATABASE_URL: {}", e)))
    }

    /// Pool for the read-only vehicle lookups. Quotes fail fast when the
    /// store is saturated instead of queueing behind slow connections.
    pub async fn create_pool(&self) -> Result<MySqlPool> {
        let options = MySqlConnectOptions::from_str(&self.url)
            .map_err(|e| AppError::Configuration(format!("Invalid DATABASE_URL: {}", e)))?;

        let pool = MySqlPoolOptions::new()
            .max_connections(self.max_connections)
            .min_connections(self.pool_size)
            .acquire_timeout(self.acquire_timeout)
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .test_before_acquire(true)
            .connect_with(options)
            .await?;

        tracing::debug!(
            max_connections = self.max_connections,
            min_connections = self.pool_size,
            "Vehicle database pool connected"
        );

        Ok(pool)
    }
}
