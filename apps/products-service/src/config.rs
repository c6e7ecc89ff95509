use core_config::{ConfigError, Environment, FromEnv, env_parse_or_default, server::ServerConfig};
use database::common::RetryConfig;
use database::postgres::PostgresConfig;
use std::time::Duration;

/// Process configuration for the products service
#[derive(Clone, Debug)]
pub struct Config {
    pub environment: Environment,
    pub server: ServerConfig,
    pub database: PostgresConfig,
    pub connect_retry: RetryConfig,
    /// Apply pending migrations before serving
    pub run_migrations: bool,
    /// How often the database probe refreshes the health service
    pub health_check_interval: Duration,
}

impl FromEnv for Config {
    /// Reads:
    /// - `APP_ENV`, `GRPC_HOST`, `GRPC_PORT`, `DATABASE_URL` and the `DB_*` pool settings
    /// - `RUN_MIGRATIONS`: defaults to true
    /// - `HEALTH_CHECK_INTERVAL_SECS`: defaults to 10
    fn from_env() -> Result<Self, ConfigError> {
        let health_check_secs: u64 = env_parse_or_default("HEALTH_CHECK_INTERVAL_SECS", "10")?;

        Ok(Self {
            environment: Environment::from_env(),
            server: ServerConfig::from_env()?,
            database: PostgresConfig::from_env()?,
            connect_retry: RetryConfig::from_env()?,
            run_migrations: env_parse_or_default("RUN_MIGRATIONS", "true")?,
            health_check_interval: Duration::from_secs(health_check_secs.max(1)),
        })
    }
}
