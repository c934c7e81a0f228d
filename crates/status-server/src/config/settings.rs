//! Configuration management

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub session: SessionConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// MySQL coordinates for the connectivity probe.
///
/// Defaults match the deployment this page diagnoses: a `mysql` container on
/// the compose network with the stock demo credentials. Override via config
/// file or `STATUS__DATABASE__*` environment variables.
#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub database: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SessionConfig {
    pub redis_url: String,
    pub cookie_name: String,
    pub ttl_seconds: i64,
}

impl Settings {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = Self::defaults(Config::builder())?
            .add_source(File::with_name("config/default").required(false))
            .add_source(
                Environment::with_prefix("STATUS")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }

    /// Code defaults: the coordinates of the demo deployment this page
    /// diagnoses, including its stock credentials.
    fn defaults(
        builder: ConfigBuilder<DefaultState>,
    ) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        builder
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8080)?
            .set_default("database.host", "mysql")?
            .set_default("database.port", 3306)?
            .set_default("database.username", "root")?
            .set_default("database.password", "root")?
            .set_default("database.database", "app_db")?
            .set_default("session.redis_url", "redis://redis:6379")?
            .set_default("session.cookie_name", "status_sid")?
            .set_default("session.ttl_seconds", 86400)
    }
}
