//! Application configuration.

use serde::Deserialize;
use std::path::Path;

/// Application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Database configuration.
    pub database: DatabaseConfig,
    /// Domain engine policy configuration.
    #[serde(default)]
    pub engine: EngineConfig,
    /// Results snapshot configuration.
    pub results: ResultsConfig,
}

/// Database connection configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// `PostgreSQL` connection URL.
    pub url: String,
    /// Maximum number of connections in the pool.
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    /// Minimum number of connections in the pool.
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
    /// Per-call execution budget when acquiring a connection, in seconds.
    #[serde(default = "default_acquire_timeout_secs")]
    pub acquire_timeout_secs: u64,
}

/// Domain engine policy configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EngineConfig {
    /// When true, structural edits to a published session are rejected
    /// with a conflict instead of being delegated to the caller's
    /// authorization layer.
    #[serde(default)]
    pub lock_published_sessions: bool,
}

/// Results snapshot configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ResultsConfig {
    /// Key for the integrity token over persisted result payloads.
    pub signing_key: String,
}

const fn default_max_connections() -> u32 {
    100
}

const fn default_min_connections() -> u32 {
    5
}

const fn default_acquire_timeout_secs() -> u64 {
    10
}

impl Config {
    /// Load configuration from files and environment variables.
    ///
    /// Configuration is loaded in the following order:
    /// 1. `config/default.toml`
    /// 2. `config/{environment}.toml` (based on `OPENBALLOT_ENV`)
    /// 3. Environment variables with `OPENBALLOT_` prefix
    pub fn load() -> Result<Self, config::ConfigError> {
        let env = std::env::var("OPENBALLOT_ENV").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{env}")).required(false))
            .add_source(
                config::Environment::with_prefix("OPENBALLOT")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }

    /// Load configuration from a specific file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::from(path.as_ref()))
            .add_source(
                config::Environment::with_prefix("OPENBALLOT")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}
