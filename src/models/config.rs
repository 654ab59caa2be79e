use std::env;

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

const CONFIG_DIR: &str = "config";
const DEFAULT_ENV: &str = "development";

/// Configuration options for the catalog service.
#[derive(Clone, Debug, Deserialize)]
pub struct ServerConfig {
    /// SQLite database path.
    pub database_url: String,
    /// Interface the HTTP server binds to.
    pub address: String,
    pub port: u16,
}

impl ServerConfig {
    /// Load configuration layered as built-in defaults, `config/default.yaml`,
    /// `config/{APP_ENV}.yaml` and finally `APP__*` environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        let app_env = env::var("APP_ENV").unwrap_or_else(|_| DEFAULT_ENV.to_string());

        Config::builder()
            .set_default("database_url", "app.db")?
            .set_default("address", "127.0.0.1")?
            .set_default("port", 8080)?
            .add_source(File::with_name(&format!("{CONFIG_DIR}/default")).required(false))
            .add_source(File::with_name(&format!("{CONFIG_DIR}/{app_env}")).required(false))
            .add_source(
                Environment::with_prefix("APP")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }
}
