use std::time::Duration;

use config::{Config, ConfigError, File};
use serde::Deserialize;

use super::environment::Environment;
use crate::domain::{DEFAULT_STANDARD_SPACE, DEFAULT_TURBO_SPACE, SpaceCatalog, SpaceId};
use crate::infrastructure::credentials::DEFAULT_TOKEN_ENV_VAR;
use crate::infrastructure::inference::DEFAULT_HUB_BASE_URL;

pub const ENV_PREFIX: &str = "APP";
pub const DEFAULT_MAX_UPLOAD_SIZE_BYTES: usize = 50 * 1024 * 1024;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub inference: InferenceSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub max_upload_size_bytes: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InferenceSettings {
    pub hub_base_url: String,
    pub standard_space: String,
    pub turbo_space: String,
    pub token_env_var: String,
    pub request_timeout_secs: u64,
    pub connect_timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    pub level: String,
    pub enable_json: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("invalid environment: {0}")]
    InvalidEnvironment(String),
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl Settings {
    /// Layers built-in defaults, the optional `appsettings.{env}` file and
    /// `APP_`-prefixed environment variables (`APP_SERVER__PORT=8080`).
    pub fn load(environment: Environment) -> Result<Self, SettingsError> {
        let configuration = Self::builder_with_defaults()?
            .add_source(File::with_name(&environment.settings_file()).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?;

        Ok(configuration.try_deserialize()?)
    }

    /// Settings from built-in defaults only.
    pub fn defaults() -> Result<Self, SettingsError> {
        Ok(Self::builder_with_defaults()?.build()?.try_deserialize()?)
    }

    fn builder_with_defaults()
    -> Result<config::ConfigBuilder<config::builder::DefaultState>, ConfigError> {
        Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3000)?
            .set_default(
                "server.max_upload_size_bytes",
                DEFAULT_MAX_UPLOAD_SIZE_BYTES as i64,
            )?
            .set_default("inference.hub_base_url", DEFAULT_HUB_BASE_URL)?
            .set_default("inference.standard_space", DEFAULT_STANDARD_SPACE)?
            .set_default("inference.turbo_space", DEFAULT_TURBO_SPACE)?
            .set_default("inference.token_env_var", DEFAULT_TOKEN_ENV_VAR)?
            .set_default("inference.request_timeout_secs", 300)?
            .set_default("inference.connect_timeout_secs", 10)?
            .set_default("logging.level", "info")?
            .set_default("logging.enable_json", false)
    }
}

impl InferenceSettings {
    pub fn space_catalog(&self) -> SpaceCatalog {
        SpaceCatalog::new(
            SpaceId::new(self.standard_space.clone()),
            SpaceId::new(self.turbo_space.clone()),
        )
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }
}
