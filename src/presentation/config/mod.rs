mod environment;
mod settings;

pub use environment::{ENVIRONMENT_VAR, Environment};
pub use settings::{
    DEFAULT_MAX_UPLOAD_SIZE_BYTES, ENV_PREFIX, InferenceSettings, LoggingSettings, ServerSettings,
    Settings, SettingsError,
};
