mod env_credential_provider;
mod static_credential_provider;

pub use env_credential_provider::{DEFAULT_TOKEN_ENV_VAR, EnvCredentialProvider};
pub use static_credential_provider::StaticCredentialProvider;
