use crate::application::ports::CredentialProvider;

pub const DEFAULT_TOKEN_ENV_VAR: &str = "HUGGINGFACE_TOKEN";

/// Reads the credential from a process environment variable on every call.
pub struct EnvCredentialProvider {
    var_name: String,
}

impl EnvCredentialProvider {
    pub fn new(var_name: impl Into<String>) -> Self {
        Self {
            var_name: var_name.into(),
        }
    }

    pub fn var_name(&self) -> &str {
        &self.var_name
    }
}

impl Default for EnvCredentialProvider {
    fn default() -> Self {
        Self::new(DEFAULT_TOKEN_ENV_VAR)
    }
}

impl CredentialProvider for EnvCredentialProvider {
    fn token(&self) -> Option<String> {
        std::env::var(&self.var_name).ok()
    }
}
