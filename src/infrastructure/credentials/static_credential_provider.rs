use crate::application::ports::CredentialProvider;

/// Fixed credential, for tests and scaffolding.
pub struct StaticCredentialProvider(Option<String>);

impl StaticCredentialProvider {
    pub fn with_token(token: impl Into<String>) -> Self {
        Self(Some(token.into()))
    }

    pub fn missing() -> Self {
        Self(None)
    }
}

impl CredentialProvider for StaticCredentialProvider {
    fn token(&self) -> Option<String> {
        self.0.clone()
    }
}
