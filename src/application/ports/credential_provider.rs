/// Source of the remote-service credential. Queried on every request so a
/// missing value is a per-request failure rather than a startup one.
pub trait CredentialProvider: Send + Sync {
    fn token(&self) -> Option<String>;
}
