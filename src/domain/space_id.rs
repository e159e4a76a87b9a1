use std::fmt;

use super::model_tier::ModelTier;

pub const DEFAULT_STANDARD_SPACE: &str = "hf-audio/whisper-large-v3";
pub const DEFAULT_TURBO_SPACE: &str = "hf-audio/whisper-large-v3-turbo";

/// Identifier of a hosted Gradio app: either `owner/name` on the hub or a
/// direct `http(s)://` base URL.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SpaceId(String);

impl SpaceId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_direct_url(&self) -> bool {
        self.0.starts_with("http://") || self.0.starts_with("https://")
    }
}

impl fmt::Display for SpaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The two Spaces a request can be routed to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpaceCatalog {
    standard: SpaceId,
    turbo: SpaceId,
}

impl SpaceCatalog {
    pub fn new(standard: SpaceId, turbo: SpaceId) -> Self {
        Self { standard, turbo }
    }

    pub fn resolve(&self, tier: ModelTier) -> &SpaceId {
        match tier {
            ModelTier::Standard => &self.standard,
            ModelTier::Turbo => &self.turbo,
        }
    }
}

impl Default for SpaceCatalog {
    fn default() -> Self {
        Self::new(
            SpaceId::new(DEFAULT_STANDARD_SPACE),
            SpaceId::new(DEFAULT_TURBO_SPACE),
        )
    }
}
