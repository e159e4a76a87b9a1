use std::fmt;

/// Remote model tier chosen by the caller-supplied `model` form field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ModelTier {
    #[default]
    Standard,
    Turbo,
}

impl ModelTier {
    /// Only the exact selector `"turbo"` picks the turbo tier; anything else,
    /// including a missing field, falls back to standard.
    pub fn from_selector(selector: Option<&str>) -> Self {
        match selector {
            Some("turbo") => ModelTier::Turbo,
            _ => ModelTier::Standard,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ModelTier::Standard => "standard",
            ModelTier::Turbo => "turbo",
        }
    }
}

impl fmt::Display for ModelTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
