use serde::{Deserialize, Serialize};
use std::fmt;

/// Locale identifier naming one content collection (e.g. "fr", "en")
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Locale(String);

impl Locale {
    /// Create a new Locale from a string
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the locale as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether display labels for this locale should be French
    pub fn is_french(&self) -> bool {
        self.0 == "fr" || self.0.starts_with("fr-") || self.0.starts_with("fr_")
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for Locale {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for Locale {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl AsRef<str> for Locale {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
