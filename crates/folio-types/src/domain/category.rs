use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::Locale;
use crate::Error;

/// Project category (closed set)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[serde(alias = "école", alias = "ecole")]
    School,
    #[serde(alias = "perso")]
    Personal,
    #[serde(alias = "travail")]
    Professional,
}

impl Category {
    /// All members in display order
    pub const ALL: [Category; 3] = [Category::School, Category::Personal, Category::Professional];

    /// Canonical value as stored in front matter
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::School => "school",
            Category::Personal => "personal",
            Category::Professional => "professional",
        }
    }

    /// Display label for the given locale
    pub fn label(&self, locale: &Locale) -> &'static str {
        if locale.is_french() {
            match self {
                Category::School => "École",
                Category::Personal => "Perso",
                Category::Professional => "Travail",
            }
        } else {
            match self {
                Category::School => "School",
                Category::Personal => "Personal",
                Category::Professional => "Professional",
            }
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "school" | "école" | "ecole" => Ok(Category::School),
            "personal" | "perso" => Ok(Category::Personal),
            "professional" | "travail" => Ok(Category::Professional),
            _ => Err(Error::UnknownVariant {
                kind: "category",
                value: s.to_string(),
            }),
        }
    }
}
