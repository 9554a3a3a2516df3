use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::Locale;
use crate::Error;

/// Project lifecycle status (closed set)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    #[serde(alias = "actif")]
    Active,
    #[serde(alias = "pause")]
    Paused,
    Stable,
    Maintenance,
    #[serde(alias = "archive")]
    Archived,
}

/// Colour family a status badge is drawn with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusTone {
    Blue,
    Orange,
    Cyan,
    Purple,
    Green,
}

impl Status {
    pub const ALL: [Status; 5] = [
        Status::Active,
        Status::Paused,
        Status::Stable,
        Status::Maintenance,
        Status::Archived,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Active => "active",
            Status::Paused => "paused",
            Status::Stable => "stable",
            Status::Maintenance => "maintenance",
            Status::Archived => "archived",
        }
    }

    pub fn tone(&self) -> StatusTone {
        match self {
            Status::Active => StatusTone::Blue,
            Status::Paused => StatusTone::Orange,
            Status::Stable => StatusTone::Cyan,
            Status::Maintenance => StatusTone::Purple,
            Status::Archived => StatusTone::Green,
        }
    }

    pub fn label(&self, locale: &Locale) -> &'static str {
        if locale.is_french() {
            match self {
                Status::Active => "Actif",
                Status::Paused => "En pause",
                Status::Stable => "Stable",
                Status::Maintenance => "Maintenance",
                Status::Archived => "Archivé",
            }
        } else {
            match self {
                Status::Active => "Active",
                Status::Paused => "Paused",
                Status::Stable => "Stable",
                Status::Maintenance => "Maintenance",
                Status::Archived => "Archived",
            }
        }
    }

    /// One-line explanation shown next to the badge
    pub fn description(&self, locale: &Locale) -> &'static str {
        if locale.is_french() {
            match self {
                Status::Active => "En développement actif",
                Status::Paused => "Développement suspendu pour le moment",
                Status::Stable => "Terminé et fonctionnel",
                Status::Maintenance => "Corrections ponctuelles uniquement",
                Status::Archived => "Projet terminé, plus maintenu",
            }
        } else {
            match self {
                Status::Active => "Under active development",
                Status::Paused => "Development on hold for now",
                Status::Stable => "Finished and working",
                Status::Maintenance => "Occasional fixes only",
                Status::Archived => "Completed, no longer maintained",
            }
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Status {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" | "actif" => Ok(Status::Active),
            "paused" | "pause" => Ok(Status::Paused),
            "stable" => Ok(Status::Stable),
            "maintenance" => Ok(Status::Maintenance),
            "archived" | "archive" => Ok(Status::Archived),
            _ => Err(Error::UnknownVariant {
                kind: "status",
                value: s.to_string(),
            }),
        }
    }
}
