use crate::{Error, Result};
use folio_content::{DEFAULT_EXTENSION, LoadPolicy};
use folio_core::is_valid_locale;
use folio_types::Locale;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Config file looked up in the working directory by default
pub const CONFIG_FILE_NAME: &str = "folio.toml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Content root; relative paths resolve against the config file's directory
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_root: Option<PathBuf>,
    pub default_locale: Locale,
    pub locales: Vec<Locale>,
    pub extension: String,
    pub policy: LoadPolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            content_root: None,
            default_locale: Locale::from("fr"),
            locales: vec![Locale::from("fr"), Locale::from("en")],
            extension: DEFAULT_EXTENSION.to_string(),
            policy: LoadPolicy::default(),
        }
    }
}

impl Config {
    /// Load the config at `path`; a missing file yields the defaults
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.normalized()
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn default_path() -> PathBuf {
        PathBuf::from(CONFIG_FILE_NAME)
    }

    /// Locales a site is built for, default first
    pub fn supported_locales(&self) -> &[Locale] {
        &self.locales
    }

    pub fn is_supported(&self, locale: &Locale) -> bool {
        self.locales.contains(locale)
    }

    fn normalized(mut self) -> Result<Self> {
        if self.default_locale.as_str().trim().is_empty() {
            return Err(Error::Config("default_locale must not be empty".to_string()));
        }
        if let Some(bad) = std::iter::once(&self.default_locale)
            .chain(self.locales.iter())
            .find(|l| !is_valid_locale(l))
        {
            return Err(Error::Config(format!(
                "locale '{}' cannot name a collection directory",
                bad
            )));
        }

        self.extension = self.extension.trim_start_matches('.').to_string();
        if self.extension.is_empty() {
            return Err(Error::Config("extension must not be empty".to_string()));
        }

        // The default locale always leads the supported list
        self.locales.insert(0, self.default_locale.clone());
        let mut seen = std::collections::BTreeSet::new();
        self.locales.retain(|l| seen.insert(l.clone()));

        Ok(self)
    }
}
