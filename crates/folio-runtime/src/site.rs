use folio_content::{Catalog, CatalogLoad, CheckReport, FsDocumentStore, RouteParam};
use folio_core::{expand_tilde, resolve_content_root, resolve_relative};
use folio_engine::{CatalogView, FilterState, derive_view};
use folio_types::Locale;
use std::path::{Path, PathBuf};

use crate::Result;
use crate::config::Config;

/// A filtered listing together with what the load reported
#[derive(Debug, Clone)]
pub struct ListOutcome {
    pub load: CatalogLoad,
    pub view: CatalogView,
}

/// A configured site: config, resolved content root and its catalog
pub struct Site {
    config: Config,
    content_root: PathBuf,
    catalog: Catalog,
}

impl Site {
    /// Open the site described by the config at `config_path`.
    ///
    /// `content_dir` overrides every other content root source.
    pub fn open(config_path: &Path, content_dir: Option<&str>) -> Result<Self> {
        let config = Config::load_from(config_path)?;
        Self::with_config(config, config_path.parent(), content_dir)
    }

    /// Build a site from an already loaded config. Relative config paths
    /// resolve against `config_dir`.
    pub fn with_config(
        config: Config,
        config_dir: Option<&Path>,
        content_dir: Option<&str>,
    ) -> Result<Self> {
        let configured = config.content_root.as_ref().map(|root| {
            let root = expand_tilde(&root.to_string_lossy());
            match config_dir {
                Some(dir) => resolve_relative(dir, &root),
                None => root,
            }
        });
        let content_root = resolve_content_root(content_dir, configured.as_deref())?;

        tracing::debug!(
            content_root = %content_root.display(),
            default_locale = %config.default_locale,
            "opening site"
        );

        let store = FsDocumentStore::new(&content_root).with_extension(config.extension.clone());
        let catalog = Catalog::new(Box::new(store), config.default_locale.clone())
            .with_policy(config.policy);

        Ok(Self {
            config,
            content_root,
            catalog,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn content_root(&self) -> &Path {
        &self.content_root
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn default_locale(&self) -> &Locale {
        &self.config.default_locale
    }

    pub fn supported_locales(&self) -> &[Locale] {
        self.config.supported_locales()
    }

    pub fn is_supported(&self, locale: &Locale) -> bool {
        self.config.is_supported(locale)
    }

    /// Locale to serve: the requested one, or the default when none is
    /// given. Unsupported locales are served anyway and rely on fallback.
    pub fn resolve_locale(&self, requested: Option<&str>) -> Locale {
        match requested {
            Some(code) if !code.trim().is_empty() => {
                let locale = Locale::from(code.trim());
                if !self.is_supported(&locale) {
                    tracing::warn!(
                        locale = %locale,
                        "locale is not listed in the site config"
                    );
                }
                locale
            }
            _ => self.default_locale().clone(),
        }
    }

    /// Load a locale and derive the filtered view for `state`
    pub fn list(&self, locale: &Locale, state: &FilterState) -> Result<ListOutcome> {
        let load = self.catalog.list_projects_with_report(locale)?;
        let view = derive_view(&load.records, state);
        Ok(ListOutcome { load, view })
    }

    /// Every static route of the site, over all supported locales
    pub fn routes(&self) -> Result<Vec<RouteParam>> {
        Ok(self.catalog.static_params(self.supported_locales())?)
    }

    /// Check one locale, or every supported locale when none is given
    pub fn check(&self, locale: Option<&Locale>) -> Result<Vec<CheckReport>> {
        let locales: Vec<Locale> = match locale {
            Some(l) => vec![l.clone()],
            None => self.supported_locales().to_vec(),
        };

        let mut reports = Vec::with_capacity(locales.len());
        for locale in &locales {
            reports.push(self.catalog.check(locale)?);
        }
        Ok(reports)
    }
}
