use folio_core::is_valid_slug;
use folio_types::{Locale, ProjectRecord};
use serde::{Deserialize, Serialize};

use crate::document::parse_document;
use crate::schema::DocumentIssue;
use crate::traits::{DocumentStore, RawDocument};
use crate::{Error, Result};

/// What to do with a malformed document while listing a collection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoadPolicy {
    /// Skip it, log a warning and keep it in the load report
    #[default]
    Lenient,
    /// Abort the whole load
    Strict,
}

/// Result of listing one locale collection
#[derive(Debug, Clone)]
pub struct CatalogLoad {
    pub requested: Locale,
    /// Collection actually read; None when neither the requested nor the
    /// default locale has a collection
    pub resolved: Option<Locale>,
    /// Records sorted by date, most recent first
    pub records: Vec<ProjectRecord>,
    pub issues: Vec<DocumentIssue>,
}

impl CatalogLoad {
    pub fn fell_back(&self) -> bool {
        self.resolved
            .as_ref()
            .is_some_and(|resolved| resolved != &self.requested)
    }
}

/// One `(locale, slug)` pair a static renderer must emit
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteParam {
    pub locale: Locale,
    pub slug: String,
}

/// Health of one locale collection
#[derive(Debug, Clone, Serialize)]
pub struct CheckReport {
    pub locale: Locale,
    pub resolved: Option<Locale>,
    pub total: usize,
    pub valid: usize,
    pub issues: Vec<DocumentIssue>,
}

impl CheckReport {
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }
}

/// Locale-aware project catalog over a document store.
///
/// Listing falls back to the default locale a whole collection at a time;
/// single lookups fall back one record at a time. Nothing is cached:
/// every call reads the store again.
pub struct Catalog {
    store: Box<dyn DocumentStore>,
    default_locale: Locale,
    policy: LoadPolicy,
}

impl Catalog {
    pub fn new(store: Box<dyn DocumentStore>, default_locale: impl Into<Locale>) -> Self {
        Self {
            store,
            default_locale: default_locale.into(),
            policy: LoadPolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: LoadPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn default_locale(&self) -> &Locale {
        &self.default_locale
    }

    pub fn policy(&self) -> LoadPolicy {
        self.policy
    }

    /// Collection that listing `locale` will read
    pub fn resolve_collection(&self, locale: &Locale) -> Option<Locale> {
        if self.store.has_locale(locale) {
            return Some(locale.clone());
        }

        if locale != &self.default_locale && self.store.has_locale(&self.default_locale) {
            tracing::debug!(
                requested = %locale,
                fallback = %self.default_locale,
                "locale collection missing, falling back to default"
            );
            return Some(self.default_locale.clone());
        }

        None
    }

    /// All projects of a locale, most recent first
    pub fn list_projects(&self, locale: &Locale) -> Result<Vec<ProjectRecord>> {
        Ok(self.list_projects_with_report(locale)?.records)
    }

    /// All projects of a locale, together with the documents that were
    /// skipped as malformed
    pub fn list_projects_with_report(&self, locale: &Locale) -> Result<CatalogLoad> {
        self.load(locale, self.policy)
    }

    /// One project by slug, falling back to the default locale when the
    /// requested locale has no document for it
    pub fn get_project(&self, slug: &str, locale: &Locale) -> Result<Option<ProjectRecord>> {
        if !is_valid_slug(slug) {
            return Ok(None);
        }

        if let Some(raw) = self.store.read(locale, slug)? {
            return parse_strict(&raw, locale).map(Some);
        }

        if locale == &self.default_locale {
            return Ok(None);
        }

        match self.store.read(&self.default_locale, slug)? {
            Some(raw) => {
                tracing::debug!(
                    slug,
                    requested = %locale,
                    fallback = %self.default_locale,
                    "record missing, falling back to default locale"
                );
                parse_strict(&raw, &self.default_locale).map(Some)
            }
            None => Ok(None),
        }
    }

    /// Featured projects of a locale, in listing order
    pub fn featured_projects(&self, locale: &Locale) -> Result<Vec<ProjectRecord>> {
        Ok(self
            .list_projects(locale)?
            .into_iter()
            .filter(|p| p.is_featured())
            .collect())
    }

    /// Every `(locale, slug)` route for the given locales
    pub fn static_params(&self, locales: &[Locale]) -> Result<Vec<RouteParam>> {
        let mut params = Vec::new();
        for locale in locales {
            for record in self.list_projects(locale)? {
                params.push(RouteParam {
                    locale: locale.clone(),
                    slug: record.metadata.slug,
                });
            }
        }
        Ok(params)
    }

    /// Report every malformed document of the collection `locale` resolves to
    pub fn check(&self, locale: &Locale) -> Result<CheckReport> {
        let load = self.load(locale, LoadPolicy::Lenient)?;
        let total = load.records.len()
            + load
                .issues
                .iter()
                .map(|i| &i.path)
                .collect::<std::collections::BTreeSet<_>>()
                .len();

        Ok(CheckReport {
            locale: load.requested,
            resolved: load.resolved,
            total,
            valid: load.records.len(),
            issues: load.issues,
        })
    }

    fn load(&self, locale: &Locale, policy: LoadPolicy) -> Result<CatalogLoad> {
        let Some(resolved) = self.resolve_collection(locale) else {
            return Ok(CatalogLoad {
                requested: locale.clone(),
                resolved: None,
                records: Vec::new(),
                issues: Vec::new(),
            });
        };

        let mut records = Vec::new();
        let mut issues = Vec::new();

        for raw in self.store.read_all(&resolved)? {
            match parse_document(&raw, &resolved) {
                Ok(record) => records.push(record),
                Err(doc_issues) => {
                    if policy == LoadPolicy::Strict {
                        return Err(Error::Malformed {
                            path: raw.path,
                            issues: doc_issues,
                        });
                    }
                    for issue in &doc_issues {
                        tracing::warn!(
                            path = %issue.path.display(),
                            kind = %issue.kind,
                            "skipping malformed document: {}",
                            issue.reason
                        );
                    }
                    issues.extend(doc_issues);
                }
            }
        }

        // Stable: equal dates keep file-name order
        records.sort_by(|a, b| b.date().cmp(a.date()));

        Ok(CatalogLoad {
            requested: locale.clone(),
            resolved: Some(resolved),
            records,
            issues,
        })
    }
}

fn parse_strict(raw: &RawDocument, locale: &Locale) -> Result<ProjectRecord> {
    parse_document(raw, locale).map_err(|issues| Error::Malformed {
        path: raw.path.clone(),
        issues,
    })
}
