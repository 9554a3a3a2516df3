//! In-memory document store.

use folio_content::{DocumentStore, RawDocument};
use folio_types::Locale;
use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::fixtures::ProjectFixture;

/// `DocumentStore` holding documents in a map keyed by locale then slug.
///
/// Registering a locale with no documents models an existing but empty
/// collection directory.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    collections: BTreeMap<Locale, BTreeMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_locale(mut self, locale: &str) -> Self {
        self.collections.entry(Locale::from(locale)).or_default();
        self
    }

    pub fn with_project(self, locale: &str, fixture: ProjectFixture) -> Self {
        let slug = fixture.slug().to_string();
        self.with_document(locale, &slug, &fixture.to_document())
    }

    pub fn with_document(mut self, locale: &str, slug: &str, text: &str) -> Self {
        self.collections
            .entry(Locale::from(locale))
            .or_default()
            .insert(slug.to_string(), text.to_string());
        self
    }

    fn raw(locale: &Locale, slug: &str, text: &str) -> RawDocument {
        RawDocument::new(slug, PathBuf::from(format!("{}/{}.mdx", locale, slug)), text)
    }
}

impl DocumentStore for MemoryStore {
    fn has_locale(&self, locale: &Locale) -> bool {
        self.collections.contains_key(locale)
    }

    fn read_all(&self, locale: &Locale) -> folio_content::Result<Vec<RawDocument>> {
        Ok(self
            .collections
            .get(locale)
            .map(|docs| {
                docs.iter()
                    .map(|(slug, text)| Self::raw(locale, slug, text))
                    .collect()
            })
            .unwrap_or_default())
    }

    fn read(&self, locale: &Locale, slug: &str) -> folio_content::Result<Option<RawDocument>> {
        Ok(self
            .collections
            .get(locale)
            .and_then(|docs| docs.get(slug))
            .map(|text| Self::raw(locale, slug, text)))
    }
}
