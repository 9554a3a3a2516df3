use folio_core::{document_path, is_valid_locale, is_valid_slug, locale_dir, slug_from_path};
use folio_types::Locale;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::Result;
use crate::traits::{DocumentStore, RawDocument};

/// Extension carried by content documents unless configured otherwise
pub const DEFAULT_EXTENSION: &str = "mdx";

/// Document store backed by a content root on the local filesystem.
///
/// Layout: `{root}/{locale}/{slug}.{extension}`.
#[derive(Debug, Clone)]
pub struct FsDocumentStore {
    root: PathBuf,
    extension: String,
}

impl FsDocumentStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            extension: DEFAULT_EXTENSION.to_string(),
        }
    }

    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        let extension = extension.into();
        self.extension = extension.trim_start_matches('.').to_string();
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn extension(&self) -> &str {
        &self.extension
    }
}

impl DocumentStore for FsDocumentStore {
    fn has_locale(&self, locale: &Locale) -> bool {
        is_valid_locale(locale) && locale_dir(&self.root, locale).is_dir()
    }

    fn read_all(&self, locale: &Locale) -> Result<Vec<RawDocument>> {
        if !is_valid_locale(locale) {
            return Ok(Vec::new());
        }

        let dir = locale_dir(&self.root, locale);
        if !dir.is_dir() {
            return Ok(Vec::new());
        }

        let mut documents = Vec::new();

        for entry in WalkDir::new(&dir)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true)
            .sort_by_file_name()
        {
            let entry = entry?;
            if !entry.file_type().is_file() {
                continue;
            }

            let path = entry.path();
            let Some(slug) = slug_from_path(path, &self.extension) else {
                continue;
            };
            if !is_valid_slug(&slug) {
                continue;
            }

            let bytes = std::fs::read(path)?;
            documents.push(RawDocument::from_bytes(slug, path, bytes));
        }

        Ok(documents)
    }

    fn read(&self, locale: &Locale, slug: &str) -> Result<Option<RawDocument>> {
        if !is_valid_locale(locale) || !is_valid_slug(slug) {
            return Ok(None);
        }

        let path = document_path(&self.root, locale, slug, &self.extension);
        if !path.is_file() {
            return Ok(None);
        }

        let bytes = std::fs::read(&path)?;
        Ok(Some(RawDocument::from_bytes(slug, path, bytes)))
    }
}
