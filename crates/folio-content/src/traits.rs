use folio_types::Locale;
use std::path::PathBuf;

use crate::Result;

/// Read-only access to locale collections of project documents
///
/// Responsibilities:
/// - Report whether a locale collection exists
/// - Enumerate a collection's documents in file-name order
/// - Fetch a single document by slug
pub trait DocumentStore: Send + Sync {
    /// Whether a collection (directory) exists for this locale
    fn has_locale(&self, locale: &Locale) -> bool;

    /// Every document of a collection, sorted by file name.
    /// A missing collection yields an empty list.
    fn read_all(&self, locale: &Locale) -> Result<Vec<RawDocument>>;

    /// One document of a collection, or None if it does not exist
    fn read(&self, locale: &Locale, slug: &str) -> Result<Option<RawDocument>>;
}

/// Unparsed document text together with where it came from
#[derive(Debug, Clone)]
pub struct RawDocument {
    pub slug: String,
    pub path: PathBuf,
    pub text: String,
    /// Why the stored bytes could not be read as UTF-8 text
    pub decode_error: Option<String>,
}

impl RawDocument {
    pub fn new(slug: impl Into<String>, path: impl Into<PathBuf>, text: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            path: path.into(),
            text: text.into(),
            decode_error: None,
        }
    }

    /// Decode stored bytes. Invalid UTF-8 does not fail here; it is kept
    /// on the document and reported when the document is parsed.
    pub fn from_bytes(slug: impl Into<String>, path: impl Into<PathBuf>, bytes: Vec<u8>) -> Self {
        match String::from_utf8(bytes) {
            Ok(text) => Self::new(slug, path, text),
            Err(err) => Self {
                slug: slug.into(),
                path: path.into(),
                text: String::from_utf8_lossy(err.as_bytes()).into_owned(),
                decode_error: Some(format!("document is not valid UTF-8: {}", err.utf8_error())),
            },
        }
    }
}
