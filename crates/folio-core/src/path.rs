use folio_types::Locale;
use std::path::{Path, PathBuf};

pub type Result<T> = std::result::Result<T, Error>;

/// Environment variable overriding the content root
pub const CONTENT_DIR_ENV: &str = "FOLIO_CONTENT_DIR";

/// Content root used when nothing else is configured
pub const DEFAULT_CONTENT_DIR: &str = "content/projects";

#[derive(Debug)]
pub enum Error {
    Io(std::io::Error),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Io(err) => write!(f, "IO error: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

/// Resolve the content root directory based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. FOLIO_CONTENT_DIR environment variable (with tilde expansion)
/// 3. Path from the config file
/// 4. ./content/projects relative to the current working directory
pub fn resolve_content_root(explicit_path: Option<&str>, configured: Option<&Path>) -> Result<PathBuf> {
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(path));
    }

    if let Ok(env_path) = std::env::var(CONTENT_DIR_ENV)
        && !env_path.is_empty()
    {
        return Ok(expand_tilde(&env_path));
    }

    if let Some(path) = configured {
        return Ok(path.to_path_buf());
    }

    let cwd = std::env::current_dir()?;
    Ok(cwd.join(DEFAULT_CONTENT_DIR))
}

/// Expand tilde (~) in paths to the user's home directory
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(stripped);
    }
    PathBuf::from(path)
}

/// Resolve `path` against `base` unless it is already absolute
pub fn resolve_relative(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}

/// Directory holding one locale's documents
pub fn locale_dir(content_root: &Path, locale: &Locale) -> PathBuf {
    content_root.join(locale.as_str())
}

/// Storage path of `{locale}/{slug}.{extension}`
pub fn document_path(content_root: &Path, locale: &Locale, slug: &str, extension: &str) -> PathBuf {
    locale_dir(content_root, locale).join(format!("{}.{}", slug, extension))
}

/// Slug derived from a document path, if it carries `extension`
pub fn slug_from_path(path: &Path, extension: &str) -> Option<String> {
    if path.extension().is_none_or(|e| e != extension) {
        return None;
    }
    let stem = path.file_stem()?.to_str()?;
    if stem.is_empty() {
        return None;
    }
    Some(stem.to_string())
}

/// Whether a slug can name a document inside a locale directory.
///
/// Rejects anything that would escape the directory or address a hidden file.
pub fn is_valid_slug(slug: &str) -> bool {
    is_plain_segment(slug)
}

/// Whether a locale can name a collection directory under the content root.
///
/// Same rules as slugs: `.`, `..`, separators and hidden names never address
/// a collection.
pub fn is_valid_locale(locale: &Locale) -> bool {
    is_plain_segment(locale.as_str())
}

fn is_plain_segment(name: &str) -> bool {
    !name.is_empty()
        && !name.starts_with('.')
        && !name.contains(['/', '\\'])
        && !name.contains("..")
        && !name.contains('\0')
}
