use std::fmt;
use std::path::PathBuf;

use crate::schema::DocumentIssue;

/// Result type for folio-content operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the content layer
#[derive(Debug)]
pub enum Error {
    /// IO operation failed
    Io(std::io::Error),

    /// Walkdir error
    WalkDir(walkdir::Error),

    /// Document metadata failed validation
    Malformed {
        path: PathBuf,
        issues: Vec<DocumentIssue>,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::WalkDir(err) => write!(f, "Directory traversal error: {}", err),
            Error::Malformed { path, issues } => {
                let reasons: Vec<&str> = issues.iter().map(|i| i.reason.as_str()).collect();
                write!(
                    f,
                    "Malformed document {}: {}",
                    path.display(),
                    reasons.join("; ")
                )
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            Error::WalkDir(err) => Some(err),
            Error::Malformed { .. } => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<walkdir::Error> for Error {
    fn from(err: walkdir::Error) -> Self {
        Error::WalkDir(err)
    }
}
