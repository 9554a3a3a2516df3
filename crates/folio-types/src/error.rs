use std::fmt;

/// Result type for folio-types operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the types layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A string did not name a member of a closed enumeration
    UnknownVariant {
        kind: &'static str,
        value: String,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnknownVariant { kind, value } => {
                write!(f, "unknown {} '{}'", kind, value)
            }
        }
    }
}

impl std::error::Error for Error {}
