use std::fmt;

/// Result type for writerops-types operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types raised while parsing user-facing values into record types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Difficulty was neither 1-3 nor a star string
    InvalidDifficulty(String),

    /// Highlight type outside the fixed vocabulary
    InvalidHighlightKind(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidDifficulty(raw) => {
                write!(f, "Invalid difficulty '{}': expected 1, 2, 3 or ★/★★/★★★", raw)
            }
            Error::InvalidHighlightKind(raw) => write!(f, "Invalid highlight type '{}'", raw),
        }
    }
}

impl std::error::Error for Error {}
