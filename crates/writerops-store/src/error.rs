use std::fmt;
use std::path::PathBuf;

/// Result type for writerops-store operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the store layer
#[derive(Debug)]
pub enum Error {
    /// Reading or writing a file failed
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A stored file exists but is not valid JSON for its type
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// A directory a command depends on does not exist
    MissingStorage(PathBuf),

    /// Data directory could not be resolved
    Config(String),
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io { path, source } => write!(f, "IO error at {}: {}", path.display(), source),
            Error::Parse { path, source } => {
                write!(f, "Malformed JSON in {}: {}", path.display(), source)
            }
            Error::MissingStorage(path) => {
                write!(f, "Required directory not found: {}", path.display())
            }
            Error::Config(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io { source, .. } => Some(source),
            Error::Parse { source, .. } => Some(source),
            Error::MissingStorage(_) | Error::Config(_) => None,
        }
    }
}
