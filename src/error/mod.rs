//! Error types for splitrs.

use std::fmt;
use std::path::PathBuf;

/// Errors that can occur during split and glue operations.
#[derive(Debug)]
pub enum SplitError {
    /// An I/O error occurred while reading or writing files.
    Io(std::io::Error),

    /// Invalid or conflicting configuration.
    InvalidConfig {
        /// Description of what was invalid.
        message: &'static str,
    },

    /// The input path does not exist.
    InputNotFound {
        /// The path that was looked up.
        path: PathBuf,
    },

    /// A regular file was expected but the path is something else.
    NotAFile {
        /// The offending path.
        path: PathBuf,
    },

    /// A directory was expected but the path is something else.
    NotADirectory {
        /// The offending path.
        path: PathBuf,
    },

    /// A file encountered during glue has no parseable trailing index.
    MalformedChunkName {
        /// The file name that failed to parse.
        name: String,
    },
}

impl fmt::Display for SplitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SplitError::Io(e) => write!(f, "io error: {}", e),
            SplitError::InvalidConfig { message } => {
                write!(f, "invalid config: {}", message)
            }
            SplitError::InputNotFound { path } => {
                write!(f, "input not found: {}", path.display())
            }
            SplitError::NotAFile { path } => {
                write!(f, "not a regular file: {}", path.display())
            }
            SplitError::NotADirectory { path } => {
                write!(f, "not a directory: {}", path.display())
            }
            SplitError::MalformedChunkName { name } => {
                write!(f, "malformed chunk name: {:?} has no trailing index", name)
            }
        }
    }
}

impl std::error::Error for SplitError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SplitError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for SplitError {
    fn from(e: std::io::Error) -> Self {
        SplitError::Io(e)
    }
}
