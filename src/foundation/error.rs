use std::path::PathBuf;

/// Result alias used throughout the crate.
pub type PxvwResult<T> = Result<T, PxvwError>;

/// Errors produced while validating inputs or converting a stylesheet.
#[derive(thiserror::Error, Debug)]
pub enum PxvwError {
    /// The input stylesheet could not be opened for reading.
    #[error("the file's path is incorrect: '{}'", path.display())]
    InvalidPath {
        /// Path as supplied by the caller.
        path: PathBuf,
        /// Underlying OS error.
        #[source]
        source: std::io::Error,
    },

    /// A viewport, precision, or output setting was rejected.
    #[error("validation error: {0}")]
    Validation(String),

    /// Strict mode only: a px token did not carry a finite number.
    #[error("numeric parse error on line {line}: '{token}' is not a pixel length")]
    NumericParse {
        /// 1-based line number.
        line: usize,
        /// Token as it appeared in the line.
        token: String,
    },

    /// The options file could not be read or parsed.
    #[error("config error: {0}")]
    Config(String),

    /// IO failure while copying, reading, or writing the working copy.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Any other failure, with its context chain.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl PxvwError {
    /// Build a [`PxvwError::Validation`].
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`PxvwError::Config`].
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub(crate) fn invalid_path(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::InvalidPath {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
