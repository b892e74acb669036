//! Centralized error handling for reelquery.
//!
//! Everything that can fail outside the core filter and analytics passes
//! (reading the dataset, parsing settings, writing output) reports a
//! [`QueryError`]. Coercion failures inside the core are not errors: they are
//! `None` values resolved by the filter and analytics policies.
//!
//! ## The `From` Trait for Error Conversion
//!
//! `From<E>` impls let the `?` operator lift library errors automatically:
//!
//! ```no_run
//! use reelquery::error::Result;
//!
//! fn read_settings(path: &str) -> Result<String> {
//!     let content = std::fs::read_to_string(path)?;
//!     Ok(content)
//! }
//! ```
//!
//! ## Context Extension Trait
//!
//! [`ResultExt`] adds `.context()` to any `Result` whose error converts into
//! [`QueryError`]:
//!
//! ```no_run
//! use reelquery::error::ResultExt as _;
//!
//! fn load() -> reelquery::error::Result<String> {
//!     std::fs::read_to_string("movies.csv").context("Failed to load dataset")
//! }
//! ```

use std::fmt;

/// Main error type for reelquery operations.
#[derive(Debug)]
pub enum QueryError {
    /// I/O errors (opening the dataset, writing exports)
    Io(std::io::Error),

    /// The delimited file could not be read as records
    Dataset(String),

    /// JSON encoding or decoding failed
    Serialization(String),

    /// Settings file or flag combination is unusable
    Config(String),

    /// Input file missing or path unusable
    InvalidPath(String),

    /// Generic error with context
    Other(String),
}

impl fmt::Display for QueryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::Dataset(msg) => write!(f, "Dataset error: {msg}"),
            Self::Serialization(msg) => write!(f, "Serialization error: {msg}"),
            Self::Config(msg) => write!(f, "Configuration error: {msg}"),
            Self::InvalidPath(msg) => write!(f, "Invalid path: {msg}"),
            Self::Other(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for QueryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for QueryError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for QueryError {
    fn from(err: csv::Error) -> Self {
        if err.is_io_error() {
            match err.into_kind() {
                csv::ErrorKind::Io(io) => Self::Io(io),
                other => Self::Dataset(format!("{other:?}")),
            }
        } else {
            Self::Dataset(err.to_string())
        }
    }
}

impl From<serde_json::Error> for QueryError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

impl From<anyhow::Error> for QueryError {
    fn from(err: anyhow::Error) -> Self {
        Self::Other(err.to_string())
    }
}

/// Result type alias for reelquery operations.
pub type Result<T> = std::result::Result<T, QueryError>;

/// Extension trait to add context to results.
pub trait ResultExt<T> {
    /// Add context to an error.
    ///
    /// # Errors
    ///
    /// Returns the original error wrapped as [`QueryError::Other`] with `msg` prefixed.
    fn context(self, msg: impl Into<String>) -> Result<T>;

    /// Add context using a closure (lazy evaluation).
    ///
    /// # Errors
    ///
    /// Returns the original error wrapped as [`QueryError::Other`] with the closure's message prefixed.
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ResultExt<T> for std::result::Result<T, E>
where
    E: Into<QueryError>,
{
    fn context(self, msg: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let err: QueryError = e.into();
            QueryError::Other(format!("{}: {}", msg.into(), err))
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| {
            let err: QueryError = e.into();
            QueryError::Other(format!("{}: {}", f(), err))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = QueryError::InvalidPath("Input file not found: movies.csv".to_owned());
        assert_eq!(
            err.to_string(),
            "Invalid path: Input file not found: movies.csv"
        );
    }

    #[test]
    fn test_json_error_converts() {
        let parsed: std::result::Result<u32, serde_json::Error> = serde_json::from_str("nope");
        let err: QueryError = parsed.unwrap_err().into();
        assert!(matches!(err, QueryError::Serialization(_)));
    }

    #[test]
    fn test_result_context() {
        let result: std::result::Result<(), std::io::Error> = Err(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "movies.csv",
        ));

        let result: Result<()> = result.context("Failed to read dataset");
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("Failed to read dataset")
        );
    }
}
