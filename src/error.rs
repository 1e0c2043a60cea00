//! Error types for the Sarf library.
//!
//! All fallible operations return [`Result`], with [`SarfError`] describing
//! what went wrong. Errors always propagate to the caller; the library never
//! retries or suppresses a failure internally.
//!
//! # Examples
//!
//! ```
//! use sarf::error::{Result, SarfError};
//!
//! fn needs_text(text: Option<&str>) -> Result<&str> {
//!     text.ok_or_else(|| SarfError::input("no input provided"))
//! }
//!
//! assert!(needs_text(None).is_err());
//! ```

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// The main error type for Sarf operations.
#[derive(Error, Debug)]
pub enum SarfError {
    /// I/O errors (file operations, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Analysis was requested but no raw text has been provided.
    #[error("Input error: {0}")]
    Input(String),

    /// Morphological analysis errors (malformed candidate data, etc.)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Lexicon loading/initialization errors. Fatal: the analyzer cannot
    /// operate without its lexicon.
    #[error("Lexicon error: {0}")]
    Lexicon(String),

    /// Corpus file errors, carrying the offending path and the cause.
    #[error("Corpus error: failed to read {}: {source}", path.display())]
    Corpus {
        /// Path of the corpus file that could not be read.
        path: PathBuf,
        /// Underlying I/O or decoding failure.
        source: io::Error,
    },

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with SarfError.
pub type Result<T> = std::result::Result<T, SarfError>;

impl SarfError {
    /// Create a new input error.
    pub fn input<S: Into<String>>(msg: S) -> Self {
        SarfError::Input(msg.into())
    }

    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        SarfError::Analysis(msg.into())
    }

    /// Create a new lexicon error.
    pub fn lexicon<S: Into<String>>(msg: S) -> Self {
        SarfError::Lexicon(msg.into())
    }

    /// Create a new corpus error for the given path.
    pub fn corpus<P: Into<PathBuf>>(path: P, source: io::Error) -> Self {
        SarfError::Corpus {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = SarfError::input("no input provided");
        assert_eq!(error.to_string(), "Input error: no input provided");

        let error = SarfError::lexicon("empty stem table");
        assert_eq!(error.to_string(), "Lexicon error: empty stem table");
    }

    #[test]
    fn test_corpus_error_carries_path() {
        let cause = io::Error::new(io::ErrorKind::NotFound, "missing");
        let error = SarfError::corpus("corpora/4.txt", cause);
        let rendered = error.to_string();
        assert!(rendered.contains("corpora/4.txt"));
        assert!(rendered.contains("missing"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let sarf_error = SarfError::from(io_error);

        match sarf_error {
            SarfError::Io(_) => {}
            _ => panic!("expected Io variant"),
        }
    }
}
