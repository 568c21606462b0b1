//! Error types for the news classifier.
//!
//! All fallible operations return [`Result`], whose error side is the
//! [`ClassifierError`] enum. Corpus and dataset errors carry the path (and
//! line, where one exists) so a fatal startup failure tells the user which
//! input to fix.
//!
//! # Examples
//!
//! ```
//! use news_classifier::error::{ClassifierError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(ClassifierError::invalid_config("categories must not be empty"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// The main error type for classifier operations.
#[derive(Error, Debug)]
pub enum ClassifierError {
    /// I/O errors that are not tied to a corpus or dataset file.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Corpus errors (missing category directory, unreadable or short file).
    #[error("Corpus error in '{}': {message}", path.display())]
    Corpus { path: PathBuf, message: String },

    /// Dataset errors (unwritable file, malformed row, unknown label).
    #[error("Dataset error in '{}'{}: {message}", path.display(), line.map(|l| format!(" at line {l}")).unwrap_or_default())]
    Dataset {
        path: PathBuf,
        line: Option<usize>,
        message: String,
    },

    /// Analysis-related errors (tokenization, filtering, etc.)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Model errors (load, save, class map mismatch).
    #[error("Model error: {0}")]
    Model(String),

    /// Training errors.
    #[error("Training error: {0}")]
    Training(String),

    /// Configuration errors.
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),
}

/// Result type alias for operations that may fail with ClassifierError.
pub type Result<T> = std::result::Result<T, ClassifierError>;

impl ClassifierError {
    /// Create a new corpus error for the given path.
    pub fn corpus<P: AsRef<Path>, S: Into<String>>(path: P, msg: S) -> Self {
        ClassifierError::Corpus {
            path: path.as_ref().to_path_buf(),
            message: msg.into(),
        }
    }

    /// Create a new dataset error for the given path.
    pub fn dataset<P: AsRef<Path>, S: Into<String>>(path: P, msg: S) -> Self {
        ClassifierError::Dataset {
            path: path.as_ref().to_path_buf(),
            line: None,
            message: msg.into(),
        }
    }

    /// Create a new dataset error pointing at a 1-based line.
    pub fn dataset_line<P: AsRef<Path>, S: Into<String>>(path: P, line: usize, msg: S) -> Self {
        ClassifierError::Dataset {
            path: path.as_ref().to_path_buf(),
            line: Some(line),
            message: msg.into(),
        }
    }

    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        ClassifierError::Analysis(msg.into())
    }

    /// Create a new model error.
    pub fn model<S: Into<String>>(msg: S) -> Self {
        ClassifierError::Model(msg.into())
    }

    /// Create a new training error.
    pub fn training<S: Into<String>>(msg: S) -> Self {
        ClassifierError::Training(msg.into())
    }

    /// Create a new invalid config error.
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        ClassifierError::Config(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        ClassifierError::Other(msg.into())
    }
}
