//! Error types for the catalog pipeline

use thiserror::Error;

/// Crate-wide result alias
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that abort a pipeline run.
///
/// Row- and field-level problems are not errors; they travel through
/// [`crate::report::Issue`] and never abort the batch.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration file missing or malformed
    #[error("Configuration error: {0}")]
    Config(String),

    /// Vocabulary workbook missing, unreadable, or lacking the tags sheet
    #[error("Vocabulary error: {0}")]
    Vocabulary(String),

    /// A source file could not be parsed
    #[error("Failed to parse {file}: {message}")]
    FileParse { file: String, message: String },

    /// HTTP transport failure
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Books CSV could not be read
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Cover image could not be decoded or encoded
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    /// Catalog artifact could not be serialized or deserialized
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Filesystem failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Anything else
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Create a file parse error
    pub fn file_parse(file: impl Into<String>, message: impl Into<String>) -> Self {
        Self::FileParse {
            file: file.into(),
            message: message.into(),
        }
    }
}
