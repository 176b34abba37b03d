/// Error types for the data-source crate.
use thiserror::Error;

/// Main error type for fetching and parsing the two precipitation sources.
///
/// Every variant is fatal at load time: the explorer cannot run without
/// both datasets, so there is no retry or partial-data path.
#[derive(Error, Debug)]
pub enum SourceError {
    /// HTTP request failed
    #[cfg(feature = "api")]
    #[error("HTTP request failed: {0}")]
    HttpRequest(#[from] reqwest::Error),

    /// Remote endpoint answered with a non-success status
    #[error("bad HTTP status from {url}: {status}")]
    BadStatus { url: String, status: String },

    /// Failed to parse CSV data
    #[error("failed to parse CSV: {0}")]
    CsvParse(#[from] csv::Error),

    /// Failed to parse a JSON payload
    #[error("failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// Date or timestamp parsing failed
    #[error("failed to parse date: {0}")]
    DateParse(String),

    /// A value field was neither numeric nor a known sentinel
    #[error("failed to parse value '{value}' ({context})")]
    ValueParse { value: String, context: String },

    /// The two sources do not cover the same communities
    #[error("grid and station sources disagree on communities: {0}")]
    CommunityMismatch(String),

    /// File I/O failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Type alias for Results using SourceError
pub type Result<T> = std::result::Result<T, SourceError>;
