//! Directory client error types.

use thiserror::Error;

/// Error that can occur while querying the directory service.
///
/// These are run-fatal: the caller aborts on any of them. The benign
/// "no entries matched" case never surfaces here — [`crate::DirectoryClient`]
/// maps it to an empty result before returning.
#[derive(Debug, Error)]
pub enum DirectoryError {
    /// Directory client configuration is invalid.
    #[error("invalid directory configuration: {0}")]
    InvalidConfig(String),

    /// The directory rejected the query with a non-success status.
    #[error("directory query failed (status {status}): {detail}")]
    QueryFailed { status: u16, detail: String },

    /// The directory responded with a body that could not be decoded.
    #[error("failed to parse directory response: {0}")]
    Parse(String),

    /// Transport-level failure talking to the directory.
    #[error("directory request failed: {0}")]
    Http(#[from] reqwest::Error),
}

/// Per-person extraction failure.
///
/// Unlike [`DirectoryError`], these are tolerated: a record that cannot be
/// normalized is logged and skipped, and the run continues with the rest.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PersonFieldError {
    /// The record has no row for the requested attribute.
    #[error("person record has no '{attribute}' attribute")]
    MissingAttribute { attribute: String },

    /// The attribute's first value is not string-shaped.
    #[error("attribute '{attribute}' does not carry a string value")]
    NotString { attribute: String },
}

/// Result type for directory operations.
pub type DirectoryResult<T> = Result<T, DirectoryError>;
