//! Board client error types.

use thiserror::Error;

/// Error that can occur against the board's user API.
///
/// All of these are fatal for the run. An HTTP-status failure and a
/// malformed-body failure are distinct kinds so callers (and tests) can
/// tell them apart.
#[derive(Debug, Error)]
pub enum BoardError {
    /// Board client configuration is invalid.
    #[error("invalid board configuration: {0}")]
    InvalidConfig(String),

    /// The board answered with a non-success status; carries the raw body
    /// for diagnostics.
    #[error("board API error (status {status}): {body}")]
    Api { status: u16, body: String },

    /// The board answered 2xx but the body could not be decoded.
    #[error("failed to parse board response: {0}")]
    Parse(String),

    /// Transport-level failure talking to the board.
    #[error("board request failed: {0}")]
    Http(#[from] reqwest::Error),
}

/// Result type for board operations.
pub type BoardResult<T> = Result<T, BoardError>;
