//! Engine error types.

use rostersync_board::BoardError;
use rostersync_directory::DirectoryError;
use thiserror::Error;

/// Fatal error for a reconciliation run.
///
/// Any of these aborts the run immediately; only per-person record defects
/// are tolerated, and those are absorbed inside the directory client.
#[derive(Debug, Error)]
pub enum SyncError {
    /// Membership lookup against the directory failed.
    #[error("membership lookup failed: {0}")]
    Directory(#[from] DirectoryError),

    /// A board operation (listing or creation) failed.
    #[error("board operation failed: {0}")]
    Board(#[from] BoardError),
}

/// Result type for engine operations.
pub type SyncResult<T> = Result<T, SyncError>;
