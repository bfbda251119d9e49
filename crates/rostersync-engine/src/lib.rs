//! # Reconciliation Engine
//!
//! Computes the set of directory members absent from the feedback board and
//! creates accounts for them, one sequential call per missing person.
//!
//! The engine talks to its collaborators through the [`DirectorySource`] and
//! [`BoardTarget`] traits rather than concrete clients, so unit tests can
//! substitute in-memory fakes. The HTTP clients from `rostersync-directory`
//! and `rostersync-board` implement both traits here.
//!
//! ## Crate Organization
//!
//! - [`traits`] - Collaborator traits and their client implementations
//! - [`reconcile`] - Plan computation and the run loop
//! - [`error`] - Run-fatal error type

pub mod error;
pub mod reconcile;
pub mod traits;

pub use error::{SyncError, SyncResult};
pub use reconcile::{plan, ExistingUserSet, SyncEngine, SyncStats};
pub use traits::{BoardTarget, DirectorySource};
