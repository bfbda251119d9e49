//! # Feedback-Board Client
//!
//! Client for the target feedback-board application whose user list is being
//! reconciled. Exposes the two operations the reconciliation needs: list the
//! board's users and create one.
//!
//! ## Crate Organization
//!
//! - [`models`] - Wire types for the board's user API
//! - [`client`] - HTTP client with bearer-token authentication
//! - [`error`] - Error types distinguishing HTTP-status failures from
//!   JSON-decode failures

pub mod client;
pub mod error;
pub mod models;

pub use client::BoardClient;
pub use error::{BoardError, BoardResult};
pub use models::{BoardUser, NewUser};
