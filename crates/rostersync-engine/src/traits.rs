//! Collaborator traits for the reconciliation engine.
//!
//! The engine only ever needs three operations from the outside world, so
//! that is the whole seam: fetch the membership index, list the board's
//! users, create one user. Clients are passed in explicitly; nothing is
//! held at process scope.

use async_trait::async_trait;

use rostersync_board::{BoardClient, BoardUser, NewUser};
use rostersync_directory::{CriteriaFilter, DirectoryClient, MembershipIndex};

use crate::error::SyncResult;

/// Source of membership records: the directory service.
#[async_trait]
pub trait DirectorySource: Send + Sync {
    /// Fetch the email-keyed membership index for the given criteria.
    ///
    /// "No entries matched" is not an error; implementations return an
    /// empty index for it.
    async fn fetch_membership(&self, criteria: &CriteriaFilter) -> SyncResult<MembershipIndex>;
}

/// Target of the reconciliation: the feedback board's user API.
#[async_trait]
pub trait BoardTarget: Send + Sync {
    /// List the board's current users.
    async fn list_users(&self) -> SyncResult<Vec<BoardUser>>;

    /// Create one user on the board.
    async fn create_user(&self, user: &NewUser) -> SyncResult<()>;
}

#[async_trait]
impl DirectorySource for DirectoryClient {
    async fn fetch_membership(&self, criteria: &CriteriaFilter) -> SyncResult<MembershipIndex> {
        Ok(DirectoryClient::fetch_membership(self, criteria).await?)
    }
}

#[async_trait]
impl BoardTarget for BoardClient {
    async fn list_users(&self) -> SyncResult<Vec<BoardUser>> {
        Ok(BoardClient::list_users(self).await?)
    }

    async fn create_user(&self, user: &NewUser) -> SyncResult<()> {
        Ok(BoardClient::create_user(self, user).await?)
    }
}
