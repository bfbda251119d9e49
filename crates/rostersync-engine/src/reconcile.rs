//! Plan computation and the reconciliation run loop.
//!
//! Matching is keyed by display name, not email: that is what the board's
//! listing exposes, and the behavior is kept deliberately even though two
//! different people sharing a name will be treated as already satisfied.
//! Removing or deactivating board users absent from the directory is out
//! of scope for a run.

use std::collections::HashSet;
use tracing::info;

use rostersync_board::NewUser;
use rostersync_directory::{CriteriaFilter, MembershipIndex};

use crate::error::SyncResult;
use crate::traits::{BoardTarget, DirectorySource};

/// Display names already present on the board.
pub type ExistingUserSet = HashSet<String>;

/// Summary of one reconciliation run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncStats {
    /// Entries retrieved from the directory after normalization.
    pub directory_entries: usize,
    /// Distinct display names already on the board.
    pub existing_users: usize,
    /// Accounts created during this run.
    pub created: usize,
}

/// Compute the creation requests for membership entries whose display name
/// is absent from the board.
///
/// Name comparison is case-sensitive, exact. The membership index has no
/// defined iteration order, so the returned plan is order-independent data:
/// callers and tests must not rely on its ordering.
#[must_use]
pub fn plan(membership: &MembershipIndex, existing: &ExistingUserSet) -> Vec<NewUser> {
    membership
        .iter()
        .filter(|(_, name)| !existing.contains(*name))
        .map(|(email, name)| NewUser::new(name.clone(), email.clone()))
        .collect()
}

/// One-shot reconciliation engine.
///
/// Holds the two collaborators for a run; everything else is plain data
/// passed between steps.
pub struct SyncEngine<D, B> {
    directory: D,
    board: B,
}

impl<D: DirectorySource, B: BoardTarget> SyncEngine<D, B> {
    /// Create an engine over the given collaborators.
    pub fn new(directory: D, board: B) -> Self {
        Self { directory, board }
    }

    /// Run one reconciliation pass to completion.
    ///
    /// Sequential throughout: one directory query, one board listing, then
    /// one creation call per missing person. The first failed creation
    /// aborts the run with no further calls issued; there is no per-item
    /// retry and no partial-success report beyond the log.
    pub async fn run(&self, criteria: &CriteriaFilter) -> SyncResult<SyncStats> {
        let membership = self.directory.fetch_membership(criteria).await?;
        info!(entries = membership.len(), "retrieved membership entries");

        let users = self.board.list_users().await?;
        let existing: ExistingUserSet = users.into_iter().map(|u| u.name).collect();
        info!(users = existing.len(), "retrieved existing board users");

        let pending = plan(&membership, &existing);

        let mut created = 0;
        for user in &pending {
            info!(name = %user.name, email = %user.email, "adding board user");
            self.board.create_user(user).await?;
            created += 1;
        }
        info!(created, "finished adding new members");

        Ok(SyncStats {
            directory_entries: membership.len(),
            existing_users: existing.len(),
            created,
        })
    }
}
