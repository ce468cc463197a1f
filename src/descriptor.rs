//! Metadata describing a completed checkout.

use serde::{Deserialize, Serialize};

/// Snapshot of what a checkout produced.
///
/// Constructed once, at the end of a successful checkout, from freshly
/// queried repository state.  It has no further connection to the working
/// copy; the caller owns it outright.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryDescriptor {
    /// First line of the post-reset branch listing.  Human-oriented; the
    /// exact format is whatever `git show-branch --list` prints and is not
    /// guaranteed stable.
    pub commit: String,
    /// The requested revision, echoed back after it was verified to exist.
    pub sha: String,
    /// Commit identifiers reachable from the checked-out revision, most
    /// recent first.
    pub rev_list: Vec<String>,
}
