//! Version-control operations behind an injectable capability trait.
//!
//! The production implementation ([`GitCli`]) shells out to the system
//! `git` binary; tests substitute a fake that simulates repository state
//! without spawning any processes.

pub mod git_cli;

pub use git_cli::GitCli;

use std::path::Path;

use crate::error::CheckoutResult;

/// Abstraction over the version-control tool that does the real work.
///
/// Every method takes the working directory explicitly.  Implementations
/// must not read or mutate the process-wide current directory; the same
/// orchestrator may serve checkouts into different destinations over its
/// lifetime.
///
/// Methods returning raw output return it verbatim (stdout as produced by
/// the tool); all parsing happens in the orchestrator.
#[async_trait::async_trait]
pub trait VersionControl: Send + Sync {
    /// Initialise an empty repository in `workdir`.
    async fn init(&self, workdir: &Path) -> CheckoutResult<()>;

    /// Register `url` as the remote named `origin`.
    async fn add_remote(&self, workdir: &Path, url: &str) -> CheckoutResult<()>;

    /// Fetch refs and metadata from all registered remotes.
    async fn update_remotes(&self, workdir: &Path) -> CheckoutResult<()>;

    /// Fetch the objects for a single revision from `origin`.
    async fn fetch_revision(&self, workdir: &Path, revision: &str) -> CheckoutResult<()>;

    /// Hard-reset the working tree and index to `revision`, discarding any
    /// partial state.
    async fn reset_hard(&self, workdir: &Path, revision: &str) -> CheckoutResult<()>;

    /// Initialise and update nested submodules referenced at the current
    /// revision.
    async fn update_submodules(&self, workdir: &Path) -> CheckoutResult<()>;

    /// Raw listing of every revision in the complete history graph, all
    /// branches, one per line.
    async fn list_all_revisions(&self, workdir: &Path) -> CheckoutResult<String>;

    /// Raw branch listing showing which branches contain the current
    /// commit.  Human-oriented output.
    async fn branch_summary(&self, workdir: &Path) -> CheckoutResult<String>;

    /// Raw log of commit identifiers reachable from the current position,
    /// most recent first, one per line.
    async fn log_revisions(&self, workdir: &Path) -> CheckoutResult<String>;
}
