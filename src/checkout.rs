//! The checkout orchestrator.
//!
//! A linear sequence of external tool invocations that converges, for both
//! remote and local sources, on one existence check and a hard reset to the
//! requested revision, followed by metadata extraction.

use std::path::Path;
use std::sync::Arc;

use tracing::{info, instrument};

use crate::descriptor::RepositoryDescriptor;
use crate::error::{CheckoutError, CheckoutResult};
use crate::mirror::TreeMirror;
use crate::source::SourceLocation;
use crate::vcs::VersionControl;

/// Checks out one exact revision of a source repository into an existing
/// destination directory.
///
/// Execution is strictly sequential: each tool invocation runs to
/// completion before the next begins, nothing is retried, and nothing is
/// rolled back.  A failed run leaves the destination in an indeterminate
/// state that the caller should discard before retrying.  Two concurrent
/// checkouts against the same destination are unsupported.
pub struct Checkout {
    vcs: Arc<dyn VersionControl>,
    mirror: Arc<dyn TreeMirror>,
}

impl Checkout {
    pub fn new(vcs: Arc<dyn VersionControl>, mirror: Arc<dyn TreeMirror>) -> Self {
        Self { vcs, mirror }
    }

    /// Produce a working copy of `source` at exactly `revision` inside
    /// `destination` and return a descriptor of what was checked out.
    ///
    /// `destination` must already exist as a directory; it is handed to
    /// every tool invocation explicitly and the process working directory
    /// is never changed.
    #[instrument(skip(self), fields(%source, %revision, destination = %destination.display()))]
    pub async fn run(
        &self,
        source: &str,
        revision: &str,
        destination: &Path,
    ) -> CheckoutResult<RepositoryDescriptor> {
        if !destination.is_dir() {
            return Err(CheckoutError::DestinationUnusable {
                path: destination.to_path_buf(),
            });
        }

        match SourceLocation::parse(source) {
            SourceLocation::Local(path) => self.local(&path, revision, destination).await?,
            SourceLocation::Remote(url) => self.remote(&url, revision, destination).await?,
        }

        let branches = self.vcs.branch_summary(destination).await?;
        let commit = first_line(&branches).to_string();
        let log = self.vcs.log_revisions(destination).await?;
        let rev_list = split_revisions(&log);

        info!(%commit, revisions = rev_list.len(), "checkout complete");

        Ok(RepositoryDescriptor {
            commit,
            sha: revision.to_string(),
            rev_list,
        })
    }

    /// Remote flow: initialise an empty repository, register the source as
    /// `origin`, fetch refs/metadata, verify the revision exists, then
    /// fetch its objects, reset to it, and materialise submodules.
    async fn remote(&self, url: &str, revision: &str, dest: &Path) -> CheckoutResult<()> {
        self.vcs.init(dest).await?;
        self.vcs.add_remote(dest, url).await?;
        self.vcs.update_remotes(dest).await?;
        self.ensure_revision(dest, revision).await?;
        self.vcs.fetch_revision(dest, revision).await?;
        self.vcs.reset_hard(dest, revision).await?;
        self.vcs.update_submodules(dest).await?;
        Ok(())
    }

    /// Local flow: mirror the source tree into the destination, verify the
    /// revision exists, and reset to it.  The source is assumed to already
    /// contain a materialised repository, so there is no submodule step.
    async fn local(&self, path: &Path, revision: &str, dest: &Path) -> CheckoutResult<()> {
        self.mirror.mirror(path, dest).await?;
        self.ensure_revision(dest, revision).await?;
        self.vcs.reset_hard(dest, revision).await?;
        Ok(())
    }

    /// Fail with [`CheckoutError::RevisionNotFound`] unless `revision`
    /// appears verbatim in the repository's complete history.
    async fn ensure_revision(&self, dest: &Path, revision: &str) -> CheckoutResult<()> {
        let known = self.vcs.list_all_revisions(dest).await?;
        if revision_exists(&known, revision) {
            Ok(())
        } else {
            Err(CheckoutError::RevisionNotFound {
                revision: revision.to_string(),
            })
        }
    }
}

/// Exact-string membership test over a raw `rev-list --all` listing.
///
/// Only trailing newlines are trimmed before comparison, so an abbreviated
/// revision identifier never matches the full one.
fn revision_exists(rev_list: &str, revision: &str) -> bool {
    rev_list
        .split('\n')
        .any(|line| line.trim_end_matches('\n') == revision)
}

fn first_line(raw: &str) -> &str {
    raw.split('\n').next().unwrap_or("")
}

/// Newline-split commit listing.  A single trailing newline does not
/// produce an empty trailing entry; an empty listing yields an empty list.
fn split_revisions(log: &str) -> Vec<String> {
    let trimmed = log.strip_suffix('\n').unwrap_or(log);
    if trimmed.is_empty() {
        return Vec::new();
    }
    trimmed.split('\n').map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn revision_exists_exact_match() {
        let listing = "cccc\nbbbb\naaaa\n";
        assert!(revision_exists(listing, "bbbb"));
        assert!(revision_exists(listing, "aaaa"));
    }

    #[test]
    fn revision_exists_rejects_prefix() {
        let listing = "deadbeefdeadbeefdeadbeefdeadbeefdeadbeef\n";
        assert!(!revision_exists(listing, "deadbeef"));
    }

    #[test]
    fn revision_exists_rejects_unknown() {
        assert!(!revision_exists("cccc\nbbbb\n", "ffff"));
        assert!(!revision_exists("", "ffff"));
    }

    #[test]
    fn first_line_takes_leading_line() {
        assert_eq!(first_line("* [main] subject\nmore\n"), "* [main] subject");
        assert_eq!(first_line(""), "");
    }

    #[test]
    fn split_revisions_preserves_order() {
        assert_eq!(split_revisions("c\nb\na"), vec!["c", "b", "a"]);
    }

    #[test]
    fn split_revisions_drops_single_trailing_newline() {
        assert_eq!(split_revisions("c\nb\na\n"), vec!["c", "b", "a"]);
        assert!(split_revisions("").is_empty());
        assert!(split_revisions("\n").is_empty());
    }
}
