//! Reproducible source checkout for build pipelines.
//!
//! Given a source location (a fetchable URL or a `file://` path), an exact
//! revision identifier, and an existing destination directory, [`Checkout`]
//! produces a working copy of the repository at that revision and returns a
//! [`RepositoryDescriptor`] naming what was checked out.
//!
//! All real work is done by external tools (`git`, and `rsync` for local
//! sources) invoked as subprocesses.  Those tools sit behind the
//! [`vcs::VersionControl`] and [`mirror::TreeMirror`] traits so tests can
//! simulate repository state without spawning anything.

pub mod checkout;
pub mod config;
pub mod descriptor;
pub mod error;
pub mod mirror;
pub mod source;
pub mod vcs;

pub use checkout::Checkout;
pub use descriptor::RepositoryDescriptor;
pub use error::{CheckoutError, CheckoutResult};
