//! One-way tree mirroring for local sources.
//!
//! The local checkout flow does not fetch anything over the network; it
//! mirrors an already-materialised repository directory into the
//! destination.  The mirror is additive/overwrite only -- files deleted in
//! the source are not deleted in the destination.

use std::path::Path;
use std::process::Stdio;

use tokio::process::Command;
use tracing::debug;

use crate::config::RsyncConfig;
use crate::error::{CheckoutError, CheckoutResult};

/// Capability for mirroring a local source tree into a destination.
#[async_trait::async_trait]
pub trait TreeMirror: Send + Sync {
    /// Copy the contents of `source` into `dest` without creating a nested
    /// subdirectory.
    async fn mirror(&self, source: &Path, dest: &Path) -> CheckoutResult<()>;
}

/// [`TreeMirror`] backed by `rsync -a`.
pub struct RsyncCli {
    binary: String,
}

impl RsyncCli {
    pub fn new(config: &RsyncConfig) -> Self {
        Self {
            binary: config.binary.clone(),
        }
    }
}

#[async_trait::async_trait]
impl TreeMirror for RsyncCli {
    async fn mirror(&self, source: &Path, dest: &Path) -> CheckoutResult<()> {
        let source_arg = contents_of(source);
        let command = format!("{} -a {} {}", self.binary, source_arg, dest.display());

        let mut cmd = Command::new(&self.binary);
        cmd.arg("-a").arg(&source_arg).arg(dest);
        cmd.stdin(Stdio::null());
        cmd.stdout(Stdio::piped());
        cmd.stderr(Stdio::piped());

        debug!(%command, "spawning rsync");

        let output = cmd
            .output()
            .await
            .map_err(|source| CheckoutError::ToolSpawn {
                command: command.clone(),
                source,
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(CheckoutError::ToolFailed {
                command,
                status: output.status,
                stderr: stderr.trim().to_string(),
            });
        }

        debug!(%command, "rsync succeeded");
        Ok(())
    }
}

/// Source argument with a trailing slash, so rsync copies the directory's
/// contents rather than the directory itself.
fn contents_of(source: &Path) -> String {
    let raw = source.to_string_lossy();
    format!("{}/", raw.trim_end_matches('/'))
}
