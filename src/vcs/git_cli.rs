//! Git subprocess implementation of [`VersionControl`].
//!
//! Every operation shells out to the system `git` binary using
//! [`tokio::process::Command`].  The working directory is passed with `-C`
//! on each invocation, so the process-wide current directory is never
//! touched.  `GIT_TERMINAL_PROMPT=0` is set so a fetch against a remote
//! that wants credentials fails instead of hanging on a prompt.

use std::path::Path;
use std::process::Stdio;

use tokio::process::Command;
use tracing::debug;

use crate::config::GitConfig;
use crate::error::{CheckoutError, CheckoutResult};

use super::VersionControl;

/// [`VersionControl`] backed by the `git` command-line tool.
#[derive(Debug, Clone)]
pub struct GitCli {
    binary: String,
    recursive_submodules: bool,
}

impl GitCli {
    pub fn new(config: &GitConfig) -> Self {
        Self {
            binary: config.binary.clone(),
            recursive_submodules: config.recursive_submodules,
        }
    }

    /// Run one git subcommand in `workdir` and return its stdout.
    ///
    /// Non-zero exit becomes [`CheckoutError::ToolFailed`] with the trimmed
    /// stderr attached; no git-specific error causes are distinguished.
    async fn run(&self, workdir: &Path, args: &[&str]) -> CheckoutResult<String> {
        let command = display_command(&self.binary, args);

        let mut cmd = Command::new(&self.binary);
        cmd.arg("-C").arg(workdir).args(args);
        cmd.env("GIT_TERMINAL_PROMPT", "0");
        cmd.stdin(Stdio::null());
        cmd.stdout(Stdio::piped());
        cmd.stderr(Stdio::piped());

        debug!(%command, workdir = %workdir.display(), "spawning git");

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

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        debug!(%command, output = %stdout.trim_end(), "git succeeded");
        Ok(stdout)
    }
}

#[async_trait::async_trait]
impl VersionControl for GitCli {
    async fn init(&self, workdir: &Path) -> CheckoutResult<()> {
        self.run(workdir, &["init"]).await.map(drop)
    }

    async fn add_remote(&self, workdir: &Path, url: &str) -> CheckoutResult<()> {
        self.run(workdir, &["remote", "add", "origin", url])
            .await
            .map(drop)
    }

    async fn update_remotes(&self, workdir: &Path) -> CheckoutResult<()> {
        self.run(workdir, &["remote", "update"]).await.map(drop)
    }

    async fn fetch_revision(&self, workdir: &Path, revision: &str) -> CheckoutResult<()> {
        self.run(workdir, &["fetch", "origin", revision])
            .await
            .map(drop)
    }

    async fn reset_hard(&self, workdir: &Path, revision: &str) -> CheckoutResult<()> {
        self.run(workdir, &["reset", "--hard", revision])
            .await
            .map(drop)
    }

    async fn update_submodules(&self, workdir: &Path) -> CheckoutResult<()> {
        let mut args = vec!["submodule", "update", "--init"];
        if self.recursive_submodules {
            args.push("--recursive");
        }
        self.run(workdir, &args).await.map(drop)
    }

    async fn list_all_revisions(&self, workdir: &Path) -> CheckoutResult<String> {
        self.run(workdir, &["rev-list", "--all"]).await
    }

    async fn branch_summary(&self, workdir: &Path) -> CheckoutResult<String> {
        self.run(workdir, &["show-branch", "--list"]).await
    }

    async fn log_revisions(&self, workdir: &Path) -> CheckoutResult<String> {
        self.run(workdir, &["log", "--pretty=format:%H"]).await
    }
}

/// Render a command line for logs and error messages.
fn display_command(binary: &str, args: &[&str]) -> String {
    let mut out = String::from(binary);
    for arg in args {
        out.push(' ');
        out.push_str(arg);
    }
    out
}
