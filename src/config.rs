//! YAML configuration for the external tools.

use std::path::Path;

use serde::Deserialize;

use crate::error::{CheckoutError, CheckoutResult};

// ---------------------------------------------------------------------------
// Top-level config
// ---------------------------------------------------------------------------

/// Tool configuration.  Every field has a sensible default, so an absent or
/// empty config file yields a working setup that expects `git` and `rsync`
/// on the execution path.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub git: GitConfig,
    #[serde(default)]
    pub rsync: RsyncConfig,
}

// ---------------------------------------------------------------------------
// Git
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
pub struct GitConfig {
    /// Name or path of the git binary.
    #[serde(default = "default_git_binary")]
    pub binary: String,
    /// Pass `--recursive` to `git submodule update` so nested submodules
    /// are materialised too.
    #[serde(default = "bool_true")]
    pub recursive_submodules: bool,
}

impl Default for GitConfig {
    fn default() -> Self {
        Self {
            binary: default_git_binary(),
            recursive_submodules: bool_true(),
        }
    }
}

fn default_git_binary() -> String {
    "git".to_string()
}

fn bool_true() -> bool {
    true
}

// ---------------------------------------------------------------------------
// Rsync
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
pub struct RsyncConfig {
    /// Name or path of the rsync binary used for local-source mirroring.
    #[serde(default = "default_rsync_binary")]
    pub binary: String,
}

impl Default for RsyncConfig {
    fn default() -> Self {
        Self {
            binary: default_rsync_binary(),
        }
    }
}

fn default_rsync_binary() -> String {
    "rsync".to_string()
}

// ---------------------------------------------------------------------------
// Loader
// ---------------------------------------------------------------------------

/// Load and validate a [`Config`] from a YAML file at `path`.
pub fn load_config<P: AsRef<Path>>(path: P) -> CheckoutResult<Config> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path)
        .map_err(|e| CheckoutError::ConfigRead(format!("{}: {e}", path.display())))?;
    let config: Config = serde_yaml::from_str(&contents)
        .map_err(|e| CheckoutError::ConfigParse(format!("{}: {e}", path.display())))?;
    validate_config(&config)?;
    Ok(config)
}

/// Basic sanity checks that cannot be expressed purely with serde.
fn validate_config(config: &Config) -> CheckoutResult<()> {
    if config.git.binary.trim().is_empty() {
        return Err(CheckoutError::ConfigInvalid(
            "git.binary must not be empty".to_string(),
        ));
    }
    if config.rsync.binary.trim().is_empty() {
        return Err(CheckoutError::ConfigInvalid(
            "rsync.binary must not be empty".to_string(),
        ));
    }
    Ok(())
}
