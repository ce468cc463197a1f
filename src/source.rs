//! Source-location scheme handling.

use std::path::PathBuf;

/// Where checkout content comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceLocation {
    /// Filesystem path to an existing, already-materialised repository.
    Local(PathBuf),
    /// Anything git can fetch from: https, ssh, git, scp-style, etc.
    Remote(String),
}

impl SourceLocation {
    /// Classify a URI-like string by its scheme.
    ///
    /// The scheme is the text before the first `:`.  A `file` scheme selects
    /// the local path flow, with a leading `file://` prefix stripped if
    /// present; every other scheme (including none at all) is handed to the
    /// version-control tool verbatim as a remote.
    pub fn parse(raw: &str) -> Self {
        let scheme = raw.splitn(2, ':').next().unwrap_or(raw);
        if scheme == "file" {
            let path = raw.strip_prefix("file://").unwrap_or(raw);
            Self::Local(PathBuf::from(path))
        } else {
            Self::Remote(raw.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_scheme_is_local() {
        assert_eq!(
            SourceLocation::parse("file:///srv/repos/app"),
            SourceLocation::Local(PathBuf::from("/srv/repos/app")),
        );
    }

    #[test]
    fn https_is_remote() {
        assert_eq!(
            SourceLocation::parse("https://example.com/org/repo.git"),
            SourceLocation::Remote("https://example.com/org/repo.git".to_string()),
        );
    }

    #[test]
    fn scp_style_is_remote() {
        // "git@example.com" is the scheme component here, not "file".
        assert_eq!(
            SourceLocation::parse("git@example.com:org/repo.git"),
            SourceLocation::Remote("git@example.com:org/repo.git".to_string()),
        );
    }

    #[test]
    fn bare_path_is_remote() {
        // No colon means no scheme; git treats plain paths as remotes too.
        assert_eq!(
            SourceLocation::parse("/srv/repos/app"),
            SourceLocation::Remote("/srv/repos/app".to_string()),
        );
    }
}
