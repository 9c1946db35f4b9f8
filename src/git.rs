//! Git transport for rule libraries, via the system `git` binary

use std::fs;
use std::path::Path;
use std::process::Command;

use url::Url;

use crate::error::{Error, Result};

/// Clone a repository, optionally at a specific ref, using a shallow clone
///
/// This uses the system git command, which automatically handles:
/// - SSH keys from ~/.ssh/
/// - Git credential helpers
/// - Personal access tokens
/// - Any authentication configured in ~/.gitconfig
pub fn clone_shallow(url: &str, ref_name: Option<&str>, target_dir: &Path) -> Result<()> {
    // git won't clone into an existing non-empty directory
    if target_dir.exists() {
        fs::remove_dir_all(target_dir)?;
    }

    if let Some(parent) = target_dir.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut command = Command::new("git");
    command.args(["clone", "--depth=1"]);
    if let Some(ref_name) = ref_name {
        command.args(["--branch", ref_name]);
    }
    let output = command
        .arg(url)
        .arg(target_dir)
        .output()
        .map_err(|e| Error::GitClone {
            url: url.to_string(),
            r#ref: ref_name.map(str::to_string),
            message: e.to_string(),
        })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);

        let message = if stderr.contains("Authentication failed")
            || stderr.contains("Permission denied")
            || stderr.contains("Could not read from remote repository")
        {
            format!(
                "Authentication failed. Make sure you have access to the repository.\n\
                For private repos, ensure you have:\n\
                - SSH key added to ssh-agent\n\
                - Git credentials configured\n\
                - Personal access token set up\n\
                Error: {}",
                stderr
            )
        } else {
            stderr.trim().to_string()
        };

        return Err(Error::GitClone {
            url: url.to_string(),
            r#ref: ref_name.map(str::to_string),
            message,
        });
    }

    Ok(())
}

/// Whether a library URI should be fetched with git.
///
/// Accepts URLs with an `http`, `https`, `ssh`, `git` or `file` scheme and
/// scp-style `user@host:path` addresses.
pub fn is_git_uri(uri: &str) -> bool {
    if let Ok(url) = Url::parse(uri) {
        return matches!(url.scheme(), "http" | "https" | "ssh" | "git" | "file");
    }
    is_scp_like(uri)
}

fn is_scp_like(uri: &str) -> bool {
    let Some((user_host, path)) = uri.split_once(':') else {
        return false;
    };
    let Some((user, host)) = user_host.split_once('@') else {
        return false;
    };
    !user.is_empty() && !host.is_empty() && !path.is_empty() && !host.contains('/')
}

/// Derive a directory name for a library from its URI.
///
/// `https://github.com/acme/rules.git` becomes `rules`.
pub fn library_name(uri: &str) -> String {
    let trimmed = uri.trim_end_matches('/');
    let last = trimmed
        .rsplit(['/', ':', '\\'])
        .next()
        .unwrap_or(trimmed);
    let name = last.strip_suffix(".git").unwrap_or(last);
    if name.is_empty() {
        "library".to_string()
    } else {
        name.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_git_uri() {
        assert!(is_git_uri("https://github.com/acme/rules.git"));
        assert!(is_git_uri("ssh://git@github.com/acme/rules.git"));
        assert!(is_git_uri("git@github.com:acme/rules.git"));
        assert!(is_git_uri("file:///srv/rules"));
        assert!(!is_git_uri("/srv/rules"));
        assert!(!is_git_uri("relative/rules"));
        assert!(!is_git_uri("ftp://example.com/rules"));
    }

    #[test]
    fn test_library_name() {
        assert_eq!(library_name("https://github.com/acme/rules.git"), "rules");
        assert_eq!(library_name("git@github.com:acme/policies.git"), "policies");
        assert_eq!(library_name("/srv/shared/team-rules/"), "team-rules");
        assert_eq!(library_name("/"), "library");
    }

    #[test]
    fn test_clone_missing_repository_fails() {
        let temp = tempfile::TempDir::new().unwrap();
        let result = clone_shallow(
            temp.path().join("no-such-repo").to_str().unwrap(),
            None,
            &temp.path().join("dest"),
        );
        assert!(matches!(result, Err(Error::GitClone { .. })));
    }
}
