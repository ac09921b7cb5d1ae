//! Read-only snapshot queries against an existing clone
//!
//! Each query passes the repository path to git explicitly via the child's
//! working directory; the process-wide cwd is never touched.

use std::path::{Path, PathBuf};
use std::process::Command;

use crate::{Error, Result};

/// Read-only metadata about a local checkout
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoSnapshot {
    /// URL of the `origin` remote
    pub remote_url: String,
    /// Currently checked-out branch (empty on a detached HEAD)
    pub current_branch: String,
    /// Commit hash of HEAD
    pub commit_hash: String,
    /// Absolute path of the checkout
    pub path: PathBuf,
}

/// Query the snapshot info of the clone at `path`
///
/// All three facts are queried independently; any failure aborts with no
/// partial result.
pub fn repo_info(path: &Path) -> Result<RepoSnapshot> {
    if path.as_os_str().is_empty() {
        return Err(Error::Validation(
            "repository path cannot be empty".to_string(),
        ));
    }

    if !path.exists() {
        return Err(Error::Validation(format!(
            "repository path {} does not exist",
            path.display()
        )));
    }

    if !path.join(".git").exists() {
        return Err(Error::Validation(format!(
            "path {} is not a git repository",
            path.display()
        )));
    }

    let remote_url = git_query(path, &["config", "--get", "remote.origin.url"])?;
    let current_branch = git_query(path, &["branch", "--show-current"])?;
    let commit_hash = git_query(path, &["rev-parse", "HEAD"])?;

    Ok(RepoSnapshot {
        remote_url,
        current_branch,
        commit_hash,
        path: if path.is_absolute() {
            path.to_path_buf()
        } else {
            std::env::current_dir()?.join(path)
        },
    })
}

fn git_query(repo: &Path, args: &[&str]) -> Result<String> {
    let output = Command::new("git")
        .args(args)
        .current_dir(repo)
        .output()
        .map_err(|e| Error::Query(format!("failed to run git {}: {}", args.join(" "), e)))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        let stderr = stderr.trim();
        let diagnostic = if stderr.is_empty() {
            "unknown error"
        } else {
            stderr
        };
        return Err(Error::Query(format!(
            "git {} failed: {}",
            args.join(" "),
            diagnostic
        )));
    }

    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
}
