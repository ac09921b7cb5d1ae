//! Repository cloning and cleanup
//!
//! Cloning is destructive-idempotent: a stale prior clone at the target path
//! is replaced wholesale, never merged. Deletion is depth-first and leaves
//! partial state in place when it fails mid-walk.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::{Error, Result};

/// Clone a repository into `target`, replacing any directory already there
///
/// Returns the absolute form of `target` on success.
pub fn clone_repository(url: &str, target: &Path, branch: Option<&str>) -> Result<PathBuf> {
    if url.is_empty() {
        return Err(Error::Validation(
            "repository URL cannot be empty".to_string(),
        ));
    }

    if target.as_os_str().is_empty() {
        return Err(Error::Validation(
            "target directory cannot be empty".to_string(),
        ));
    }

    if target.exists() {
        if target.is_dir() {
            tracing::warn!(
                target_dir = %target.display(),
                "Target directory already exists, removing it"
            );
            remove_tree(target)?;
        } else {
            return Err(Error::Conflict(format!(
                "target path {} exists but is not a directory",
                target.display()
            )));
        }
    }

    if let Some(parent) = target.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let mut cmd = Command::new("git");
    cmd.arg("clone").arg(url).arg(target);

    if let Some(branch) = branch {
        cmd.arg("--branch").arg(branch);
    }

    tracing::info!(url = %url, target_dir = %target.display(), "Cloning repository");

    let output = cmd
        .output()
        .map_err(|e| Error::Clone(format!("failed to run git clone: {}", e)))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        let stderr = stderr.trim();
        let diagnostic = if stderr.is_empty() {
            "unknown error"
        } else {
            stderr
        };
        return Err(Error::Clone(format!("git clone failed: {}", diagnostic)));
    }

    let absolute = absolute_path(target)?;
    tracing::info!(target_dir = %absolute.display(), "Successfully cloned repository");
    Ok(absolute)
}

/// Delete a cloned repository directory
///
/// A nonexistent path is a logged no-op returning `true`.
pub fn delete_repository(path: &Path) -> Result<bool> {
    if path.as_os_str().is_empty() {
        return Err(Error::Validation(
            "repository path cannot be empty".to_string(),
        ));
    }

    if !path.exists() {
        tracing::warn!(path = %path.display(), "Repository path does not exist");
        return Ok(true);
    }

    if !path.is_dir() {
        return Err(Error::Validation(format!(
            "path {} is not a directory",
            path.display()
        )));
    }

    remove_tree(path)?;
    tracing::info!(path = %path.display(), "Deleted repository");
    Ok(true)
}

/// Depth-first recursive removal, children before parents
///
/// Does not follow directory symlinks; they are unlinked like files.
fn remove_tree(path: &Path) -> Result<()> {
    let entries = fs::read_dir(path)
        .map_err(|e| Error::Deletion(format!("failed to read {}: {}", path.display(), e)))?;

    for entry in entries {
        let entry =
            entry.map_err(|e| Error::Deletion(format!("failed to read {}: {}", path.display(), e)))?;
        let child = entry.path();
        let file_type = entry.file_type().map_err(|e| {
            Error::Deletion(format!("failed to stat {}: {}", child.display(), e))
        })?;

        if file_type.is_dir() {
            remove_tree(&child)?;
        } else {
            fs::remove_file(&child).map_err(|e| {
                Error::Deletion(format!("failed to remove {}: {}", child.display(), e))
            })?;
        }
    }

    fs::remove_dir(path)
        .map_err(|e| Error::Deletion(format!("failed to remove {}: {}", path.display(), e)))
}

fn absolute_path(path: &Path) -> Result<PathBuf> {
    if path.is_absolute() {
        Ok(path.to_path_buf())
    } else {
        Ok(std::env::current_dir()?.join(path))
    }
}
