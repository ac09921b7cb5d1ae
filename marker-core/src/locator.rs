//! Resolving a submission link into a repository descriptor
//!
//! The locator sends the link to the agent with the extraction prompt, peels
//! the JSON envelope off the reply, runs the text extractor over the inner
//! result, and normalizes the extracted object into a validated [`RepoInfo`].

use serde_json::{Map, Value};
use url::Url;

use crate::agent::{render, AgentEnvelope, Backend, ClaudeBackend, PromptContext, Template};
use crate::config::AgentConfig;
use crate::extract::extract_json;
use crate::{Error, Result};

/// Aliased keys accepted for the repository URL, in priority order
const REPO_KEYS: &[&str] = &["repo_url", "repo", "repository", "url"];
/// Aliased keys accepted for the branch
const BRANCH_KEYS: &[&str] = &["branch", "ref", "default_branch"];
/// Aliased keys accepted for the homework directory
const DIR_KEYS: &[&str] = &["user_homework_dir", "homework_dir", "dir", "path"];

/// Hosts that get a `.git` suffix appended to bare clone URLs
const GIT_HOSTS: &[&str] = &["github.com", "gitee.com", "gitlab.com", "bitbucket.org"];

/// Validated repository descriptor
///
/// Construction either yields all required fields or fails; a partially
/// populated descriptor is never returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoInfo {
    /// Clone URL, `.git`-suffixed for recognized hosts
    pub repo: String,
    /// Branch name, slashes preserved verbatim
    pub branch: String,
    /// Relative path of the homework inside the repository, `.` for the root
    pub homework_dir: String,
    /// Submission author
    pub author: String,
}

impl RepoInfo {
    /// Normalize an extracted JSON object into a validated descriptor
    ///
    /// Required fields are checked in a fixed order: repo, branch, then
    /// author; the homework directory defaults to `.` and never fails.
    pub fn from_object(data: &Map<String, Value>) -> Result<Self> {
        let repo = first_present(data, REPO_KEYS)
            .ok_or_else(|| Error::Resolution("missing required field `repo`".to_string()))?;
        let repo = normalize_repo_url(repo.trim());

        let branch = first_present(data, BRANCH_KEYS)
            .ok_or_else(|| Error::Resolution("missing required field `branch`".to_string()))?;

        let homework_dir = first_present(data, DIR_KEYS).unwrap_or_else(|| ".".to_string());

        let author = first_present(data, &["author"])
            .ok_or_else(|| Error::Resolution("missing required field `author`".to_string()))?;

        Ok(Self {
            repo,
            branch,
            homework_dir,
            author,
        })
    }
}

/// First non-empty string value among the aliased keys
fn first_present(data: &Map<String, Value>, keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|key| {
        data.get(*key)
            .and_then(Value::as_str)
            .filter(|s| !s.trim().is_empty())
            .map(String::from)
    })
}

/// Append `.git` to http(s)/ssh-style URLs on recognized git hosts
fn normalize_repo_url(repo: &str) -> String {
    if repo.ends_with(".git") {
        return repo.to_string();
    }

    let host = if repo.starts_with("http://") || repo.starts_with("https://") {
        Url::parse(repo)
            .ok()
            .and_then(|u| u.host_str().map(String::from))
    } else if let Some(rest) = repo.strip_prefix("git@") {
        rest.split_once(':').map(|(host, _)| host.to_string())
    } else {
        None
    };

    match host {
        Some(h) if GIT_HOSTS.contains(&h.as_str()) => format!("{}.git", repo),
        _ => repo.to_string(),
    }
}

/// Locator resolving a submission link via the agent backend
pub struct RepoLocator {
    backend: Box<dyn Backend>,
    extract_tools: Vec<String>,
}

impl RepoLocator {
    /// Create a locator over an explicit backend
    pub fn new(backend: Box<dyn Backend>, extract_tools: Vec<String>) -> Self {
        Self {
            backend,
            extract_tools,
        }
    }

    /// Create a locator with a Claude backend from agent configuration
    pub fn from_config(config: &AgentConfig) -> Self {
        Self::new(
            Box::new(ClaudeBackend::from_config(config)),
            config.extract_tools.clone(),
        )
    }

    /// Resolve a submission link into a validated [`RepoInfo`]
    pub async fn resolve(&self, link: &str) -> Result<RepoInfo> {
        if link.trim().is_empty() {
            return Err(Error::Validation("link cannot be empty".to_string()));
        }

        let prompt = render(
            Template::ExtractRepoInfo,
            &PromptContext::new().with("LINK", link),
        );

        let output = self
            .backend
            .run(&prompt, &self.extract_tools)
            .await
            .map_err(|e| Error::Resolution(format!("agent invocation failed: {}", e)))?;

        let envelope = AgentEnvelope::parse(&output.stdout)
            .map_err(|e| Error::Resolution(e.to_string()))?;

        let object =
            extract_json(&envelope.result).map_err(|e| Error::Resolution(e.to_string()))?;

        let info = RepoInfo::from_object(&object)?;

        tracing::info!(
            repo = %info.repo,
            branch = %info.branch,
            homework_dir = %info.homework_dir,
            author = %info.author,
            "Resolved repository info"
        );

        Ok(info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object(value: Value) -> Map<String, Value> {
        value.as_object().unwrap().clone()
    }

    #[test]
    fn test_from_object_full() {
        let data = object(json!({
            "repo_url": "https://github.com/a/b",
            "branch": "main",
            "user_homework_dir": "week01",
            "author": "a"
        }));
        let info = RepoInfo::from_object(&data).unwrap();
        assert_eq!(info.repo, "https://github.com/a/b.git");
        assert_eq!(info.branch, "main");
        assert_eq!(info.homework_dir, "week01");
        assert_eq!(info.author, "a");
    }

    #[test]
    fn test_repo_key_aliases() {
        for key in ["repo_url", "repo", "repository", "url"] {
            let data = object(json!({
                key: "https://example.com/a/b",
                "branch": "main",
                "author": "a"
            }));
            let info = RepoInfo::from_object(&data).unwrap();
            assert_eq!(info.repo, "https://example.com/a/b");
        }
    }

    #[test]
    fn test_branch_key_aliases() {
        for key in ["branch", "ref", "default_branch"] {
            let data = object(json!({
                "repo": "https://example.com/a/b",
                key: "dev",
                "author": "a"
            }));
            let info = RepoInfo::from_object(&data).unwrap();
            assert_eq!(info.branch, "dev");
        }
    }

    #[test]
    fn test_homework_dir_defaults_to_dot() {
        let data = object(json!({
            "repo": "https://example.com/a/b",
            "branch": "main",
            "author": "a"
        }));
        let info = RepoInfo::from_object(&data).unwrap();
        assert_eq!(info.homework_dir, ".");
    }

    #[test]
    fn test_empty_homework_dir_defaults_to_dot() {
        let data = object(json!({
            "repo": "https://example.com/a/b",
            "branch": "main",
            "user_homework_dir": "",
            "author": "a"
        }));
        let info = RepoInfo::from_object(&data).unwrap();
        assert_eq!(info.homework_dir, ".");
    }

    #[test]
    fn test_branch_with_slashes_preserved() {
        let data = object(json!({
            "repo": "https://gitee.com/a/training",
            "branch": "homework/week03-2",
            "user_homework_dir": "week03-homework-2",
            "author": "a"
        }));
        let info = RepoInfo::from_object(&data).unwrap();
        assert_eq!(info.branch, "homework/week03-2");
        assert_eq!(info.homework_dir, "week03-homework-2");
    }

    #[test]
    fn test_missing_repo_named_first() {
        // branch and author are also missing; repo must be reported first
        let data = object(json!({"user_homework_dir": "x"}));
        let err = RepoInfo::from_object(&data).unwrap_err();
        assert!(err.to_string().contains("`repo`"));
    }

    #[test]
    fn test_missing_branch() {
        let data = object(json!({
            "repo": "https://github.com/a/b",
            "author": "a"
        }));
        let err = RepoInfo::from_object(&data).unwrap_err();
        assert!(err.to_string().contains("`branch`"));
    }

    #[test]
    fn test_missing_author() {
        let data = object(json!({
            "repo": "https://github.com/a/b",
            "branch": "main"
        }));
        let err = RepoInfo::from_object(&data).unwrap_err();
        assert!(err.to_string().contains("`author`"));
    }

    #[test]
    fn test_normalize_known_host() {
        assert_eq!(
            normalize_repo_url("https://github.com/a/b"),
            "https://github.com/a/b.git"
        );
        assert_eq!(
            normalize_repo_url("https://gitee.com/a/b"),
            "https://gitee.com/a/b.git"
        );
    }

    #[test]
    fn test_normalize_unknown_host_unchanged() {
        assert_eq!(
            normalize_repo_url("https://example.com/a/b"),
            "https://example.com/a/b"
        );
    }

    #[test]
    fn test_normalize_already_suffixed_unchanged() {
        assert_eq!(
            normalize_repo_url("https://github.com/a/b.git"),
            "https://github.com/a/b.git"
        );
    }

    #[test]
    fn test_normalize_ssh_url() {
        assert_eq!(
            normalize_repo_url("git@github.com:a/b"),
            "git@github.com:a/b.git"
        );
        assert_eq!(
            normalize_repo_url("git@github.com:a/b.git"),
            "git@github.com:a/b.git"
        );
    }

    #[test]
    fn test_normalize_non_url_unchanged() {
        assert_eq!(normalize_repo_url("a/b"), "a/b");
    }

    #[tokio::test]
    async fn test_resolve_empty_link() {
        let locator = RepoLocator::from_config(&AgentConfig::default());
        let err = locator.resolve("  ").await.unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
    }
}
