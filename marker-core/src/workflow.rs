//! The end-to-end review pipeline: resolve, clone, review
//!
//! Fully sequential. Each run clones into a fresh timestamped directory
//! under the configured clone root, so runs never collide. The first failing
//! stage aborts the run; there is no partial-success mode.

use std::path::{Path, PathBuf};

use chrono::Local;

use crate::agent::AgentOutput;
use crate::config::Config;
use crate::git;
use crate::locator::{RepoInfo, RepoLocator};
use crate::review::{ReviewRequest, Reviewer};
use crate::Result;

/// Result of one completed pipeline run
#[derive(Debug)]
pub struct ReviewOutcome {
    /// The resolved repository descriptor
    pub repo_info: RepoInfo,
    /// Absolute path of the fresh clone
    pub cloned_path: PathBuf,
    /// Where the agent was told to write the report
    pub output_path: PathBuf,
    /// Raw output of the review agent
    pub agent_output: AgentOutput,
}

/// Orchestrates resolve → clone → review
pub struct ReviewPipeline {
    config: Config,
}

impl ReviewPipeline {
    /// Create a pipeline with the given configuration
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Run the full pipeline for one submission link
    pub async fn run(&self, link: &str, requirement_path: &Path) -> Result<ReviewOutcome> {
        let timestamp = Local::now().format("%Y%m%d%H%M%S").to_string();
        let target = self.config.workspace.clone_root.join(&timestamp);

        tracing::info!(link = %link, run = %timestamp, "Starting review pipeline");

        let locator = RepoLocator::from_config(&self.config.agent);
        let info = locator.resolve(link).await?;

        let cloned_path = git::clone_repository(&info.repo, &target, Some(&info.branch))?;

        let homework_dir = cloned_path.join(&info.homework_dir);
        let output_path = cloned_path.join(format!("homework-review-{}.md", timestamp));

        tracing::info!(
            cloned_path = %cloned_path.display(),
            homework_dir = %homework_dir.display(),
            output_path = %output_path.display(),
            "Repository cloned, starting review"
        );

        let reviewer = Reviewer::from_config(&self.config.agent);
        let request = ReviewRequest::new(homework_dir, requirement_path, &output_path);
        let agent_output = reviewer.review(&request).await?;

        Ok(ReviewOutcome {
            repo_info: info,
            cloned_path,
            output_path,
            agent_output,
        })
    }
}
