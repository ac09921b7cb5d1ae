//! Review command - run the full resolve/clone/review pipeline

use std::path::PathBuf;

use clap::Args;
use marker_core::{Config, ReviewPipeline};

/// Arguments for the review command
#[derive(Args, Debug)]
pub struct ReviewArgs {
    /// Link to the homework submission (repository/branch/subdirectory)
    #[arg(required = true)]
    pub link: String,

    /// Path to the homework requirements document
    #[arg(required = true)]
    pub requirement: PathBuf,

    /// Directory under which the timestamped clone is created
    /// (overrides the configured clone root)
    #[arg(short = 'o', long)]
    pub output_dir: Option<PathBuf>,
}

impl ReviewArgs {
    /// Execute the review command
    pub async fn execute(&self, verbose: bool, config: &Config) -> anyhow::Result<()> {
        let mut config = config.clone();
        if let Some(ref dir) = self.output_dir {
            config.workspace.clone_root = dir.clone();
        }

        if verbose {
            tracing::info!(
                link = %self.link,
                requirement = %self.requirement.display(),
                clone_root = %config.workspace.clone_root.display(),
                "Starting review"
            );
        }

        if !self.requirement.exists() {
            anyhow::bail!(
                "Requirements document not found: {}",
                self.requirement.display()
            );
        }

        let pipeline = ReviewPipeline::new(config);
        let outcome = pipeline.run(&self.link, &self.requirement).await?;

        println!("Review complete");
        println!();
        println!("Repository: {}", outcome.repo_info.repo);
        println!("Branch:     {}", outcome.repo_info.branch);
        println!("Author:     {}", outcome.repo_info.author);
        println!("Clone:      {}", outcome.cloned_path.display());
        println!("Report:     {}", outcome.output_path.display());

        if verbose {
            println!();
            println!("Agent exit code: {}", outcome.agent_output.exit_code);
        }

        Ok(())
    }
}
