//! Info command - show snapshot info for an existing clone

use std::path::PathBuf;

use clap::Args;
use marker_core::git;

/// Arguments for the info command
#[derive(Args, Debug)]
pub struct InfoArgs {
    /// Path to the clone to inspect
    #[arg(required = true)]
    pub path: PathBuf,
}

impl InfoArgs {
    /// Execute the info command
    pub fn execute(&self) -> anyhow::Result<()> {
        let snapshot = git::repo_info(&self.path)?;

        println!("Repository snapshot");
        println!();
        println!("Path:   {}", snapshot.path.display());
        println!("Remote: {}", snapshot.remote_url);
        println!("Branch: {}", snapshot.current_branch);
        println!("Commit: {}", snapshot.commit_hash);

        Ok(())
    }
}
