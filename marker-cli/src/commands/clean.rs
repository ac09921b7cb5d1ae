//! Clean command - delete a clone directory

use std::path::PathBuf;

use clap::Args;
use marker_core::git;

/// Arguments for the clean command
#[derive(Args, Debug)]
pub struct CleanArgs {
    /// Path of the clone to delete
    #[arg(required = true)]
    pub path: PathBuf,
}

impl CleanArgs {
    /// Execute the clean command
    pub fn execute(&self) -> anyhow::Result<()> {
        git::delete_repository(&self.path)?;
        println!("Removed {}", self.path.display());
        Ok(())
    }
}
