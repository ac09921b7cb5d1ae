//! Marker Core - Core library for automated homework review
//!
//! This crate resolves a homework submission link into a repository
//! descriptor with a Claude Code agent, clones the repository, and drives a
//! second agent to write a review report.

pub mod agent;
pub mod config;
pub mod error;
pub mod extract;
pub mod git;
pub mod locator;
pub mod review;
pub mod workflow;

pub use config::Config;
pub use error::{Error, Result};
pub use locator::{RepoInfo, RepoLocator};
pub use workflow::{ReviewOutcome, ReviewPipeline};
