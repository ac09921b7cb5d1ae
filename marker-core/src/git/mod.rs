//! Git subprocess operations: cloning, cleanup, and snapshot queries

mod clone;
mod info;

pub use clone::{clone_repository, delete_repository};
pub use info::{repo_info, RepoSnapshot};
