//! Review request construction

use std::path::{Path, PathBuf};

use crate::agent::{render, PromptContext, Template};

/// A request to review one homework submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewRequest {
    /// Directory containing the homework inside the clone
    pub homework_dir: PathBuf,
    /// Path to the requirements document the review is judged against
    pub requirement_path: PathBuf,
    /// Where the agent should write the markdown report
    pub output_path: PathBuf,
}

impl ReviewRequest {
    /// Create a new review request
    pub fn new(
        homework_dir: impl Into<PathBuf>,
        requirement_path: impl Into<PathBuf>,
        output_path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            homework_dir: homework_dir.into(),
            requirement_path: requirement_path.into(),
            output_path: output_path.into(),
        }
    }

    /// Render the review prompt for this request
    pub fn to_prompt(&self) -> String {
        let context = PromptContext::new()
            .with("HOMEWORK_DIR", path_str(&self.homework_dir))
            .with("REQUIREMENT_PATH", path_str(&self.requirement_path))
            .with("OUTPUT_PATH", path_str(&self.output_path));

        render(Template::Review, &context)
    }
}

fn path_str(path: &Path) -> String {
    path.display().to_string()
}
