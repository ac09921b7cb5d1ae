//! Reviewer agent invocation

use crate::agent::{AgentOutput, Backend, ClaudeBackend};
use crate::config::AgentConfig;
use crate::{Error, Result};

use super::ReviewRequest;

/// Reviewer driving the agent backend over a [`ReviewRequest`]
pub struct Reviewer {
    backend: Box<dyn Backend>,
    review_tools: Vec<String>,
}

impl Reviewer {
    /// Create a reviewer over an explicit backend
    pub fn new(backend: Box<dyn Backend>, review_tools: Vec<String>) -> Self {
        Self {
            backend,
            review_tools,
        }
    }

    /// Create a reviewer with a Claude backend from agent configuration
    pub fn from_config(config: &AgentConfig) -> Self {
        Self::new(
            Box::new(ClaudeBackend::from_config(config)),
            config.review_tools.clone(),
        )
    }

    /// Run the review and return the agent's raw output unparsed
    ///
    /// The report itself is written to `request.output_path` by the agent;
    /// this call only surfaces whether the invocation succeeded.
    pub async fn review(&self, request: &ReviewRequest) -> Result<AgentOutput> {
        tracing::info!(
            homework_dir = %request.homework_dir.display(),
            requirement_path = %request.requirement_path.display(),
            output_path = %request.output_path.display(),
            "Starting homework review"
        );

        let prompt = request.to_prompt();

        let output = self
            .backend
            .run(&prompt, &self.review_tools)
            .await
            .map_err(|e| Error::Review(e.to_string()))?;

        tracing::info!(exit_code = output.exit_code, "Review agent completed");

        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[tokio::test]
    async fn test_review_failure_maps_to_review_error() {
        let backend = ClaudeBackend::new().with_path("/nonexistent/claude-bin");
        let reviewer = Reviewer::new(Box::new(backend), vec!["Read".to_string()]);
        let request = ReviewRequest::new("hw", "req.md", "out.md");

        let err = reviewer.review(&request).await.unwrap_err();
        assert!(matches!(err, Error::Review(_)));
    }
}
