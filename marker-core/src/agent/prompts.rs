//! Agent prompt templates
//!
//! Templates are embedded markdown with `{{VARIABLE}}` placeholders rendered
//! from a [`PromptContext`].

use std::collections::HashMap;

/// Embedded prompt templates
const EXTRACT_REPO_INFO_PROMPT: &str = include_str!("prompts/extract_repo_info.md");
const REVIEW_PROMPT: &str = include_str!("prompts/review.md");

/// The prompt templates Marker ships with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Template {
    /// Turn a submission link into a repository descriptor
    ExtractRepoInfo,
    /// Review a homework directory against a requirements document
    Review,
}

/// Get the raw prompt template
pub fn get_template(template: Template) -> &'static str {
    match template {
        Template::ExtractRepoInfo => EXTRACT_REPO_INFO_PROMPT,
        Template::Review => REVIEW_PROMPT,
    }
}

/// Context for rendering a prompt template
#[derive(Debug, Clone, Default)]
pub struct PromptContext {
    variables: HashMap<String, String>,
}

impl PromptContext {
    /// Create a new empty context
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a variable value (builder pattern)
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.variables.insert(key.into(), value.into());
        self
    }
}

/// Render a prompt template with the given context
pub fn render(template: Template, context: &PromptContext) -> String {
    let mut result = get_template(template).to_string();

    for (key, value) in &context.variables {
        let placeholder = format!("{{{{{}}}}}", key);
        result = result.replace(&placeholder, value);
    }

    result
}
