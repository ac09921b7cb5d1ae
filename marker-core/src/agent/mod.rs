//! Agent module for invoking Claude Code subprocesses

mod backend;
mod prompts;

pub use backend::{AgentEnvelope, AgentOutput, Backend, ClaudeBackend};
pub use prompts::{get_template, render, PromptContext, Template};
