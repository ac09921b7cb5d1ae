//! Backend abstraction for the text-generation agent
//!
//! The agent is an opaque blocking capability: prompt in, text out. It is
//! invoked with a structured argument list only. The prompt is always a
//! single argv element, never interpolated through a shell.

use async_trait::async_trait;
use serde::Deserialize;
use std::process::Stdio;
use tokio::process::Command;

use crate::config::AgentConfig;
use crate::{Error, Result};

/// Raw result of one agent invocation
#[derive(Debug, Clone)]
pub struct AgentOutput {
    /// Captured standard output (the JSON envelope)
    pub stdout: String,
    /// Captured standard error
    pub stderr: String,
    /// Process exit code
    pub exit_code: i32,
}

/// Outer response envelope produced by `--output-format json`
///
/// Only `result` is interesting; everything else in the envelope is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct AgentEnvelope {
    /// The agent's actual text reply
    pub result: String,
}

impl AgentEnvelope {
    /// Parse the envelope from captured agent stdout
    pub fn parse(stdout: &str) -> Result<Self> {
        serde_json::from_str(stdout)
            .map_err(|e| Error::Agent(format!("unexpected agent envelope: {}", e)))
    }
}

/// Trait for text-generation backends
#[async_trait]
pub trait Backend: Send + Sync {
    /// Get the name of this backend
    fn name(&self) -> &'static str;

    /// Build the command for an invocation with the given tool allow-list
    fn build_command(&self, allowed_tools: &[String]) -> Command;

    /// Run the backend to completion with a prompt, capturing its output
    async fn run(&self, prompt: &str, allowed_tools: &[String]) -> Result<AgentOutput>;

    /// Check if this backend is available on the system
    fn is_available(&self) -> bool;
}

/// Claude Code backend implementation
#[derive(Debug, Clone)]
pub struct ClaudeBackend {
    pub claude_path: String,
    pub model: Option<String>,
}

impl ClaudeBackend {
    /// Create a new Claude backend with default settings
    pub fn new() -> Self {
        Self {
            claude_path: "claude".to_string(),
            model: None,
        }
    }

    /// Create a Claude backend from agent configuration
    pub fn from_config(config: &AgentConfig) -> Self {
        let mut backend = Self::new().with_path(&config.claude_path);
        if let Some(ref model) = config.model {
            backend = backend.with_model(model);
        }
        backend
    }

    /// Create a Claude backend with custom path
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.claude_path = path.into();
        self
    }

    /// Create a Claude backend with a specific model
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }
}

impl Default for ClaudeBackend {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Backend for ClaudeBackend {
    fn name(&self) -> &'static str {
        "claude"
    }

    fn build_command(&self, allowed_tools: &[String]) -> Command {
        let mut cmd = Command::new(&self.claude_path);
        cmd.arg("--output-format").arg("json");

        if let Some(ref model) = self.model {
            cmd.arg("--model").arg(model);
        }

        if !allowed_tools.is_empty() {
            cmd.arg("--allowed-tools").arg(allowed_tools.join(","));
        }

        cmd.stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());

        cmd
    }

    async fn run(&self, prompt: &str, allowed_tools: &[String]) -> Result<AgentOutput> {
        let mut cmd = self.build_command(allowed_tools);
        cmd.arg("-p").arg(prompt);

        let output = cmd.output().await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::Agent(format!(
                    "Claude executable not found at '{}'. Is Claude Code installed?",
                    self.claude_path
                ))
            } else {
                Error::Io(e)
            }
        })?;

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
        let exit_code = output.status.code().unwrap_or(-1);

        if !output.status.success() {
            return Err(Error::Agent(format!(
                "claude exited with status {}: {}",
                exit_code,
                stderr.trim()
            )));
        }

        Ok(AgentOutput {
            stdout,
            stderr,
            exit_code,
        })
    }

    fn is_available(&self) -> bool {
        std::process::Command::new(&self.claude_path)
            .arg("--version")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .is_ok()
    }
}
