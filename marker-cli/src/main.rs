//! Marker CLI - Automated homework review
//!
//! Resolves a submission link with a Claude Code agent, clones the
//! repository, and drives a second agent to write a review report.

mod commands;

use clap::{Parser, Subcommand};
use marker_core::Config;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::{CleanArgs, InfoArgs, ReviewArgs};

/// Marker: automated review of student homework submissions
#[derive(Parser, Debug)]
#[command(name = "marker")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to claude executable (overrides config and env)
    #[arg(long, global = true, env = "MARKER_CLAUDE_PATH")]
    claude_path: Option<String>,

    /// Model to use (overrides config and env)
    #[arg(long, global = true, env = "MARKER_MODEL")]
    model: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Show version information
    Version,

    /// Review a homework submission link
    #[command(visible_alias = "r")]
    Review(ReviewArgs),

    /// Show snapshot info of an existing clone
    Info(InfoArgs),

    /// Delete a clone directory
    Clean(CleanArgs),

    /// Show current configuration
    Config,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if cli.verbose {
        tracing::info!("Verbose mode enabled");
    }

    // Load configuration with overrides
    let config = Config::load_with_overrides(cli.claude_path.clone(), cli.model.clone())?;

    if cli.verbose {
        tracing::info!(
            claude_path = %config.agent.claude_path,
            model = ?config.agent.model,
            clone_root = %config.workspace.clone_root.display(),
            "Configuration loaded"
        );
    }

    match cli.command {
        Some(Commands::Version) => {
            println!("marker {}", env!("CARGO_PKG_VERSION"));
        }
        Some(Commands::Review(args)) => {
            args.execute(cli.verbose, &config).await?;
        }
        Some(Commands::Info(args)) => {
            args.execute()?;
        }
        Some(Commands::Clean(args)) => {
            args.execute()?;
        }
        Some(Commands::Config) => {
            println!("Marker Configuration");
            println!("====================");
            println!();
            println!("Agent Settings:");
            println!("  claude_path: {}", config.agent.claude_path);
            println!(
                "  model: {}",
                config.agent.model.as_deref().unwrap_or("(default)")
            );
            println!("  extract_tools: {}", config.agent.extract_tools.join(","));
            println!("  review_tools: {}", config.agent.review_tools.join(","));
            println!();
            println!("Workspace Settings:");
            println!("  clone_root: {}", config.workspace.clone_root.display());
            println!();
            if let Some(path) = Config::default_config_path() {
                println!("Config file: {}", path.display());
                if path.exists() {
                    println!("  (exists)");
                } else {
                    println!("  (not found - using defaults)");
                }
            }
        }
        None => {
            println!("Marker - Automated review of student homework submissions");
            println!();
            println!("Use --help for usage information");
        }
    }

    Ok(())
}
