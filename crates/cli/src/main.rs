//! ragask CLI
//!
//! Terminal front end for a retrieval-augmented question answering service.

mod commands;

use clap::{Parser, Subcommand};
use commands::{AskCommand, HealthCommand, InteractiveCommand};
use ragask_core::{config::AppConfig, logging, AppResult};
use std::path::PathBuf;
use std::process::ExitCode;

/// Ask questions of a RAG backend and render its reasoning and answer
///
/// `RAGASK_BASE_URL`, `RAGASK_TIMEOUT`, `RUST_LOG` and `NO_COLOR` are read by
/// `AppConfig::load_from`; the flags below only override them.
#[derive(Parser, Debug)]
#[command(name = "ragask")]
#[command(about = "Ask questions of a RAG backend", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to config file (default: .ragask/config.yaml if present)
    #[arg(short, long, global = true, env = "RAGASK_CONFIG")]
    config: Option<PathBuf>,

    /// Base URL of the ask service
    #[arg(short, long, global = true)]
    base_url: Option<String>,

    /// Request timeout in seconds (default: wait indefinitely)
    #[arg(short, long, global = true)]
    timeout: Option<u64>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Enable verbose output (sets log level to debug)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Ask a single question
    Ask(AskCommand),

    /// Read questions from stdin, one per line
    Interactive(InteractiveCommand),

    /// Check that the backend is reachable
    Health(HealthCommand),
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> AppResult<ExitCode> {
    let config = AppConfig::load_from(cli.config)?.with_overrides(
        cli.base_url,
        cli.timeout,
        cli.log_level,
        cli.verbose,
        cli.no_color,
    );

    logging::init_logging(config.log_level.as_deref(), config.no_color)?;

    tracing::debug!("Backend: {}", config.base_url);
    tracing::debug!("Timeout: {:?}", config.timeout_secs);

    config.validate()?;

    let command_name = match &cli.command {
        Commands::Ask(_) => "ask",
        Commands::Interactive(_) => "interactive",
        Commands::Health(_) => "health",
    };
    let _span = tracing::info_span!("command", name = command_name).entered();

    let result = match cli.command {
        Commands::Ask(cmd) => cmd.execute(&config).await,
        Commands::Interactive(cmd) => cmd.execute(&config).await.map(|_| ExitCode::SUCCESS),
        Commands::Health(cmd) => cmd.execute(&config).await.map(|_| ExitCode::SUCCESS),
    };

    match &result {
        Ok(_) => tracing::info!("Command completed"),
        Err(e) => tracing::error!("Command failed: {}", e),
    }

    result
}
