//! multibuild CLI - sequential multi-platform player-build orchestrator
//!
//! Entry point for the multibuild command-line application.

use anyhow::Result;
use clap::Parser;

use multibuild::cli::output::display_error;
use multibuild::cli::Cli;
use multibuild::error::{OrchestratorError, RunError};

/// Exit status reported to driving automation: 0 succeeded, 1 failed,
/// 2 nothing selected, 3 cancelled.
fn exit_code(error: &anyhow::Error) -> i32 {
    if matches!(
        error.downcast_ref::<OrchestratorError>(),
        Some(OrchestratorError::InvalidSelection)
    ) {
        return 2;
    }
    match error.downcast_ref::<RunError>() {
        Some(RunError::Cancelled) => 3,
        Some(RunError::BuildFailed { .. }) | None => 1,
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing subscriber; -v/-vv raise the level
    let default_level = match cli.verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        _ => tracing::Level::DEBUG,
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(default_level.into()),
        )
        .init();

    // Run the command and handle errors
    match cli.run().await {
        Ok(()) => Ok(()),
        Err(e) => {
            display_error(&e);
            std::process::exit(exit_code(&e));
        }
    }
}
