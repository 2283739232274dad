//! Build command implementation
//!
//! Implements `multibuild build` to run the engine's player pipeline once
//! per target, sequentially, fail-fast.

use anyhow::{Context, Result};
use std::path::Path;
use tokio_util::sync::CancellationToken;

use crate::cli::output::{self, ConsoleSink, JsonSink};
use crate::core::backend::Host;
use crate::core::catalog::TargetCatalog;
use crate::core::manifest::Manifest;
use crate::core::orchestrator::{NullSink, Orchestrator, ProgressSink, RunStatus};
use crate::core::target::TargetId;
use crate::error::{OrchestratorError, RunError};
use crate::infra::{engine, state::SessionState};

/// Build options from the CLI
pub struct BuildOptions {
    /// Explicit ordered targets; empty means "use the stored selection"
    pub targets: Vec<TargetId>,
    /// Suppress progress rendering
    pub quiet: bool,
    /// Emit progress as JSON lines
    pub json: bool,
}

/// Execute the build command
pub async fn execute(project_dir: &Path, options: BuildOptions) -> Result<()> {
    let manifest = Manifest::load(project_dir).context("Failed to load project manifest")?;
    let default_active = default_active_target(&manifest);
    let mut session = SessionState::load_or_new(project_dir, default_active)
        .context("Failed to load session state")?;

    let (mut host, mut backend) = engine::connect(&manifest, session.active_target);

    // Target list is fixed at trigger time; selection changes during the
    // run cannot affect it.
    let targets = if options.targets.is_empty() {
        let available = TargetCatalog::refresh(&host);
        session.selection.reconcile(&available);
        session.selection.selected()
    } else {
        options.targets.clone()
    };
    if targets.is_empty() {
        return Err(OrchestratorError::InvalidSelection.into());
    }

    let sink: Box<dyn ProgressSink> = if options.json {
        Box::new(JsonSink)
    } else if options.quiet {
        Box::new(NullSink)
    } else {
        Box::new(ConsoleSink::new())
    };

    let cancel = CancellationToken::new();
    let signal_cancel = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::info!("Interrupt received, stopping after the current target");
            signal_cancel.cancel();
        }
    });

    let settings = manifest.product_settings(project_dir);
    let run = Orchestrator::new(&mut host, &mut backend, settings, sink.as_ref())
        .with_cancellation(cancel)
        .run(targets)?;

    // Persist the (restored) active target for the next invocation.
    session.active_target = host.active_target();
    session
        .save(project_dir)
        .context("Failed to save session state")?;

    match run.status {
        RunStatus::Succeeded => {
            if !options.quiet && !options.json {
                let count = run.targets.len();
                let noun = if count == 1 { "platform" } else { "platforms" };
                println!("{} Built {count} {noun}", output::status::SUCCESS);
            }
            Ok(())
        }
        RunStatus::Failed => {
            let target = run
                .failed_target
                .expect("failed run records the failing target");
            let message = run.outcomes.last().and_then(|o| o.message.clone());
            Err(RunError::BuildFailed { target, message }.into())
        }
        RunStatus::Cancelled => Err(RunError::Cancelled.into()),
    }
}

/// Where the active-target register starts before any state is persisted:
/// the first buildable target, the way a fresh engine install comes up
/// configured for its first supported platform.
pub fn default_active_target(manifest: &Manifest) -> TargetId {
    manifest
        .host
        .targets
        .first()
        .copied()
        .unwrap_or(TargetId::Windows64)
}
