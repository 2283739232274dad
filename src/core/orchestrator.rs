//! Sequential multi-target build orchestration
//!
//! The state machine at the center of multibuild: given an ordered list of
//! targets, invoke the build backend once per target, report progress, halt
//! on the first failure and always put the host's active build target back
//! where it was before the run.
//!
//! One logical run at a time. The host's active-target register is
//! process-wide mutable state and backend invocations serialize against it,
//! so targets are built strictly in the order given; events for target `i+1`
//! are never emitted before the terminal event for target `i`. Platform
//! builds share output directories and toolchain state, which makes strict
//! sequencing a correctness requirement, not a simplification.

use serde::Serialize;
use tokio_util::sync::CancellationToken;

use super::backend::{BuildBackend, BuildOutcome, Host};
use super::request::{BuildRequest, ProductSettings};
use super::target::TargetId;
use crate::error::OrchestratorError;

/// Structured progress event, consumable by any UI or logger.
///
/// Serialized as JSON lines under `--json`; the `phase` tag matches the
/// human-readable event names.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "phase", rename_all = "kebab-case")]
pub enum ProgressEvent {
    /// A run over `total` targets is starting
    StartAll { total: usize },
    /// Target `index` is about to build
    StartTarget { index: usize, target: TargetId },
    /// Target `index` built successfully
    TargetSucceeded { index: usize, elapsed_seconds: f64 },
    /// Target `index` failed; the run halts after this
    TargetFailed {
        index: usize,
        target: TargetId,
        #[serde(skip_serializing_if = "Option::is_none")]
        message: Option<String>,
    },
    /// Every target built successfully
    AllSucceeded,
    /// The run stopped at the first failing target
    AllFailed,
}

/// Receives progress events during a run
pub trait ProgressSink {
    fn event(&self, event: &ProgressEvent);
}

/// Sink that drops every event
#[derive(Debug, Default)]
pub struct NullSink;

impl ProgressSink for NullSink {
    fn event(&self, _event: &ProgressEvent) {}
}

/// Terminal state of an orchestration run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RunStatus {
    Succeeded,
    Failed,
    Cancelled,
}

/// Record of one completed orchestration run
#[derive(Debug)]
pub struct OrchestrationRun {
    /// The targets the run was asked to build, in order
    pub targets: Vec<TargetId>,
    /// Active target captured before the first build; the restore point
    pub original_target: TargetId,
    /// Outcomes for the targets actually attempted (a prefix of `targets`)
    pub outcomes: Vec<BuildOutcome>,
    /// The target that halted the run, when status is `Failed`
    pub failed_target: Option<TargetId>,
    /// Terminal status
    pub status: RunStatus,
}

/// The sequential build state machine
pub struct Orchestrator<'a> {
    host: &'a mut dyn Host,
    backend: &'a mut dyn BuildBackend,
    settings: ProductSettings,
    sink: &'a dyn ProgressSink,
    cancel: CancellationToken,
}

impl<'a> Orchestrator<'a> {
    pub fn new(
        host: &'a mut dyn Host,
        backend: &'a mut dyn BuildBackend,
        settings: ProductSettings,
        sink: &'a dyn ProgressSink,
    ) -> Self {
        Self {
            host,
            backend,
            settings,
            sink,
            cancel: CancellationToken::new(),
        }
    }

    /// Attach a cancellation token. Cancellation is cooperative and only
    /// observed between target steps; a backend call in flight is opaque
    /// and runs to completion.
    #[must_use]
    pub fn with_cancellation(mut self, cancel: CancellationToken) -> Self {
        self.cancel = cancel;
        self
    }

    /// Build every target in `targets`, in that order.
    ///
    /// Fails fast: the first failing target terminates the run and later
    /// targets are never attempted. Whatever the outcome, the host's active
    /// build target is restored to its pre-run value (best effort; a failed
    /// restore is logged and does not change the run's status).
    ///
    /// An empty `targets` list is rejected with `InvalidSelection` before
    /// any state is touched.
    pub fn run(&mut self, targets: Vec<TargetId>) -> Result<OrchestrationRun, OrchestratorError> {
        if targets.is_empty() {
            return Err(OrchestratorError::InvalidSelection);
        }
        for target in &targets {
            if !self.host.supports(target.group(), *target) {
                return Err(OrchestratorError::UnsupportedTarget { target: *target });
            }
        }

        // The restore point. Captured before any build can switch it.
        let original_target = self.host.active_target();

        tracing::info!("Building {} targets", targets.len());
        self.sink.event(&ProgressEvent::StartAll {
            total: targets.len(),
        });

        let mut outcomes = Vec::with_capacity(targets.len());
        let mut failed_target = None;
        let mut status = RunStatus::Succeeded;

        for (index, target) in targets.iter().copied().enumerate() {
            if self.cancel.is_cancelled() {
                tracing::info!("Run cancelled before target {target}");
                status = RunStatus::Cancelled;
                break;
            }

            self.sink.event(&ProgressEvent::StartTarget { index, target });

            let request = BuildRequest::for_target(target, &self.settings, &*self.host);
            tracing::debug!(
                "Building {target} -> {} (append: {})",
                request.output_path.display(),
                request.allow_append
            );

            let outcome = match self.backend.build(&request) {
                Ok(outcome) => outcome,
                Err(e) => {
                    self.restore_active_target(original_target);
                    return Err(e.into());
                }
            };

            if outcome.succeeded {
                self.sink.event(&ProgressEvent::TargetSucceeded {
                    index,
                    elapsed_seconds: outcome.elapsed.as_secs_f64(),
                });
                tracing::info!(
                    "Build for {target} completed in {:.1}s",
                    outcome.elapsed.as_secs_f64()
                );
                outcomes.push(outcome);
            } else {
                tracing::error!("Build for {target} failed");
                self.sink.event(&ProgressEvent::TargetFailed {
                    index,
                    target,
                    message: outcome.message.clone(),
                });
                self.sink.event(&ProgressEvent::AllFailed);
                outcomes.push(outcome);
                failed_target = Some(target);
                status = RunStatus::Failed;
                break;
            }
        }

        if status == RunStatus::Succeeded {
            self.sink.event(&ProgressEvent::AllSucceeded);
        }

        self.restore_active_target(original_target);

        Ok(OrchestrationRun {
            targets,
            original_target,
            outcomes,
            failed_target,
            status,
        })
    }

    /// Switch the host back to the pre-run active target if a build moved
    /// it. Best effort: failure is logged, never escalated, and does not
    /// override the run's own terminal status.
    fn restore_active_target(&mut self, original: TargetId) {
        if self.host.active_target() == original {
            return;
        }
        if let Err(e) = self.host.switch_active(original.group(), original) {
            tracing::warn!("Failed to restore active build target to {original}: {e}");
        }
    }
}
