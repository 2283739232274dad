//! Collaborator contracts for the host engine
//!
//! The orchestrator never talks to the engine directly; it goes through two
//! traits. [`Host`] covers the engine's ambient state: which targets the
//! installed toolchains can build, the process-wide active build target, and
//! whether an existing build output can be appended to. [`BuildBackend`] is
//! the opaque build pipeline itself, invoked once per target.
//!
//! Process-spawning implementations live in [`crate::infra::engine`].

use std::path::Path;
use std::time::Duration;

use super::request::BuildRequest;
use super::target::{TargetGroup, TargetId};
use crate::error::HostError;

/// Result of building one target
#[derive(Debug, Clone)]
pub struct BuildOutcome {
    /// Whether the backend reported success
    pub succeeded: bool,
    /// Wall-clock time the backend spent on this target
    pub elapsed: Duration,
    /// Diagnostic message from the backend, if any
    pub message: Option<String>,
}

impl BuildOutcome {
    /// Successful outcome with no diagnostics
    pub fn success(elapsed: Duration) -> Self {
        Self {
            succeeded: true,
            elapsed,
            message: None,
        }
    }

    /// Failed outcome carrying the backend's diagnostic message
    pub fn failure(elapsed: Duration, message: impl Into<String>) -> Self {
        Self {
            succeeded: false,
            elapsed,
            message: Some(message.into()),
        }
    }
}

/// Ambient host engine state
///
/// The active build target is the host's single shared mutable register.
/// Only one orchestration run may mutate it at a time; the orchestrator
/// restores it when a run finishes, whatever the outcome.
pub trait Host {
    /// Whether the host can currently build the given target
    fn supports(&self, group: TargetGroup, target: TargetId) -> bool;

    /// The platform the host is currently configured for
    fn active_target(&self) -> TargetId;

    /// Switch the host's active build target
    fn switch_active(&mut self, group: TargetGroup, target: TargetId) -> Result<(), HostError>;

    /// Whether an existing build output at `path` can be incrementally
    /// appended to, rather than replaced
    fn can_append(&self, target: TargetId, path: &Path) -> bool;
}

/// The engine's build pipeline
///
/// A call compiles, links and packages exactly one target. It is long-running,
/// blocking and non-preemptible; cancellation is only observed between calls.
pub trait BuildBackend {
    /// Build one target. `Err` means the backend itself was unusable
    /// (missing engine binary, spawn failure); an unsuccessful build is an
    /// `Ok` outcome with `succeeded == false`.
    fn build(&mut self, request: &BuildRequest) -> Result<BuildOutcome, HostError>;
}
