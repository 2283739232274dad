//! Error types for multibuild
//!
//! Domain-specific error types using thiserror.

use std::path::PathBuf;
use thiserror::Error;

use crate::core::target::TargetId;

/// Selection store errors
#[derive(Error, Debug)]
pub enum SelectionError {
    /// Target is not a key in the reconciled selection map
    #[error("Target '{target}' is not in the current catalog")]
    InvalidTarget { target: TargetId },
}

/// Host engine interaction errors
#[derive(Error, Debug)]
pub enum HostError {
    /// Engine command could not be spawned
    #[error("Failed to launch engine command '{command}': {error}")]
    SpawnFailed { command: String, error: String },

    /// Switching the active build target failed
    #[error("Failed to switch active build target to '{target}': {error}")]
    SwitchFailed { target: TargetId, error: String },
}

/// Orchestration errors
#[derive(Error, Debug)]
pub enum OrchestratorError {
    /// Zero targets requested; nothing to do, no state change
    #[error("No build targets selected")]
    InvalidSelection,

    /// A requested target is not buildable on this host
    #[error("Target '{target}' is not supported on this host")]
    UnsupportedTarget { target: TargetId },

    /// The backend itself was unusable (a failed build is not an error here;
    /// it surfaces as a `Failed` run status)
    #[error("Build backend error: {0}")]
    Backend(#[from] HostError),
}

/// Terminal error of a build run, surfaced to the caller for exit-status
/// mapping
#[derive(Error, Debug)]
pub enum RunError {
    /// The first failing target halted the run
    #[error("Build failed for target '{target}'{}", message.as_deref().map(|m| format!(": {m}")).unwrap_or_default())]
    BuildFailed {
        target: TargetId,
        message: Option<String>,
    },

    /// The run was cancelled between targets
    #[error("Build run cancelled")]
    Cancelled,
}

/// Manifest (multibuild.toml) errors
#[derive(Error, Debug)]
pub enum ManifestError {
    /// Manifest not found
    #[error("No multibuild.toml found at '{path}'. Create one to describe the product.")]
    NotFound { path: PathBuf },

    /// Manifest parse error
    #[error("Failed to parse multibuild.toml: {source}")]
    Parse {
        #[from]
        source: toml::de::Error,
    },

    /// IO error reading the manifest
    #[error("IO error for '{path}': {error}")]
    Io { path: PathBuf, error: String },
}

/// Session state file errors
#[derive(Error, Debug)]
pub enum StateError {
    /// State file could not be read or written
    #[error("IO error for '{path}': {error}")]
    Io { path: PathBuf, error: String },

    /// State file is not valid JSON
    #[error("Failed to parse session state '{path}': {error}")]
    Parse { path: PathBuf, error: String },
}
