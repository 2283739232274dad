//! Process-backed host and build backend
//!
//! Drives a real engine CLI: the configured command is spawned once per
//! target with placeholder-substituted arguments and the request exposed
//! through environment variables. The host side keeps the capability list
//! from the manifest and the active-target register shared with the backend,
//! since a build switches the engine to the target it just built.

use std::cell::Cell;
use std::path::Path;
use std::process::Command;
use std::rc::Rc;
use std::time::Instant;

use crate::config::defaults;
use crate::core::backend::{BuildBackend, BuildOutcome, Host};
use crate::core::manifest::Manifest;
use crate::core::request::BuildRequest;
use crate::core::target::{TargetGroup, TargetId};
use crate::error::HostError;

/// Host implementation backed by the manifest and the session state
pub struct ProcessHost {
    supported: Vec<TargetId>,
    active: Rc<Cell<TargetId>>,
}

/// Backend implementation that spawns the configured engine command
pub struct ProcessBackend {
    command: String,
    args: Vec<String>,
    active: Rc<Cell<TargetId>>,
}

/// Wire up a host/backend pair sharing one active-target register.
///
/// The shared register models the engine's process-wide active build target:
/// the backend moves it to whatever it last built, the orchestrator moves it
/// back when the run ends.
pub fn connect(manifest: &Manifest, active_target: TargetId) -> (ProcessHost, ProcessBackend) {
    let active = Rc::new(Cell::new(active_target));
    let host = ProcessHost {
        supported: manifest.host.targets.clone(),
        active: Rc::clone(&active),
    };
    let backend = ProcessBackend {
        command: manifest.engine.command.clone(),
        args: manifest.engine.args.clone(),
        active,
    };
    (host, backend)
}

impl Host for ProcessHost {
    fn supports(&self, _group: TargetGroup, target: TargetId) -> bool {
        self.supported.contains(&target)
    }

    fn active_target(&self) -> TargetId {
        self.active.get()
    }

    fn switch_active(&mut self, _group: TargetGroup, target: TargetId) -> Result<(), HostError> {
        tracing::debug!("Switching active build target to {target}");
        self.active.set(target);
        Ok(())
    }

    fn can_append(&self, target: TargetId, path: &Path) -> bool {
        // Only mobile project outputs support incremental appending, and
        // only when a previous build is actually there.
        matches!(target.group(), TargetGroup::Android | TargetGroup::Ios) && path.exists()
    }
}

impl ProcessBackend {
    fn substitute(&self, request: &BuildRequest) -> Vec<String> {
        self.args
            .iter()
            .map(|arg| {
                arg.replace("{target}", request.target.as_str())
                    .replace("{group}", &request.group.to_string())
                    .replace("{product}", &request.product_name)
                    .replace("{output}", &request.output_path.to_string_lossy())
                    .replace("{scenes}", &request.scenes.join(","))
            })
            .collect()
    }
}

impl BuildBackend for ProcessBackend {
    fn build(&mut self, request: &BuildRequest) -> Result<BuildOutcome, HostError> {
        if let Some(parent) = request.output_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| HostError::SpawnFailed {
                command: self.command.clone(),
                error: format!("cannot create output directory: {e}"),
            })?;
        }

        let started = Instant::now();
        let output = Command::new(&self.command)
            .args(self.substitute(request))
            .env("MULTIBUILD_TARGET", request.target.as_str())
            .env("MULTIBUILD_GROUP", request.group.to_string())
            .env("MULTIBUILD_PRODUCT", &request.product_name)
            .env("MULTIBUILD_OUTPUT", &request.output_path)
            .env("MULTIBUILD_SCENES", request.scenes.join(","))
            .env(
                "MULTIBUILD_ALLOW_APPEND",
                if request.allow_append { "1" } else { "0" },
            )
            .output()
            .map_err(|e| HostError::SpawnFailed {
                command: self.command.clone(),
                error: e.to_string(),
            })?;
        let elapsed = started.elapsed();

        // Building a target leaves the engine configured for it.
        self.active.set(request.target);

        if output.status.success() {
            Ok(BuildOutcome::success(elapsed))
        } else {
            let tail = stderr_tail(&output.stderr);
            if tail.is_empty() {
                Ok(BuildOutcome {
                    succeeded: false,
                    elapsed,
                    message: None,
                })
            } else {
                Ok(BuildOutcome::failure(elapsed, tail))
            }
        }
    }
}

/// Last few stderr lines, enough to say why the engine refused the build
fn stderr_tail(stderr: &[u8]) -> String {
    let text = String::from_utf8_lossy(stderr);
    let lines: Vec<&str> = text.lines().collect();
    let start = lines.len().saturating_sub(defaults::STDERR_TAIL_LINES);
    lines[start..].join("\n")
}
