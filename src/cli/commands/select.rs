//! Select/deselect command implementation
//!
//! Implements `multibuild select` and `multibuild deselect` to flip the
//! persisted selection flags that a bare `multibuild build` acts on.

use anyhow::{Context, Result};
use std::path::Path;

use crate::cli::output::status;
use crate::core::catalog::TargetCatalog;
use crate::core::manifest::Manifest;
use crate::core::target::TargetId;
use crate::infra::{engine, state::SessionState};

use super::build::default_active_target;

/// Execute select (`selected = true`) or deselect (`selected = false`)
pub async fn execute(project_dir: &Path, targets: &[TargetId], selected: bool) -> Result<()> {
    let manifest = Manifest::load(project_dir).context("Failed to load project manifest")?;
    let mut session = SessionState::load_or_new(project_dir, default_active_target(&manifest))
        .context("Failed to load session state")?;

    let (host, _) = engine::connect(&manifest, session.active_target);
    let available = TargetCatalog::refresh(&host);
    session.selection.reconcile(&available);

    for target in targets {
        session
            .selection
            .toggle(*target, selected)
            .with_context(|| format!("Cannot toggle '{target}'"))?;
    }

    session
        .save(project_dir)
        .context("Failed to save session state")?;

    let verb = if selected { "Selected" } else { "Deselected" };
    let names: Vec<String> = targets.iter().map(ToString::to_string).collect();
    println!(
        "{} {verb} {} ({} now selected)",
        status::SUCCESS,
        names.join(", "),
        session.selection.selected_count()
    );
    Ok(())
}
