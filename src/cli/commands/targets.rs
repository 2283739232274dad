//! Targets command implementation
//!
//! Implements `multibuild targets` to list the targets buildable on this
//! host along with their platform family and selection state.

use anyhow::{Context, Result};
use std::path::Path;

use crate::cli::output::status;
use crate::core::catalog::TargetCatalog;
use crate::core::manifest::Manifest;
use crate::infra::{engine, state::SessionState};

use super::build::default_active_target;

/// Execute the targets command
pub async fn execute(project_dir: &Path, json: bool) -> Result<()> {
    let manifest = Manifest::load(project_dir).context("Failed to load project manifest")?;
    let mut session = SessionState::load_or_new(project_dir, default_active_target(&manifest))
        .context("Failed to load session state")?;

    let (host, _) = engine::connect(&manifest, session.active_target);
    let available = TargetCatalog::refresh(&host);
    session.selection.reconcile(&available);

    if json {
        let entries: Vec<_> = available
            .iter()
            .map(|t| {
                serde_json::json!({
                    "target": t,
                    "group": t.group().to_string(),
                    "selected": session.selection.is_selected(*t),
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&entries)?);
    } else {
        println!("Platforms buildable on this host:");
        for target in &available {
            let mark = if session.selection.is_selected(*target) {
                status::SUCCESS
            } else {
                " "
            };
            println!("  [{mark}] {target:<14} ({})", target.group());
        }
        println!(
            "\n{} selected. Use 'multibuild select <TARGET>' to change.",
            session.selection.selected_count()
        );
    }

    session
        .save(project_dir)
        .context("Failed to save session state")?;
    Ok(())
}
