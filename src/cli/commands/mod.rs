//! CLI command implementations
//!
//! Each command is implemented in its own submodule.

pub mod build;
pub mod select;
pub mod targets;

use anyhow::Result;
use clap::Subcommand;

use crate::core::target::TargetId;

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build the selected platforms, in order, stopping at the first failure
    Build {
        /// Targets to build in the given order (defaults to the stored
        /// selection when omitted)
        #[arg(value_parser = parse_target)]
        targets: Vec<TargetId>,
    },

    /// List the platforms buildable on this host
    Targets,

    /// Mark platforms for the next build
    Select {
        /// Target names to select
        #[arg(required = true, value_parser = parse_target)]
        targets: Vec<TargetId>,
    },

    /// Unmark platforms for the next build
    Deselect {
        /// Target names to deselect
        #[arg(required = true, value_parser = parse_target)]
        targets: Vec<TargetId>,
    },
}

fn parse_target(s: &str) -> Result<TargetId, String> {
    s.parse().map_err(|e| format!("{e}"))
}

impl Commands {
    /// Execute the command
    pub async fn run(self, quiet: bool, json: bool) -> Result<()> {
        let current_dir = std::env::current_dir()?;
        match self {
            Self::Build { targets } => {
                let options = build::BuildOptions {
                    targets,
                    quiet,
                    json,
                };
                build::execute(&current_dir, options).await
            }
            Self::Targets => targets::execute(&current_dir, json).await,
            Self::Select { targets } => select::execute(&current_dir, &targets, true).await,
            Self::Deselect { targets } => select::execute(&current_dir, &targets, false).await,
        }
    }
}
