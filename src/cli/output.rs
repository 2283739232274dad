//! Output formatting and progress indicators
//!
//! This module renders the orchestrator's progress events for humans
//! (status glyphs plus an indicatif bar) or for scripts (JSON lines).

use indicatif::{ProgressBar, ProgressStyle};
use std::cell::RefCell;

use crate::core::orchestrator::{ProgressEvent, ProgressSink};

/// Status message prefixes
pub mod status {
    /// Success prefix (green checkmark)
    pub const SUCCESS: &str = "✓";

    /// Error prefix (red X)
    pub const ERROR: &str = "✗";
}

/// Create a progress bar spanning the targets of one run
pub fn create_build_bar(total: u64) -> ProgressBar {
    let pb = ProgressBar::new(total);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} targets ({msg})")
            .expect("Invalid progress bar template")
            .progress_chars("█▓▒░"),
    );
    pb
}

/// Human-readable event renderer
///
/// One bar per run; per-target lines are printed above it so they survive
/// the bar's redraws.
#[derive(Default)]
pub struct ConsoleSink {
    bar: RefCell<Option<ProgressBar>>,
}

impl ConsoleSink {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProgressSink for ConsoleSink {
    fn event(&self, event: &ProgressEvent) {
        let mut bar = self.bar.borrow_mut();
        match event {
            ProgressEvent::StartAll { total } => {
                let noun = if *total == 1 { "platform" } else { "platforms" };
                println!("Building {total} {noun}");
                *bar = Some(create_build_bar(*total as u64));
            }
            ProgressEvent::StartTarget { target, .. } => {
                if let Some(pb) = bar.as_ref() {
                    pb.set_message(target.to_string());
                }
            }
            ProgressEvent::TargetSucceeded { elapsed_seconds, .. } => {
                if let Some(pb) = bar.as_ref() {
                    pb.println(format!(
                        "{} {} ({elapsed_seconds:.1}s)",
                        status::SUCCESS,
                        pb.message()
                    ));
                    pb.inc(1);
                }
            }
            ProgressEvent::TargetFailed { target, message, .. } => {
                if let Some(pb) = bar.as_ref() {
                    match message {
                        Some(msg) => pb.println(format!("{} {target}: {msg}", status::ERROR)),
                        None => pb.println(format!("{} {target}", status::ERROR)),
                    }
                }
            }
            ProgressEvent::AllSucceeded => {
                if let Some(pb) = bar.take() {
                    pb.finish_with_message("all platforms built");
                }
            }
            ProgressEvent::AllFailed => {
                if let Some(pb) = bar.take() {
                    pb.abandon_with_message("build failed");
                }
            }
        }
    }
}

/// Machine-readable renderer: one JSON object per event on stdout
#[derive(Debug, Default)]
pub struct JsonSink;

impl ProgressSink for JsonSink {
    fn event(&self, event: &ProgressEvent) {
        match serde_json::to_string(event) {
            Ok(line) => println!("{line}"),
            Err(e) => tracing::warn!("Failed to serialize progress event: {e}"),
        }
    }
}

/// Print a top-level error the way every command reports failure
pub fn display_error(error: &anyhow::Error) {
    eprintln!("{} {error:#}", status::ERROR);
}
