//! multibuild - sequential multi-platform player-build orchestrator
//!
//! This library drives a game engine's player-build pipeline once per
//! selected platform, strictly in order, with structured progress events,
//! fail-fast on the first failing target and restoration of the host's
//! original active build target afterward.
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//!
//! - [`cli`] - Command-line interface parsing and output formatting
//! - [`core`] - Orchestration logic and data model (no I/O operations)
//! - [`infra`] - Infrastructure layer (engine process, session state)
//! - [`config`] - Configuration and constants
//! - [`error`] - Error types and handling

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod infra;
