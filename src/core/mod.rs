//! Core business logic module
//!
//! This module contains the orchestration logic and its data model.
//! It performs no I/O of its own - engine and filesystem access go through
//! the traits in [`backend`], implemented in [`crate::infra`].
//!
//! # Submodules
//!
//! - [`target`] - Target identifiers, families and the extension policy
//! - [`catalog`] - Which targets the host can currently build
//! - [`selection`] - Persisted target selection map
//! - [`backend`] - Host and build-backend collaborator contracts
//! - [`request`] - Per-target build request construction
//! - [`orchestrator`] - The sequential build state machine
//! - [`manifest`] - Manifest (multibuild.toml) parsing and validation

pub mod backend;
pub mod catalog;
pub mod manifest;
pub mod orchestrator;
pub mod request;
pub mod selection;
pub mod target;
