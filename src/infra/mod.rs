//! Infrastructure layer
//!
//! Handles all I/O operations: spawning the engine command and persisting
//! session state. This module is the only place where side effects occur.

pub mod engine;
pub mod state;
