//! Session state persistence
//!
//! The selection map and the host's active-target register survive across
//! CLI invocations in `.multibuild/state.json` inside the project directory.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::defaults;
use crate::core::selection::SelectionStore;
use crate::core::target::TargetId;
use crate::error::StateError;

/// Per-project session state
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SessionState {
    /// Target selection map
    #[serde(default)]
    pub selection: SelectionStore,

    /// The host's active build target register
    pub active_target: TargetId,
}

impl SessionState {
    /// Fresh state with an empty selection
    pub fn new(active_target: TargetId) -> Self {
        Self {
            selection: SelectionStore::new(),
            active_target,
        }
    }

    fn path(project_dir: &Path) -> PathBuf {
        project_dir.join(defaults::STATE_DIR).join(defaults::STATE_FILE)
    }

    /// Load the session state, or start fresh if none exists yet
    pub fn load_or_new(project_dir: &Path, default_active: TargetId) -> Result<Self, StateError> {
        let path = Self::path(project_dir);
        if !path.exists() {
            return Ok(Self::new(default_active));
        }
        let content = fs::read_to_string(&path).map_err(|e| StateError::Io {
            path: path.clone(),
            error: e.to_string(),
        })?;
        serde_json::from_str(&content).map_err(|e| StateError::Parse {
            path,
            error: e.to_string(),
        })
    }

    /// Persist the session state to the project directory
    pub fn save(&self, project_dir: &Path) -> Result<(), StateError> {
        let path = Self::path(project_dir);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| StateError::Io {
                path: parent.to_path_buf(),
                error: e.to_string(),
            })?;
        }
        let content = serde_json::to_string_pretty(self).map_err(|e| StateError::Parse {
            path: path.clone(),
            error: e.to_string(),
        })?;
        fs::write(&path, content).map_err(|e| StateError::Io {
            path,
            error: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_missing_returns_default() {
        let dir = TempDir::new().unwrap();
        let state = SessionState::load_or_new(dir.path(), TargetId::Linux64).unwrap();
        assert_eq!(state.active_target, TargetId::Linux64);
        assert_eq!(state.selection.selected_count(), 0);
    }

    #[test]
    fn test_save_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let mut state = SessionState::new(TargetId::Windows64);
        state.selection.reconcile(&[TargetId::Windows64, TargetId::Android]);
        state.selection.toggle(TargetId::Android, true).unwrap();
        state.save(dir.path()).unwrap();

        let loaded = SessionState::load_or_new(dir.path(), TargetId::Linux64).unwrap();
        assert_eq!(loaded, state);
    }

    #[test]
    fn test_corrupt_state_is_an_error() {
        let dir = TempDir::new().unwrap();
        let state_dir = dir.path().join(".multibuild");
        std::fs::create_dir_all(&state_dir).unwrap();
        std::fs::write(state_dir.join("state.json"), "not json").unwrap();

        let err = SessionState::load_or_new(dir.path(), TargetId::Linux64).unwrap_err();
        assert!(matches!(err, StateError::Parse { .. }));
    }
}
