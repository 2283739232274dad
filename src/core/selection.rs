//! Target selection store
//!
//! Holds the target → selected mapping behind the `select`/`deselect`
//! commands. The map is reconciled against the catalog on every use so stale
//! entries for targets the host can no longer build are pruned. Persistence
//! lives in [`crate::infra::state`]; this type is pure data.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::target::TargetId;
use crate::error::SelectionError;

/// Mapping of target to "build this one" flag
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SelectionStore {
    targets: BTreeMap<TargetId, bool>,
}

impl SelectionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bring the map in line with the catalog's available set.
    ///
    /// Targets newly available are inserted unselected; targets that dropped
    /// out of the catalog are removed; surviving selections are untouched.
    /// Calling this twice with the same set is a no-op the second time.
    pub fn reconcile(&mut self, available: &[TargetId]) {
        for target in available {
            self.targets.entry(*target).or_insert(false);
        }
        self.targets.retain(|target, _| available.contains(target));
    }

    /// Set the selection flag for one target.
    ///
    /// Normal flow only toggles catalog-known targets; an unknown key means
    /// the caller skipped reconciliation and gets `InvalidTarget`.
    pub fn toggle(&mut self, target: TargetId, selected: bool) -> Result<(), SelectionError> {
        match self.targets.get_mut(&target) {
            Some(slot) => {
                *slot = selected;
                Ok(())
            }
            None => Err(SelectionError::InvalidTarget { target }),
        }
    }

    /// Whether a target is currently selected
    pub fn is_selected(&self, target: TargetId) -> bool {
        self.targets.get(&target).copied().unwrap_or(false)
    }

    /// Selected targets in canonical enumeration order, never insertion
    /// order, so multi-target build order is reproducible across runs.
    pub fn selected(&self) -> Vec<TargetId> {
        TargetId::ALL
            .into_iter()
            .filter(|t| self.is_selected(*t))
            .collect()
    }

    /// Number of selected targets
    pub fn selected_count(&self) -> usize {
        self.targets.values().filter(|v| **v).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reconcile_inserts_unselected() {
        let mut store = SelectionStore::new();
        store.reconcile(&[TargetId::Windows64, TargetId::Android]);
        assert!(!store.is_selected(TargetId::Windows64));
        assert!(!store.is_selected(TargetId::Android));
        assert_eq!(store.selected_count(), 0);
    }

    #[test]
    fn test_reconcile_is_idempotent() {
        let available = [TargetId::Windows64, TargetId::Android];
        let mut once = SelectionStore::new();
        once.reconcile(&available);
        once.toggle(TargetId::Android, true).unwrap();

        let mut twice = once.clone();
        twice.reconcile(&available);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_reconcile_preserves_selection_and_extends() {
        let mut store = SelectionStore::new();
        store.reconcile(&[TargetId::Windows64]);
        store.toggle(TargetId::Windows64, true).unwrap();

        store.reconcile(&[TargetId::Windows64, TargetId::Android]);
        assert!(store.is_selected(TargetId::Windows64));
        assert!(!store.is_selected(TargetId::Android));
    }

    #[test]
    fn test_reconcile_prunes_unavailable() {
        let mut store = SelectionStore::new();
        store.reconcile(&[TargetId::Windows64, TargetId::Android]);
        store.toggle(TargetId::Android, true).unwrap();

        store.reconcile(&[TargetId::Windows64]);
        assert!(!store.is_selected(TargetId::Android));
        assert!(store.toggle(TargetId::Android, true).is_err());
    }

    #[test]
    fn test_toggle_unknown_target_fails() {
        let mut store = SelectionStore::new();
        store.reconcile(&[TargetId::Windows64]);
        let err = store.toggle(TargetId::Ps5, true).unwrap_err();
        assert!(matches!(err, SelectionError::InvalidTarget { .. }));
    }

    #[test]
    fn test_selected_uses_enumeration_order() {
        let mut store = SelectionStore::new();
        store.reconcile(&[TargetId::Windows64, TargetId::Linux64, TargetId::Android]);
        // Select in reverse order; output must still be canonical order.
        store.toggle(TargetId::Android, true).unwrap();
        store.toggle(TargetId::Linux64, true).unwrap();
        store.toggle(TargetId::Windows64, true).unwrap();
        assert_eq!(
            store.selected(),
            vec![TargetId::Windows64, TargetId::Linux64, TargetId::Android]
        );
    }

    #[test]
    fn test_serde_round_trip() {
        let mut store = SelectionStore::new();
        store.reconcile(&[TargetId::Windows64, TargetId::Android]);
        store.toggle(TargetId::Android, true).unwrap();

        let json = serde_json::to_string(&store).unwrap();
        let restored: SelectionStore = serde_json::from_str(&json).unwrap();
        assert_eq!(store, restored);
    }
}
