//! Target catalog
//!
//! Answers "which targets can this machine build right now". A pure query
//! against the host's capability report; callers reconcile the selection
//! store against the result themselves.

use super::backend::Host;
use super::target::TargetId;

/// Enumerates the targets currently buildable on the host
#[derive(Debug, Default)]
pub struct TargetCatalog;

impl TargetCatalog {
    /// Query the host for every known target and keep the supported ones,
    /// in canonical enumeration order. That order is what makes multi-target
    /// build order reproducible across runs.
    pub fn refresh(host: &dyn Host) -> Vec<TargetId> {
        TargetId::ALL
            .into_iter()
            .filter(|t| host.supports(t.group(), *t))
            .collect()
    }
}
