//! Health checks over stored rank keys.
//!
//! Nothing in the engine prevents two siblings from ending up with the same
//! key (concurrent editors resolving against the same snapshot will do it),
//! and keys grow every time the same gap is split. The audit reports both so
//! a caller can schedule a rebalance before a move fails.

use serde::Serialize;
use tracing::warn;

use crate::config::Config;
use crate::item::Orderable;
use crate::reorder::SiblingSnapshot;

/// Findings for one container.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContainerReport {
    pub container: String,
    pub items: usize,
    /// Adjacent siblings sharing a key.
    pub ties: usize,
    pub longest_key: usize,
    pub needs_rebalance: bool,
}

/// Findings for every container in the audited set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AuditReport {
    pub containers: Vec<ContainerReport>,
}

impl AuditReport {
    /// True if no container needs a rebalance.
    pub fn is_healthy(&self) -> bool {
        self.containers.iter().all(|c| !c.needs_rebalance)
    }

    pub fn total_ties(&self) -> usize {
        self.containers.iter().map(|c| c.ties).sum()
    }

    /// The report for `container`, if it has any items.
    pub fn container(&self, container: &str) -> Option<&ContainerReport> {
        self.containers.iter().find(|c| c.container == container)
    }
}

/// Audits `items`, grouped by container.
pub fn check<T: Orderable>(items: impl IntoIterator<Item = T>, config: &Config) -> AuditReport {
    let snapshot = SiblingSnapshot::capture(items);
    let containers = snapshot
        .containers()
        .map(|container| {
            let siblings = snapshot.siblings(container);
            let ties = siblings
                .windows(2)
                .filter(|pair| pair[0].pos() == pair[1].pos())
                .count();
            let longest_key = siblings
                .iter()
                .map(|item| item.pos().len())
                .max()
                .unwrap_or(0);
            let needs_rebalance = ties > 0 || longest_key > config.max_key_len;
            if needs_rebalance {
                warn!(container, ties, longest_key, "Container due for rebalance");
            }
            ContainerReport {
                container: container.to_string(),
                items: siblings.len(),
                ties,
                longest_key,
                needs_rebalance,
            }
        })
        .collect();

    AuditReport { containers }
}
