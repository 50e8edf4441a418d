//! Change detection between two projections of the same project
//!
//! Descriptions are matched by name and compared with their structural
//! equality; they are never put in a hash container.

use super::dependency_description::DependencyDescription;
use serde::Serialize;
use std::collections::HashMap;

/// Names of descriptions that differ between two snapshots
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DependencyChanges {
    /// Present now, absent before (current order)
    pub added: Vec<String>,
    /// Present before, absent now (previous order)
    pub removed: Vec<String>,
    /// Present in both but not structurally equal (current order)
    pub changed: Vec<String>,
    /// Present in both and structurally equal
    pub unchanged: usize,
}

impl DependencyChanges {
    pub fn has_changes(&self) -> bool {
        !self.added.is_empty() || !self.removed.is_empty() || !self.changed.is_empty()
    }

    /// Whether `name` must be sent to clients again
    pub fn requires_notification(&self, name: &str) -> bool {
        self.added.iter().chain(self.changed.iter()).any(|n| n == name)
    }
}

/// Compares two description lists keyed by library name
pub struct ChangeDetector;

impl ChangeDetector {
    pub fn detect(
        previous: &[DependencyDescription],
        current: &[DependencyDescription],
    ) -> DependencyChanges {
        let previous_by_name: HashMap<&str, &DependencyDescription> =
            previous.iter().map(|d| (d.name(), d)).collect();
        let current_by_name: HashMap<&str, &DependencyDescription> =
            current.iter().map(|d| (d.name(), d)).collect();

        let mut changes = DependencyChanges::default();

        for description in current {
            match previous_by_name.get(description.name()) {
                None => changes.added.push(description.name().to_string()),
                Some(before) if *before != description => {
                    changes.changed.push(description.name().to_string())
                }
                Some(_) => changes.unchanged += 1,
            }
        }

        changes.removed = previous
            .iter()
            .filter(|d| !current_by_name.contains_key(d.name()))
            .map(|d| d.name().to_string())
            .collect();

        changes
    }
}
