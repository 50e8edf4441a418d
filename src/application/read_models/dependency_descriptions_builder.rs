//! Builder for projecting a whole resolution snapshot
//!
//! Runs the registry pre-pass, then projects every library in snapshot order.

use super::dependency_description::DependencyDescription;
use crate::project_model::domain::ResolutionSnapshot;
use crate::project_model::services::DependencyItemRegistry;
use crate::shared::error::ProjectionError;

/// Builder for constructing dependency descriptions from a resolution snapshot
pub struct DependencyDescriptionsBuilder;

impl DependencyDescriptionsBuilder {
    /// Builds one description per library of the snapshot
    ///
    /// # Errors
    /// Fails on the first library whose dependency edge names a library
    /// that is not part of the snapshot.
    pub fn build(
        snapshot: &ResolutionSnapshot,
    ) -> Result<Vec<DependencyDescription>, ProjectionError> {
        let registry = DependencyItemRegistry::from_libraries(snapshot.libraries());
        Self::build_with_registry(snapshot, &registry)
    }

    /// Same as [`build`](Self::build) with a caller-owned registry
    pub fn build_with_registry(
        snapshot: &ResolutionSnapshot,
        registry: &DependencyItemRegistry,
    ) -> Result<Vec<DependencyDescription>, ProjectionError> {
        snapshot
            .libraries()
            .iter()
            .map(|library| DependencyDescription::create(library, snapshot.diagnostics(), registry))
            .collect()
    }
}
