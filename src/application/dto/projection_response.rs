use super::ProjectionMetadata;
use crate::application::read_models::{DependencyChanges, DependencyDescription};

/// ProjectionResponse - Internal response DTO from the projection use case
///
/// Formatters turn this into the wire representation.
#[derive(Debug, Clone)]
pub struct ProjectionResponse {
    /// Run metadata (timestamp, tool info, library count)
    pub metadata: ProjectionMetadata,
    /// Descriptions in snapshot order
    pub descriptions: Vec<DependencyDescription>,
    /// Present only when a previous snapshot was given
    pub changes: Option<DependencyChanges>,
}

impl ProjectionResponse {
    pub fn new(
        metadata: ProjectionMetadata,
        descriptions: Vec<DependencyDescription>,
        changes: Option<DependencyChanges>,
    ) -> Self {
        Self {
            metadata,
            descriptions,
            changes,
        }
    }

    /// True when a diff was computed and found something
    pub fn has_changes(&self) -> bool {
        self.changes
            .as_ref()
            .map(DependencyChanges::has_changes)
            .unwrap_or(false)
    }
}
