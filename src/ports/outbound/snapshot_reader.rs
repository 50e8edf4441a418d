use crate::project_model::domain::ResolutionSnapshot;
use crate::shared::Result;
use std::path::Path;

/// ResolutionSnapshotReader port for loading resolved dependency graphs
///
/// Abstracts where resolution snapshots come from (files, a resolver
/// process, test fixtures) from the projection logic.
pub trait ResolutionSnapshotReader {
    /// Reads and validates the snapshot at `snapshot_path`
    ///
    /// # Errors
    /// Returns an error if:
    /// - The snapshot does not exist or cannot be read
    /// - The content is not a valid snapshot document
    /// - A library name, version or type fails validation
    fn read_snapshot(&self, snapshot_path: &Path) -> Result<ResolutionSnapshot>;
}
