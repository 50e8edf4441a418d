use std::path::PathBuf;

/// ProjectionRequest - Internal request DTO for the projection use case
#[derive(Debug, Clone)]
pub struct ProjectionRequest {
    /// Resolution snapshot to project
    pub snapshot_path: PathBuf,
    /// Earlier snapshot of the same project to diff against
    pub previous_snapshot_path: Option<PathBuf>,
    /// Keep only added or changed descriptions in the response
    pub only_changed: bool,
}

impl ProjectionRequest {
    pub fn new(
        snapshot_path: PathBuf,
        previous_snapshot_path: Option<PathBuf>,
        only_changed: bool,
    ) -> Self {
        Self {
            snapshot_path,
            previous_snapshot_path,
            only_changed,
        }
    }
}
