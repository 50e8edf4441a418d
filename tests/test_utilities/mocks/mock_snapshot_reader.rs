use project_model_view::prelude::*;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Mock ResolutionSnapshotReader serving snapshots by path
#[derive(Default)]
pub struct MockSnapshotReader {
    pub snapshots: HashMap<PathBuf, ResolutionSnapshot>,
    pub should_fail: bool,
}

impl MockSnapshotReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_snapshot(mut self, path: &str, snapshot: ResolutionSnapshot) -> Self {
        self.snapshots.insert(PathBuf::from(path), snapshot);
        self
    }

    pub fn with_failure() -> Self {
        Self {
            snapshots: HashMap::new(),
            should_fail: true,
        }
    }
}

impl ResolutionSnapshotReader for MockSnapshotReader {
    fn read_snapshot(&self, snapshot_path: &Path) -> Result<ResolutionSnapshot> {
        if self.should_fail {
            anyhow::bail!("Mock snapshot read failure");
        }
        self.snapshots
            .get(snapshot_path)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("Mock snapshot not found: {}", snapshot_path.display()))
    }
}
