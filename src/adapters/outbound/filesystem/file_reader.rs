use super::snapshot_document::SnapshotDocument;
use crate::ports::outbound::ResolutionSnapshotReader;
use crate::project_model::domain::ResolutionSnapshot;
use crate::shared::error::ProjectModelError;
use crate::shared::security::read_regular_file;
use crate::shared::Result;
use std::path::Path;

/// FileSystemReader adapter for reading resolution snapshots from disk
///
/// Files go through the shared safety checks (no symlinks, regular
/// files only, size cap) before being parsed.
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl ResolutionSnapshotReader for FileSystemReader {
    fn read_snapshot(&self, snapshot_path: &Path) -> Result<ResolutionSnapshot> {
        if !snapshot_path.exists() {
            return Err(ProjectModelError::SnapshotNotFound {
                path: snapshot_path.to_path_buf(),
                suggestion: "Export the resolved dependency graph as JSON and pass its path with --snapshot".to_string(),
            }
            .into());
        }

        let content = read_regular_file(snapshot_path, "resolution snapshot")?;

        let document =
            SnapshotDocument::parse(&content).map_err(|e| ProjectModelError::SnapshotParseError {
                path: snapshot_path.to_path_buf(),
                details: e.to_string(),
            })?;

        document.into_snapshot().map_err(|e| {
            ProjectModelError::InvalidSnapshot {
                path: snapshot_path.to_path_buf(),
                reason: format!("{:#}", e),
            }
            .into()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_read_snapshot_success() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("snapshot.json");
        fs::write(
            &path,
            r#"{ "libraries": [ { "name": "App", "version": "1.0.0", "type": "Project", "resolved": true } ] }"#,
        )
        .unwrap();

        let snapshot = FileSystemReader::new().read_snapshot(&path).unwrap();
        assert_eq!(snapshot.library_count(), 1);
    }

    #[test]
    fn test_read_snapshot_not_found() {
        let path = PathBuf::from("/nonexistent/snapshot.json");
        let error = FileSystemReader::new().read_snapshot(&path).unwrap_err();

        let message = error.to_string();
        assert!(message.contains("Resolution snapshot not found"));
        assert!(message.contains("--snapshot"));
    }

    #[test]
    fn test_read_snapshot_malformed_json() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("snapshot.json");
        fs::write(&path, "{ broken").unwrap();

        let error = FileSystemReader::new().read_snapshot(&path).unwrap_err();
        assert!(error
            .to_string()
            .contains("Failed to parse resolution snapshot"));
    }

    #[test]
    fn test_read_snapshot_invalid_content() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("snapshot.json");
        fs::write(&path, r#"{ "libraries": [ { "name": "A", "type": "Gem" } ] }"#).unwrap();

        let error = FileSystemReader::new().read_snapshot(&path).unwrap_err();
        let message = error.to_string();
        assert!(message.contains("Invalid resolution snapshot"));
        assert!(message.contains("Unknown library type"));
    }

    #[test]
    fn test_read_snapshot_directory_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let result = FileSystemReader::new().read_snapshot(temp_dir.path());
        assert!(result.is_err());
    }
}
