use crate::shared::error::ProjectModelError;
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Maximum snapshot/config file size (100 MB)
pub const MAX_FILE_SIZE: u64 = 100 * 1024 * 1024;

/// Validates that `path` is a regular file that is safe to read.
///
/// Uses `symlink_metadata()` so the link itself is inspected, not its target.
///
/// # Errors
/// Returns an error if:
/// - The metadata cannot be read
/// - The path is a symbolic link
/// - The path is not a regular file
/// - The file is larger than `max_size`
pub fn validate_readable_file(path: &Path, file_description: &str, max_size: u64) -> Result<()> {
    let metadata = fs::symlink_metadata(path).map_err(|e| ProjectModelError::FileReadError {
        path: path.to_path_buf(),
        details: format!("Failed to read {} metadata: {}", file_description, e),
    })?;

    if metadata.is_symlink() {
        return Err(ProjectModelError::SecurityError {
            path: path.to_path_buf(),
            reason: format!("{} is a symbolic link", file_description),
            hint: "Pass the path of the regular file the link points to".to_string(),
        }
        .into());
    }

    if !metadata.is_file() {
        anyhow::bail!("{} is not a regular file", path.display());
    }

    validate_file_size(metadata.len(), path, max_size)
}

/// Validates file size is within acceptable limits
///
/// # Errors
/// Returns an error if the file size exceeds the maximum
pub fn validate_file_size(file_size: u64, path: &Path, max_size: u64) -> Result<()> {
    if file_size > max_size {
        return Err(ProjectModelError::SecurityError {
            path: path.to_path_buf(),
            reason: format!(
                "File is too large ({} bytes). Maximum allowed size is {} bytes.",
                file_size, max_size
            ),
            hint: "Split the resolution snapshot or check that the right file was passed"
                .to_string(),
        }
        .into());
    }
    Ok(())
}

/// Reads a file as UTF-8 after running [`validate_readable_file`].
pub fn read_regular_file(path: &Path, file_description: &str) -> Result<String> {
    validate_readable_file(path, file_description, MAX_FILE_SIZE)?;

    fs::read_to_string(path).map_err(|e| {
        ProjectModelError::FileReadError {
            path: path.to_path_buf(),
            details: e.to_string(),
        }
        .into()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_validate_readable_file_regular_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("snapshot.json");
        fs::write(&file_path, "{}").unwrap();

        assert!(validate_readable_file(&file_path, "snapshot", MAX_FILE_SIZE).is_ok());
    }

    #[test]
    fn test_validate_readable_file_nonexistent() {
        let path = PathBuf::from("/nonexistent/snapshot.json");
        let result = validate_readable_file(&path, "snapshot", MAX_FILE_SIZE);
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Failed to read file"));
    }

    #[test]
    fn test_validate_readable_file_is_directory() {
        let temp_dir = TempDir::new().unwrap();
        let result = validate_readable_file(temp_dir.path(), "snapshot", MAX_FILE_SIZE);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("not a regular file"));
    }

    #[cfg(unix)]
    #[test]
    fn test_validate_readable_file_rejects_symlink() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("target.json");
        let link = temp_dir.path().join("link.json");
        fs::write(&target, "{}").unwrap();
        std::os::unix::fs::symlink(&target, &link).unwrap();

        let result = validate_readable_file(&link, "snapshot", MAX_FILE_SIZE);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("symbolic link"));
    }

    #[test]
    fn test_validate_file_size_exceeds_limit() {
        let path = PathBuf::from("/test/snapshot.json");
        let result = validate_file_size(MAX_FILE_SIZE + 1, &path, MAX_FILE_SIZE);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("too large"));
    }

    #[test]
    fn test_read_regular_file_returns_content() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("snapshot.json");
        fs::write(&file_path, "{\"libraries\": []}").unwrap();

        let content = read_regular_file(&file_path, "snapshot").unwrap();
        assert_eq!(content, "{\"libraries\": []}");
    }
}
