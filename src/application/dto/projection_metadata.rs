use chrono::Utc;
use serde::Serialize;

/// Tool name reported in output metadata
pub const TOOL_NAME: &str = env!("CARGO_PKG_NAME");

/// Tool version reported in output metadata
pub const TOOL_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Metadata describing one projection run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionMetadata {
    timestamp: String,
    tool_name: String,
    tool_version: String,
    library_count: usize,
}

impl ProjectionMetadata {
    pub fn new(
        timestamp: String,
        tool_name: String,
        tool_version: String,
        library_count: usize,
    ) -> Self {
        Self {
            timestamp,
            tool_name,
            tool_version,
            library_count,
        }
    }

    /// Metadata stamped with the current UTC time (RFC 3339)
    pub fn generate(library_count: usize) -> Self {
        Self::new(
            Utc::now().to_rfc3339(),
            TOOL_NAME.to_string(),
            TOOL_VERSION.to_string(),
            library_count,
        )
    }

    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    pub fn tool_name(&self) -> &str {
        &self.tool_name
    }

    pub fn tool_version(&self) -> &str {
        &self.tool_version
    }

    pub fn library_count(&self) -> usize {
        self.library_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_metadata() {
        let metadata = ProjectionMetadata::generate(3);

        assert_eq!(metadata.tool_name(), "project-model-view");
        assert_eq!(metadata.tool_version(), env!("CARGO_PKG_VERSION"));
        assert_eq!(metadata.library_count(), 3);
        assert!(chrono::DateTime::parse_from_rfc3339(metadata.timestamp()).is_ok());
    }

    #[test]
    fn test_metadata_serializes_camel_case() {
        let metadata = ProjectionMetadata::new(
            "2024-01-01T00:00:00Z".to_string(),
            "project-model-view".to_string(),
            "0.4.0".to_string(),
            2,
        );
        let json = serde_json::to_value(&metadata).unwrap();

        assert_eq!(json["timestamp"], "2024-01-01T00:00:00Z");
        assert_eq!(json["toolName"], "project-model-view");
        assert_eq!(json["toolVersion"], "0.4.0");
        assert_eq!(json["libraryCount"], 2);
    }
}
