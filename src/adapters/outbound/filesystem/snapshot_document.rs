//! On-disk JSON shape of a resolution snapshot
//!
//! The document is deserialized as-is and then converted into domain types,
//! which is where names, versions, types and severities get validated.

use crate::project_model::domain::{
    DiagnosticMessage, DiagnosticSeverity, LibraryDependency, LibraryIdentity, LibraryName,
    LibraryNode, LibraryType, LibraryVersion, ResolutionSnapshot, SourceLocation,
};
use crate::shared::Result;
use anyhow::Context;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct SnapshotDocument {
    #[serde(default)]
    pub libraries: Vec<LibraryRecord>,
    #[serde(default)]
    pub diagnostics: Vec<DiagnosticRecord>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LibraryRecord {
    pub name: String,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(rename = "type", default)]
    pub library_type: Option<String>,
    #[serde(default)]
    pub path: String,
    #[serde(default)]
    pub resolved: bool,
    #[serde(default)]
    pub dependencies: Vec<DependencyRecord>,
}

/// A dependency edge, written either as a bare name or as `{ "name": ... }`
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum DependencyRecord {
    Name(String),
    Range { name: String },
}

impl DependencyRecord {
    fn name(&self) -> &str {
        match self {
            DependencyRecord::Name(name) => name,
            DependencyRecord::Range { name } => name,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagnosticRecord {
    pub severity: String,
    pub message: String,
    #[serde(default)]
    pub error_code: Option<String>,
    #[serde(default)]
    pub source_file_path: Option<String>,
    #[serde(default)]
    pub start_line: u32,
    #[serde(default)]
    pub start_column: u32,
    #[serde(default)]
    pub end_line: u32,
    #[serde(default)]
    pub end_column: u32,
}

impl SnapshotDocument {
    pub fn parse(content: &str) -> std::result::Result<Self, serde_json::Error> {
        serde_json::from_str(content)
    }

    /// Converts the document into a validated domain snapshot
    pub fn into_snapshot(self) -> Result<ResolutionSnapshot> {
        let libraries = self
            .libraries
            .into_iter()
            .enumerate()
            .map(|(index, record)| {
                let label = format!("libraries[{}] ('{}')", index, record.name);
                record.into_node().with_context(|| format!("Invalid {}", label))
            })
            .collect::<Result<Vec<_>>>()?;

        let diagnostics = self
            .diagnostics
            .into_iter()
            .enumerate()
            .map(|(index, record)| {
                record
                    .into_message()
                    .with_context(|| format!("Invalid diagnostics[{}]", index))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(ResolutionSnapshot::new(libraries, diagnostics))
    }
}

impl LibraryRecord {
    fn into_node(self) -> Result<LibraryNode> {
        let name = LibraryName::new(self.name)?;
        let version = self
            .version
            .as_deref()
            .map(LibraryVersion::parse)
            .transpose()?;
        let library_type = match self.library_type.as_deref() {
            Some(value) => value.parse::<LibraryType>().map_err(anyhow::Error::msg)?,
            None => LibraryType::Unspecified,
        };
        let dependencies = self
            .dependencies
            .iter()
            .map(|d| LibraryName::new(d.name().to_string()).map(LibraryDependency::new))
            .collect::<Result<Vec<_>>>()?;

        Ok(LibraryNode::new(
            LibraryIdentity::new(name, version, library_type),
            self.path,
            self.resolved,
            dependencies,
        ))
    }
}

impl DiagnosticRecord {
    fn into_message(self) -> Result<DiagnosticMessage> {
        let severity = self
            .severity
            .parse::<DiagnosticSeverity>()
            .map_err(anyhow::Error::msg)?;

        Ok(DiagnosticMessage::new(
            self.error_code,
            self.message,
            severity,
            SourceLocation::new(
                self.source_file_path,
                self.start_line,
                self.start_column,
                self.end_line,
                self.end_column,
            ),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "libraries": [
            {
                "name": "App",
                "version": "1.0.0",
                "type": "Project",
                "path": "/src/App/project.json",
                "resolved": true,
                "dependencies": ["Newtonsoft.Json", { "name": "fx/System.Runtime" }]
            },
            { "name": "Newtonsoft.Json", "version": "9.0.1", "type": "Package", "resolved": true },
            { "name": "fx/System.Runtime", "type": "ReferenceAssembly", "resolved": true }
        ],
        "diagnostics": [
            { "severity": "Warning", "message": "Dependency downgrade", "errorCode": "NU1605", "sourceFilePath": "project.json", "startLine": 4, "startColumn": 7 }
        ]
    }"#;

    #[test]
    fn test_parse_and_convert_sample() {
        let snapshot = SnapshotDocument::parse(SAMPLE)
            .unwrap()
            .into_snapshot()
            .unwrap();

        assert_eq!(snapshot.library_count(), 3);
        let app = &snapshot.libraries()[0];
        assert_eq!(app.identity().library_type(), LibraryType::Project);
        assert_eq!(app.identity().version().unwrap().to_string(), "1.0.0");
        let edges: Vec<&str> = app.dependencies().iter().map(|d| d.name().as_str()).collect();
        assert_eq!(edges, vec!["Newtonsoft.Json", "fx/System.Runtime"]);

        let framework = &snapshot.libraries()[2];
        assert!(framework.identity().version().is_none());
        assert_eq!(framework.path(), "");

        let diagnostic = &snapshot.diagnostics()[0];
        assert_eq!(diagnostic.severity(), DiagnosticSeverity::Warning);
        assert_eq!(diagnostic.error_code(), Some("NU1605"));
        assert_eq!(diagnostic.location().start_line, 4);
        assert_eq!(diagnostic.location().end_line, 0);
    }

    #[test]
    fn test_missing_type_defaults_to_unspecified() {
        let snapshot = SnapshotDocument::parse(r#"{ "libraries": [ { "name": "A" } ] }"#)
            .unwrap()
            .into_snapshot()
            .unwrap();

        let library = &snapshot.libraries()[0];
        assert_eq!(library.identity().library_type(), LibraryType::Unspecified);
        assert!(!library.is_resolved());
    }

    #[test]
    fn test_invalid_version_reports_library() {
        let error = SnapshotDocument::parse(
            r#"{ "libraries": [ { "name": "A", "version": "one" } ] }"#,
        )
        .unwrap()
        .into_snapshot()
        .unwrap_err();

        let message = format!("{:#}", error);
        assert!(message.contains("libraries[0] ('A')"));
        assert!(message.contains("Invalid library version"));
    }

    #[test]
    fn test_nuget_versions_and_msbuild_projects_accepted() {
        let snapshot = SnapshotDocument::parse(
            r#"{ "libraries": [
                { "name": "fx/System.Runtime", "version": "4.0.0.0", "type": "ReferenceAssembly" },
                { "name": "Legacy", "version": "1.0", "type": "MSBuildProject" },
                { "name": "Padded", "version": "1.01.0", "type": "Package" }
            ] }"#,
        )
        .unwrap()
        .into_snapshot()
        .unwrap();

        let versions: Vec<String> = snapshot
            .libraries()
            .iter()
            .map(|l| l.identity().version().unwrap().to_string())
            .collect();
        assert_eq!(versions, vec!["4.0.0.0", "1.0.0", "1.1.0"]);
        assert_eq!(
            snapshot.libraries()[1].identity().library_type(),
            LibraryType::MSBuildProject
        );
    }

    #[test]
    fn test_unknown_library_type_rejected() {
        let error = SnapshotDocument::parse(
            r#"{ "libraries": [ { "name": "A", "type": "Gem" } ] }"#,
        )
        .unwrap()
        .into_snapshot()
        .unwrap_err();

        assert!(format!("{:#}", error).contains("Unknown library type 'Gem'"));
    }

    #[test]
    fn test_unknown_severity_rejected() {
        let error = SnapshotDocument::parse(
            r#"{ "diagnostics": [ { "severity": "Fatal", "message": "x" } ] }"#,
        )
        .unwrap()
        .into_snapshot()
        .unwrap_err();

        let message = format!("{:#}", error);
        assert!(message.contains("diagnostics[0]"));
        assert!(message.contains("Unknown diagnostic severity"));
    }

    #[test]
    fn test_empty_library_name_rejected() {
        let result = SnapshotDocument::parse(r#"{ "libraries": [ { "name": "" } ] }"#)
            .unwrap()
            .into_snapshot();
        assert!(result.is_err());
    }

    #[test]
    fn test_malformed_json() {
        assert!(SnapshotDocument::parse("{ not json").is_err());
    }
}
