//! Diagnostic view for read model
//!
//! Serialization-only copy of a diagnostic message.

use crate::project_model::domain::{DiagnosticMessage, DiagnosticSeverity};
use serde::Serialize;

/// View representation of one diagnostic message
///
/// Built by copying every field of the source message; two views are equal
/// when all of their fields are equal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagnosticMessageView {
    error_code: Option<String>,
    source_file_path: Option<String>,
    message: String,
    severity: DiagnosticSeverity,
    start_line: u32,
    start_column: u32,
    end_line: u32,
    end_column: u32,
    formatted_message: String,
}

impl DiagnosticMessageView {
    pub fn error_code(&self) -> Option<&str> {
        self.error_code.as_deref()
    }

    pub fn source_file_path(&self) -> Option<&str> {
        self.source_file_path.as_deref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn severity(&self) -> DiagnosticSeverity {
        self.severity
    }

    pub fn start_line(&self) -> u32 {
        self.start_line
    }

    pub fn start_column(&self) -> u32 {
        self.start_column
    }

    pub fn end_line(&self) -> u32 {
        self.end_line
    }

    pub fn end_column(&self) -> u32 {
        self.end_column
    }

    pub fn formatted_message(&self) -> &str {
        &self.formatted_message
    }
}

impl From<&DiagnosticMessage> for DiagnosticMessageView {
    fn from(diagnostic: &DiagnosticMessage) -> Self {
        let location = diagnostic.location();
        Self {
            error_code: diagnostic.error_code().map(str::to_string),
            source_file_path: location.source_file_path.clone(),
            message: diagnostic.message().to_string(),
            severity: diagnostic.severity(),
            start_line: location.start_line,
            start_column: location.start_column,
            end_line: location.end_line,
            end_column: location.end_column,
            formatted_message: diagnostic.formatted_message(),
        }
    }
}
