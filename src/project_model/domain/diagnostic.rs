use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Severity attached to a diagnostic produced during resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum DiagnosticSeverity {
    Info,
    Warning,
    Error,
}

impl DiagnosticSeverity {
    pub fn as_str(&self) -> &'static str {
        match self {
            DiagnosticSeverity::Info => "Info",
            DiagnosticSeverity::Warning => "Warning",
            DiagnosticSeverity::Error => "Error",
        }
    }
}

impl FromStr for DiagnosticSeverity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "info" | "information" => Ok(DiagnosticSeverity::Info),
            "warning" | "warn" => Ok(DiagnosticSeverity::Warning),
            "error" => Ok(DiagnosticSeverity::Error),
            _ => Err(format!(
                "Unknown diagnostic severity '{}'. Expected one of: Info, Warning, Error",
                s
            )),
        }
    }
}

impl fmt::Display for DiagnosticSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Source span a diagnostic points at. Lines and columns are 1-based; 0 means unknown.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceLocation {
    pub source_file_path: Option<String>,
    pub start_line: u32,
    pub start_column: u32,
    pub end_line: u32,
    pub end_column: u32,
}

impl SourceLocation {
    pub fn new(
        source_file_path: Option<String>,
        start_line: u32,
        start_column: u32,
        end_line: u32,
        end_column: u32,
    ) -> Self {
        Self {
            source_file_path,
            start_line,
            start_column,
            end_line,
            end_column,
        }
    }

    /// A location that only names a file
    pub fn file(path: impl Into<String>) -> Self {
        Self {
            source_file_path: Some(path.into()),
            ..Self::default()
        }
    }
}

/// Severity-tagged note collected while resolving a graph
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagnosticMessage {
    error_code: Option<String>,
    message: String,
    severity: DiagnosticSeverity,
    location: SourceLocation,
}

impl DiagnosticMessage {
    pub fn new(
        error_code: Option<String>,
        message: String,
        severity: DiagnosticSeverity,
        location: SourceLocation,
    ) -> Self {
        Self {
            error_code,
            message,
            severity,
            location,
        }
    }

    pub fn error_code(&self) -> Option<&str> {
        self.error_code.as_deref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn severity(&self) -> DiagnosticSeverity {
        self.severity
    }

    pub fn location(&self) -> &SourceLocation {
        &self.location
    }

    /// Compiler-style rendering: `path(line,col): severity CODE: message`
    pub fn formatted_message(&self) -> String {
        let mut formatted = String::new();

        if let Some(path) = &self.location.source_file_path {
            formatted.push_str(path);
            if self.location.start_line > 0 {
                formatted.push_str(&format!(
                    "({},{})",
                    self.location.start_line, self.location.start_column
                ));
            }
            formatted.push_str(": ");
        }

        formatted.push_str(&self.severity.as_str().to_lowercase());
        if let Some(code) = &self.error_code {
            formatted.push(' ');
            formatted.push_str(code);
        }
        formatted.push_str(": ");
        formatted.push_str(&self.message);

        formatted
    }
}
