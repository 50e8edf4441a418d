//! Dependency description read model
//!
//! Client-facing projection of one resolved library. Descriptions are
//! compared between successive resolutions to decide whether clients need
//! to be notified, so equality here is structural and order-sensitive.

use super::diagnostic_message_view::DiagnosticMessageView;
use crate::project_model::domain::{
    DependencyItem, DiagnosticMessage, DiagnosticSeverity, LibraryIdentity, LibraryNode,
    LibraryType,
};
use crate::project_model::services::DependencyItemRegistry;
use crate::shared::error::ProjectionError;
use serde::Serialize;
use std::sync::Arc;

/// Name prefix carried by framework reference assemblies
const FRAMEWORK_REFERENCE_PREFIX: &str = "fx/";

/// View representation of a resolved library
///
/// Immutable once built. Field names are the wire contract:
/// `name`, `displayName`, `version`, `path`, `type`, `resolved`,
/// `dependencies`, `errors`, `warnings`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DependencyDescription {
    name: String,
    display_name: String,
    version: Option<String>,
    path: String,
    #[serde(rename = "type")]
    library_type: String,
    resolved: bool,
    dependencies: Vec<Arc<DependencyItem>>,
    errors: Vec<DiagnosticMessageView>,
    warnings: Vec<DiagnosticMessageView>,
}

impl DependencyDescription {
    /// Projects one library node into its description
    ///
    /// # Arguments
    /// * `library` - The resolved library node
    /// * `diagnostics` - Every diagnostic collected for the whole graph
    /// * `dependency_items` - Shared items, one per library name in the graph
    ///
    /// The full diagnostic list is attached to every library, split by
    /// severity; `Info` diagnostics are dropped.
    ///
    /// # Errors
    /// Returns [`ProjectionError::MissingDependencyReference`] when a
    /// dependency edge names a library absent from `dependency_items`.
    pub fn create(
        library: &LibraryNode,
        diagnostics: &[DiagnosticMessage],
        dependency_items: &DependencyItemRegistry,
    ) -> Result<Self, ProjectionError> {
        let identity = library.identity();
        let name = identity.name().as_str();

        let dependencies = library
            .dependencies()
            .iter()
            .map(|dependency| dependency_items.get(name, dependency.name().as_str()))
            .collect::<Result<Vec<_>, _>>()?;

        let mut errors = Vec::new();
        let mut warnings = Vec::new();
        for diagnostic in diagnostics {
            match diagnostic.severity() {
                DiagnosticSeverity::Error => errors.push(DiagnosticMessageView::from(diagnostic)),
                DiagnosticSeverity::Warning => {
                    warnings.push(DiagnosticMessageView::from(diagnostic))
                }
                DiagnosticSeverity::Info => {}
            }
        }

        Ok(Self {
            name: name.to_string(),
            display_name: library_display_name(identity).to_string(),
            version: identity.version().map(ToString::to_string),
            path: library.path().to_string(),
            library_type: identity.library_type().as_str().to_string(),
            resolved: library.is_resolved(),
            dependencies,
            errors,
            warnings,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn library_type(&self) -> &str {
        &self.library_type
    }

    pub fn is_resolved(&self) -> bool {
        self.resolved
    }

    pub fn dependencies(&self) -> &[Arc<DependencyItem>] {
        &self.dependencies
    }

    pub fn errors(&self) -> &[DiagnosticMessageView] {
        &self.errors
    }

    pub fn warnings(&self) -> &[DiagnosticMessageView] {
        &self.warnings
    }
}

/// Structural equality.
///
/// `display_name` is derived from `name` and `type` and is not compared.
/// Sequences compare element by element, so reordering is a difference.
impl PartialEq for DependencyDescription {
    fn eq(&self, other: &Self) -> bool {
        self.resolved == other.resolved
            && self.name == other.name
            && self.version == other.version
            && self.path == other.path
            && self.library_type == other.library_type
            && self.dependencies == other.dependencies
            && self.errors == other.errors
            && self.warnings == other.warnings
    }
}

impl Eq for DependencyDescription {}

/// Name shown to clients: framework reference assemblies lose their `fx/` prefix
pub fn library_display_name(identity: &LibraryIdentity) -> &str {
    let name = identity.name().as_str();
    if identity.library_type() == LibraryType::ReferenceAssembly {
        if let Some(stripped) = name.strip_prefix(FRAMEWORK_REFERENCE_PREFIX) {
            return stripped;
        }
    }
    name
}
