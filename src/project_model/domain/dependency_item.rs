use super::LibraryIdentity;
use serde::Serialize;

/// Lightweight reference to a library, shared by every description that mentions it
///
/// Instances are created once per distinct library name and handed out as
/// `Arc<DependencyItem>`; see [`DependencyItemRegistry`](crate::project_model::services::DependencyItemRegistry).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DependencyItem {
    name: String,
    version: Option<String>,
}

impl DependencyItem {
    pub fn new(name: String, version: Option<String>) -> Self {
        Self { name, version }
    }

    pub fn from_identity(identity: &LibraryIdentity) -> Self {
        Self {
            name: identity.name().to_string(),
            version: identity.version().map(ToString::to_string),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }
}
