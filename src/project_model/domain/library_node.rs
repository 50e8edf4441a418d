use super::{LibraryIdentity, LibraryName};

/// Directed reference from one library to another, identified by name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LibraryDependency {
    name: LibraryName,
}

impl LibraryDependency {
    pub fn new(name: LibraryName) -> Self {
        Self { name }
    }

    pub fn name(&self) -> &LibraryName {
        &self.name
    }
}

/// A resolved entry in the dependency graph
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LibraryNode {
    identity: LibraryIdentity,
    path: String,
    resolved: bool,
    dependencies: Vec<LibraryDependency>,
}

impl LibraryNode {
    pub fn new(
        identity: LibraryIdentity,
        path: String,
        resolved: bool,
        dependencies: Vec<LibraryDependency>,
    ) -> Self {
        Self {
            identity,
            path,
            resolved,
            dependencies,
        }
    }

    pub fn identity(&self) -> &LibraryIdentity {
        &self.identity
    }

    pub fn name(&self) -> &LibraryName {
        self.identity.name()
    }

    /// Resolved filesystem or package path; empty when unresolved
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn is_resolved(&self) -> bool {
        self.resolved
    }

    /// Dependency edges in declaration order
    pub fn dependencies(&self) -> &[LibraryDependency] {
        &self.dependencies
    }
}
