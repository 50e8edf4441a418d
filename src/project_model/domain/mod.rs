pub mod dependency_item;
pub mod diagnostic;
pub mod library;
pub mod library_node;
pub mod resolution_snapshot;

pub use dependency_item::DependencyItem;
pub use diagnostic::{DiagnosticMessage, DiagnosticSeverity, SourceLocation};
pub use library::{LibraryIdentity, LibraryName, LibraryType, LibraryVersion};
pub use library_node::{LibraryDependency, LibraryNode};
pub use resolution_snapshot::ResolutionSnapshot;
