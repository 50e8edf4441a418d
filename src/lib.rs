//! project-model-view - client-facing dependency views for a project-model server
//!
//! This library turns a resolved dependency graph (a resolution snapshot) into
//! the dependency descriptions an editor or build client consumes, following
//! hexagonal architecture and Domain-Driven Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`project_model`): Libraries, diagnostics and the shared dependency item table
//! - **Application Layer** (`application`): Read models, use cases and factories
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use project_model_view::prelude::*;
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<()> {
//! let use_case = ProjectDependenciesUseCase::new(
//!     FileSystemReader::new(),
//!     StderrProgressReporter::new(),
//! );
//!
//! let request = ProjectionRequest::new(PathBuf::from("snapshot.json"), None, false);
//! let response = use_case.execute(request)?;
//!
//! let output = JsonFormatter::new().format(&response)?;
//! println!("{}", output);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod ports;
pub mod project_model;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemReader, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{JsonFormatter, MarkdownFormatter};
    pub use crate::application::dto::{
        OutputFormat, ProjectionMetadata, ProjectionRequest, ProjectionResponse,
    };
    pub use crate::application::read_models::{
        ChangeDetector, DependencyChanges, DependencyDescription, DependencyDescriptionsBuilder,
        DiagnosticMessageView,
    };
    pub use crate::application::use_cases::ProjectDependenciesUseCase;
    pub use crate::ports::inbound::ProjectionPort;
    pub use crate::ports::outbound::{
        DescriptionFormatter, OutputPresenter, ProgressReporter, ResolutionSnapshotReader,
    };
    pub use crate::project_model::domain::{
        DependencyItem, DiagnosticMessage, DiagnosticSeverity, LibraryDependency,
        LibraryIdentity, LibraryName, LibraryNode, LibraryType, LibraryVersion,
        ResolutionSnapshot, SourceLocation,
    };
    pub use crate::project_model::services::DependencyItemRegistry;
    pub use crate::shared::error::{ExitCode, ProjectModelError, ProjectionError};
    pub use crate::shared::Result;
}
