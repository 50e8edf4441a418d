use crate::application::dto::{ProjectionRequest, ProjectionResponse};
use crate::shared::Result;

/// ProjectionPort - entry point for turning resolution snapshots into descriptions
///
/// Implemented by [`ProjectDependenciesUseCase`](crate::application::use_cases::ProjectDependenciesUseCase).
pub trait ProjectionPort {
    /// Projects the requested snapshot and, when asked, diffs it against a previous one
    ///
    /// # Errors
    /// Returns an error if a snapshot cannot be read or a projection fails
    fn project(&self, request: ProjectionRequest) -> Result<ProjectionResponse>;
}
