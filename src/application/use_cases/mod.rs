/// Use cases module containing application business logic orchestration
mod project_dependencies;

pub use project_dependencies::ProjectDependenciesUseCase;
