use crate::application::dto::{ProjectionMetadata, ProjectionRequest, ProjectionResponse};
use crate::application::read_models::{
    ChangeDetector, DependencyChanges, DependencyDescription, DependencyDescriptionsBuilder,
};
use crate::ports::inbound::ProjectionPort;
use crate::ports::outbound::{ProgressReporter, ResolutionSnapshotReader};
use crate::project_model::domain::{DiagnosticSeverity, ResolutionSnapshot};
use crate::project_model::services::DependencyItemRegistry;
use crate::shared::Result;
use anyhow::Context;
use std::path::Path;

/// ProjectDependenciesUseCase - projects a resolution snapshot into dependency descriptions
///
/// Optionally diffs the result against the projection of an earlier snapshot
/// of the same project, which is how callers decide whether clients need
/// to be notified.
///
/// # Type Parameters
/// * `SR` - ResolutionSnapshotReader implementation
/// * `PR` - ProgressReporter implementation
pub struct ProjectDependenciesUseCase<SR, PR> {
    snapshot_reader: SR,
    progress_reporter: PR,
}

impl<SR, PR> ProjectDependenciesUseCase<SR, PR>
where
    SR: ResolutionSnapshotReader,
    PR: ProgressReporter,
{
    pub fn new(snapshot_reader: SR, progress_reporter: PR) -> Self {
        Self {
            snapshot_reader,
            progress_reporter,
        }
    }

    /// Executes the projection
    ///
    /// # Errors
    /// Returns an error if a snapshot cannot be read, or if a library has a
    /// dependency edge to a library missing from its snapshot.
    pub fn execute(&self, request: ProjectionRequest) -> Result<ProjectionResponse> {
        let snapshot = self.load_snapshot(&request.snapshot_path)?;
        self.report_snapshot_summary(&snapshot);

        let descriptions = self.project_snapshot(&snapshot)?;

        let changes = match &request.previous_snapshot_path {
            Some(previous_path) => Some(self.detect_changes(previous_path, &descriptions)?),
            None => None,
        };

        let descriptions = match (&changes, request.only_changed) {
            (Some(changes), true) => descriptions
                .into_iter()
                .filter(|d| changes.requires_notification(d.name()))
                .collect(),
            (None, true) => {
                self.progress_reporter.report_warning(
                    "--only-changed has no effect without a previous snapshot; emitting every library",
                );
                descriptions
            }
            (_, false) => descriptions,
        };

        let metadata = ProjectionMetadata::generate(snapshot.library_count());

        self.progress_reporter.report_completion(&format!(
            "✅ Projected {} dependency description(s)",
            descriptions.len()
        ));

        Ok(ProjectionResponse::new(metadata, descriptions, changes))
    }

    /// Reporter shared with the caller for the steps that follow projection
    pub fn progress_reporter(&self) -> &PR {
        &self.progress_reporter
    }

    fn load_snapshot(&self, path: &Path) -> Result<ResolutionSnapshot> {
        self.progress_reporter.report(&format!(
            "📖 Loading resolution snapshot from: {}",
            path.display()
        ));
        self.snapshot_reader.read_snapshot(path)
    }

    fn report_snapshot_summary(&self, snapshot: &ResolutionSnapshot) {
        self.progress_reporter.report(&format!(
            "✅ Detected {} library(ies), {} unresolved, {} diagnostic(s)",
            snapshot.library_count(),
            snapshot.unresolved_count(),
            snapshot.diagnostics().len()
        ));

        let error_count = snapshot
            .diagnostics()
            .iter()
            .filter(|d| d.severity() == DiagnosticSeverity::Error)
            .count();
        if error_count > 0 {
            self.progress_reporter.report_warning(&format!(
                "Resolution reported {} error(s); they are attached to every description",
                error_count
            ));
        }
    }

    /// Registry pre-pass, then one projection per library with progress
    fn project_snapshot(&self, snapshot: &ResolutionSnapshot) -> Result<Vec<DependencyDescription>> {
        let registry = DependencyItemRegistry::from_libraries(snapshot.libraries());
        let total = snapshot.library_count();
        let mut descriptions = Vec::with_capacity(total);

        for (idx, library) in snapshot.libraries().iter().enumerate() {
            self.progress_reporter
                .report_progress(idx + 1, total, Some(library.name().as_str()));

            let description =
                DependencyDescription::create(library, snapshot.diagnostics(), &registry)
                    .with_context(|| format!("Failed to project library '{}'", library.name()))?;
            descriptions.push(description);
        }

        Ok(descriptions)
    }

    fn detect_changes(
        &self,
        previous_path: &Path,
        current: &[DependencyDescription],
    ) -> Result<DependencyChanges> {
        let previous_snapshot = self
            .load_snapshot(previous_path)
            .context("Failed to load the previous resolution snapshot")?;
        let previous = DependencyDescriptionsBuilder::build(&previous_snapshot)
            .context("Failed to project the previous resolution snapshot")?;

        let changes = ChangeDetector::detect(&previous, current);
        self.progress_reporter.report(&format!(
            "🔁 Changes: {} added, {} changed, {} removed, {} unchanged",
            changes.added.len(),
            changes.changed.len(),
            changes.removed.len(),
            changes.unchanged
        ));

        Ok(changes)
    }
}

impl<SR, PR> ProjectionPort for ProjectDependenciesUseCase<SR, PR>
where
    SR: ResolutionSnapshotReader,
    PR: ProgressReporter,
{
    fn project(&self, request: ProjectionRequest) -> Result<ProjectionResponse> {
        self.execute(request)
    }
}
