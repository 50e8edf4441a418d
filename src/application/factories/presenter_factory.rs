use crate::adapters::outbound::filesystem::{FileSystemWriter, StdoutPresenter};
use crate::ports::outbound::OutputPresenter;
use std::path::PathBuf;

/// Factory for creating output presenters
///
/// Picks the presenter from the optional `--output` destination.
pub struct PresenterFactory;

impl PresenterFactory {
    /// `None` writes to stdout, `Some(path)` writes to that file
    pub fn create(output_path: Option<PathBuf>) -> Box<dyn OutputPresenter> {
        match output_path {
            Some(path) => Box::new(FileSystemWriter::new(path)),
            None => Box::new(StdoutPresenter::new()),
        }
    }
}
