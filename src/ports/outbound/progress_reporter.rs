/// ProgressReporter port for user feedback during a projection run
///
/// All feedback goes through this port so stdout stays reserved for
/// the formatted output.
pub trait ProgressReporter {
    /// Reports an informational step
    fn report(&self, message: &str);

    /// Reports progress through a batch of libraries
    ///
    /// # Arguments
    /// * `current` - Libraries processed so far
    /// * `total` - Libraries in the batch
    /// * `message` - Optional label, usually the library being projected
    fn report_progress(&self, current: usize, total: usize, message: Option<&str>);

    /// Reports a warning that does not stop the run
    fn report_warning(&self, message: &str);

    /// Reports completion of the run
    fn report_completion(&self, message: &str);
}
