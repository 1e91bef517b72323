/// ProgressReporter port for user-facing progress messages
///
/// Output goes to the console (stderr) so it never mixes with anything a
/// caller pipes from stdout.
pub trait ProgressReporter {
    /// Reports a progress message
    fn report(&self, message: &str);

    /// Reports traversal progress
    ///
    /// # Arguments
    /// * `current` - Lookups finished so far
    /// * `total` - Packages discovered so far (grows while walking)
    /// * `message` - Optional message, usually the package being looked up
    fn report_progress(&self, current: usize, total: usize, message: Option<&str>);

    /// Reports an error or warning message
    fn report_error(&self, message: &str);

    /// Reports completion of an operation
    fn report_completion(&self, message: &str);
}
