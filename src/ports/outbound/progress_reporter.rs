/// ProgressReporter port for reporting progress during a collection run
///
/// This port abstracts user-facing progress output (e.g., to stderr)
/// so it never mixes with the JSON document printed on stdout.
pub trait ProgressReporter {
    /// Reports a progress message
    fn report(&self, message: &str);

    /// Reports progress through the category list
    ///
    /// # Arguments
    /// * `current` - Number of categories finished
    /// * `total` - Number of categories in the run
    /// * `message` - Optional message to include
    fn report_progress(&self, current: usize, total: usize, message: Option<&str>);

    /// Reports an error or warning message
    fn report_error(&self, message: &str);

    /// Reports completion of the run
    fn report_completion(&self, message: &str);
}
