/// ProgressReporter port for reporting progress during a run
///
/// This port abstracts user feedback (e.g., to stderr) so that the
/// report itself can go to stdout untouched.
pub trait ProgressReporter {
    /// Reports a progress message
    fn report(&self, message: &str);

    /// Reports an error or warning message
    fn report_error(&self, message: &str);

    /// Reports completion of an operation
    fn report_completion(&self, message: &str);
}
