use crate::application::read_models::BuildReport;
use crate::shared::Result;

/// ReportFormatter port for rendering a validation report
///
/// This port abstracts the output format (Markdown, JSON, ...).
pub trait ReportFormatter {
    /// Formats the report
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, report: &BuildReport) -> Result<String>;
}
