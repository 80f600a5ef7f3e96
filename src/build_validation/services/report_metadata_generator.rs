use crate::build_validation::domain::ReportMetadata;
use chrono::Utc;
use uuid::Uuid;

/// ReportMetadataGenerator service for stamping a validation report
pub struct ReportMetadataGenerator;

impl ReportMetadataGenerator {
    /// Generates report metadata with current timestamp and a unique report id
    ///
    /// # Arguments
    /// * `tool_name` - Name of the tool producing the report
    /// * `tool_version` - Version of the tool
    pub fn generate_metadata(tool_name: &str, tool_version: &str) -> ReportMetadata {
        let timestamp = Utc::now().to_rfc3339();
        let report_id = format!("urn:uuid:{}", Uuid::new_v4());

        ReportMetadata::new(
            timestamp,
            tool_name.to_string(),
            tool_version.to_string(),
            report_id,
        )
    }

    /// Generates report metadata naming this crate and its compile-time version
    pub fn generate_default_metadata() -> ReportMetadata {
        Self::generate_metadata("pc-builder", env!("CARGO_PKG_VERSION"))
    }
}
