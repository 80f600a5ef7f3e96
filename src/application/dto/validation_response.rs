use crate::build_validation::domain::{BuildState, PriceBreakdown, ReportMetadata};
use crate::build_validation::services::CompatibilityCheckResult;

/// ValidationResponse - Internal response DTO from the build validation use case
///
/// Carries the populated build alongside the evaluation and the quote so
/// adapters can render any of them.
#[derive(Debug, Clone)]
pub struct ValidationResponse {
    /// The build after applying the selection
    pub build: BuildState,
    /// Issues partitioned by severity
    pub compatibility: CompatibilityCheckResult,
    /// Subtotal, assembly fee and grand total
    pub price: PriceBreakdown,
    /// Assembly fee rate used for `price`, in percent
    pub assembly_fee_percent: f64,
    /// Report metadata (timestamp, tool info, report id)
    pub metadata: ReportMetadata,
}

impl ValidationResponse {
    pub fn new(
        build: BuildState,
        compatibility: CompatibilityCheckResult,
        price: PriceBreakdown,
        assembly_fee_percent: f64,
        metadata: ReportMetadata,
    ) -> Self {
        Self {
            build,
            compatibility,
            price,
            assembly_fee_percent,
            metadata,
        }
    }

    /// The build may be confirmed only without error-severity issues
    pub fn can_confirm(&self) -> bool {
        !self.compatibility.blocks_confirmation()
    }
}
