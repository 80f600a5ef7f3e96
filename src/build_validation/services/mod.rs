pub mod compatibility_evaluator;
pub mod pricing_calculator;
pub mod report_metadata_generator;

pub use compatibility_evaluator::{CompatibilityCheckResult, CompatibilityEvaluator};
pub use pricing_calculator::{PricingCalculator, DEFAULT_ASSEMBLY_FEE_BASIS_POINTS};
pub use report_metadata_generator::ReportMetadataGenerator;
