pub mod build_state;
pub mod catalog;
pub mod category;
pub mod compatibility_issue;
pub mod component;
pub mod price_breakdown;
pub mod report_metadata;

pub use build_state::{BuildSlot, BuildState};
pub use catalog::Catalog;
pub use category::{well_known, Category, CategoryId};
pub use compatibility_issue::{CompatibilityIssue, IssueKind, Severity};
pub use component::{Component, ComponentId, TechnicalAttributes, HIGH_POWER_CONNECTOR};
pub use price_breakdown::PriceBreakdown;
pub use report_metadata::ReportMetadata;
