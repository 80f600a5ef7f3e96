pub mod compatibility_rules;
pub mod power_budget;

pub use compatibility_rules::{CompatibilityRule, DEFAULT_RULES};
pub use power_budget::{PowerAssessment, PowerBudget};
