use crate::build_validation::domain::{BuildState, CompatibilityIssue};
use crate::build_validation::policies::{CompatibilityRule, DEFAULT_RULES};

/// CompatibilityEvaluator service for checking a build against the rule set
///
/// Stateless: every call re-runs all rules on the given build, in order,
/// and collects whatever each rule reports.
#[derive(Clone)]
pub struct CompatibilityEvaluator {
    rules: Vec<CompatibilityRule>,
}

impl std::fmt::Debug for CompatibilityEvaluator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompatibilityEvaluator")
            .field("rules", &self.rules.len())
            .finish()
    }
}

impl CompatibilityEvaluator {
    pub fn new() -> Self {
        Self::with_rules(DEFAULT_RULES.to_vec())
    }

    /// Creates an evaluator running a custom ordered rule list
    pub fn with_rules(rules: Vec<CompatibilityRule>) -> Self {
        Self { rules }
    }

    /// Evaluates every rule and returns the issues in rule order
    pub fn evaluate(&self, build: &BuildState) -> Vec<CompatibilityIssue> {
        self.rules.iter().filter_map(|rule| rule(build)).collect()
    }

    /// Evaluates the build and partitions the issues by severity
    pub fn check(&self, build: &BuildState) -> CompatibilityCheckResult {
        CompatibilityCheckResult::from_issues(self.evaluate(build))
    }
}

impl Default for CompatibilityEvaluator {
    fn default() -> Self {
        Self::new()
    }
}

/// Issues of one evaluation split into errors and warnings
///
/// Both lists keep evaluation order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CompatibilityCheckResult {
    pub errors: Vec<CompatibilityIssue>,
    pub warnings: Vec<CompatibilityIssue>,
}

impl CompatibilityCheckResult {
    pub fn from_issues(issues: Vec<CompatibilityIssue>) -> Self {
        let (errors, warnings): (Vec<_>, Vec<_>) =
            issues.into_iter().partition(CompatibilityIssue::is_error);
        Self { errors, warnings }
    }

    /// Any error-severity issue blocks confirming the build
    pub fn blocks_confirmation(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn is_clean(&self) -> bool {
        self.errors.is_empty() && self.warnings.is_empty()
    }

    pub fn issue_count(&self) -> usize {
        self.errors.len() + self.warnings.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build_validation::domain::{Category, Component, IssueKind, TechnicalAttributes};

    fn categories() -> Vec<Category> {
        [
            ("cpu", "Processor"),
            ("motherboard", "Motherboard"),
            ("ram", "Memory"),
            ("gpu", "Graphics Card"),
            ("psu", "Power Supply"),
            ("cooling", "Cooling"),
        ]
        .iter()
        .map(|(id, name)| Category::new(id, name).unwrap())
        .collect()
    }

    fn component(id: &str, category: &str, attributes: TechnicalAttributes) -> Component {
        Component::new(id, category, "Brand", id, 1000)
            .unwrap()
            .with_attributes(attributes)
    }

    fn am5_cpu() -> Component {
        component(
            "ryzen-7-7700x",
            "cpu",
            TechnicalAttributes {
                socket: Some("AM5".to_string()),
                tdp: Some(65),
                ..Default::default()
            },
        )
    }

    fn lga1700_board() -> Component {
        component(
            "z790",
            "motherboard",
            TechnicalAttributes {
                socket: Some("LGA1700".to_string()),
                memory_type: Some("DDR5".to_string()),
                ..Default::default()
            },
        )
    }

    fn gpu() -> Component {
        component(
            "rtx-4080",
            "gpu",
            TechnicalAttributes {
                tdp: Some(320),
                psu_connectors: vec!["16-pin".to_string()],
                ..Default::default()
            },
        )
    }

    fn kinds(issues: &[CompatibilityIssue]) -> Vec<IssueKind> {
        issues.iter().map(CompatibilityIssue::kind).collect()
    }

    #[test]
    fn test_empty_build_has_no_issues() {
        let build = BuildState::new(categories()).unwrap();
        let result = CompatibilityEvaluator::new().check(&build);
        assert!(result.is_clean());
        assert!(!result.blocks_confirmation());
    }

    #[test]
    fn test_evaluation_is_idempotent() {
        let mut build = BuildState::new(categories()).unwrap();
        build.set("cpu", Some(am5_cpu())).unwrap();
        build.set("motherboard", Some(lga1700_board())).unwrap();
        build.set("gpu", Some(gpu())).unwrap();

        let evaluator = CompatibilityEvaluator::new();
        assert_eq!(evaluator.evaluate(&build), evaluator.evaluate(&build));
    }

    #[test]
    fn test_socket_mismatch_reported_once() {
        let mut build = BuildState::new(categories()).unwrap();
        build.set("cpu", Some(am5_cpu())).unwrap();
        build.set("motherboard", Some(lga1700_board())).unwrap();

        let issues = CompatibilityEvaluator::new().evaluate(&build);
        let socket_errors = issues
            .iter()
            .filter(|i| i.kind() == IssueKind::SocketMismatch)
            .count();
        assert_eq!(socket_errors, 1);
    }

    #[test]
    fn test_issues_follow_rule_order() {
        let mut build = BuildState::new(categories()).unwrap();
        build.set("cpu", Some(am5_cpu())).unwrap();
        build.set("motherboard", Some(lga1700_board())).unwrap();
        build.set("gpu", Some(gpu())).unwrap();

        let issues = CompatibilityEvaluator::new().evaluate(&build);
        assert_eq!(
            kinds(&issues),
            vec![
                IssueKind::SocketMismatch,
                IssueKind::PowerSupplyRecommended,
                IssueKind::MissingPowerSupply,
            ]
        );
    }

    #[test]
    fn test_clearing_a_slot_drops_dependent_issues() {
        let mut build = BuildState::new(categories()).unwrap();
        build.set("cpu", Some(am5_cpu())).unwrap();
        build.set("motherboard", Some(lga1700_board())).unwrap();
        build.set("gpu", Some(gpu())).unwrap();
        let evaluator = CompatibilityEvaluator::new();

        build.set("motherboard", None).unwrap();
        let issues = evaluator.evaluate(&build);
        assert_eq!(
            kinds(&issues),
            vec![
                IssueKind::PowerSupplyRecommended,
                IssueKind::MissingMotherboard,
                IssueKind::MissingPowerSupply,
            ]
        );
    }

    #[test]
    fn test_check_partitions_by_severity() {
        let mut build = BuildState::new(categories()).unwrap();
        build.set("cpu", Some(am5_cpu())).unwrap();
        build.set("motherboard", Some(lga1700_board())).unwrap();
        build.set("gpu", Some(gpu())).unwrap();

        let result = CompatibilityEvaluator::new().check(&build);
        assert_eq!(kinds(&result.errors), vec![IssueKind::SocketMismatch]);
        assert_eq!(
            kinds(&result.warnings),
            vec![IssueKind::PowerSupplyRecommended, IssueKind::MissingPowerSupply]
        );
        assert!(result.blocks_confirmation());
        assert_eq!(result.issue_count(), 3);
    }

    #[test]
    fn test_custom_rule_list() {
        fn always(_: &BuildState) -> Option<CompatibilityIssue> {
            Some(CompatibilityIssue::new(
                IssueKind::MissingProcessor,
                "always".to_string(),
            ))
        }

        let build = BuildState::new(categories()).unwrap();
        let rules: Vec<CompatibilityRule> = vec![always, always];
        let evaluator = CompatibilityEvaluator::with_rules(rules);
        assert_eq!(evaluator.evaluate(&build).len(), 2);
    }
}
