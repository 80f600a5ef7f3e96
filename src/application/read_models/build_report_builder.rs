//! Builder for constructing BuildReport from a validation response

use super::build_report::{
    BuildReport, IssueView, PriceView, ReportMetadataView, SelectionView, SlotView,
};
use crate::application::dto::ValidationResponse;
use crate::build_validation::domain::{BuildSlot, CompatibilityIssue, Component, ReportMetadata};

/// Number of spec labels shown next to a selected component
const HIGHLIGHT_COUNT: usize = 2;

/// Builder for constructing BuildReport from domain objects
pub struct BuildReportBuilder;

impl BuildReportBuilder {
    pub fn build(response: &ValidationResponse) -> BuildReport {
        BuildReport {
            metadata: Self::build_metadata(&response.metadata),
            slots: response.build.slots().iter().map(Self::build_slot).collect(),
            errors: Self::build_issues(&response.compatibility.errors),
            warnings: Self::build_issues(&response.compatibility.warnings),
            price: PriceView {
                subtotal: response.price.subtotal(),
                assembly_fee: response.price.assembly_fee(),
                assembly_fee_percent: response.assembly_fee_percent,
                grand_total: response.price.grand_total(),
            },
            can_confirm: response.can_confirm(),
        }
    }

    fn build_metadata(metadata: &ReportMetadata) -> ReportMetadataView {
        ReportMetadataView {
            timestamp: metadata.timestamp().to_string(),
            tool_name: metadata.tool_name().to_string(),
            tool_version: metadata.tool_version().to_string(),
            report_id: metadata.report_id().to_string(),
        }
    }

    fn build_slot(slot: &BuildSlot) -> SlotView {
        SlotView {
            category_id: slot.category().id().to_string(),
            category_name: slot.category().name().to_string(),
            selection: slot.component().map(Self::build_selection),
        }
    }

    fn build_selection(component: &Component) -> SelectionView {
        SelectionView {
            component_id: component.id().to_string(),
            brand: component.brand().to_string(),
            name: component.name().to_string(),
            price: component.price(),
            highlights: component
                .specs()
                .iter()
                .take(HIGHLIGHT_COUNT)
                .map(|(label, value)| (label.clone(), value.clone()))
                .collect(),
        }
    }

    fn build_issues(issues: &[CompatibilityIssue]) -> Vec<IssueView> {
        issues
            .iter()
            .map(|issue| IssueView {
                severity: issue.severity(),
                kind: issue.kind(),
                message: issue.message().to_string(),
            })
            .collect()
    }
}
