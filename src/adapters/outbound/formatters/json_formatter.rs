use crate::application::read_models::{
    BuildReport, IssueView, PriceView, ReportMetadataView, SelectionView, SlotView,
};
use crate::build_validation::domain::{IssueKind, Severity};
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;
use serde::Serialize;

/// JSON document structure
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Report<'a> {
    metadata: Metadata<'a>,
    slots: Vec<Slot<'a>>,
    compatibility: Compatibility<'a>,
    price: Price,
    can_confirm: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Metadata<'a> {
    timestamp: &'a str,
    tool_name: &'a str,
    tool_version: &'a str,
    report_id: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Slot<'a> {
    category_id: &'a str,
    category_name: &'a str,
    /// `null` for an empty slot
    component: Option<Selection<'a>>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Selection<'a> {
    id: &'a str,
    brand: &'a str,
    name: &'a str,
    price: u64,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    highlights: Vec<Highlight<'a>>,
}

#[derive(Debug, Serialize)]
struct Highlight<'a> {
    label: &'a str,
    value: &'a str,
}

#[derive(Debug, Serialize)]
struct Compatibility<'a> {
    compatible: bool,
    errors: Vec<Issue<'a>>,
    warnings: Vec<Issue<'a>>,
}

#[derive(Debug, Serialize)]
struct Issue<'a> {
    severity: Severity,
    kind: IssueKind,
    message: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Price {
    subtotal: u64,
    assembly_fee: u64,
    assembly_fee_percent: f64,
    grand_total: u64,
}

/// JsonFormatter adapter for machine-readable build reports
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for JsonFormatter {
    fn format(&self, report: &BuildReport) -> Result<String> {
        let document = Report {
            metadata: self.build_metadata(&report.metadata),
            slots: report.slots.iter().map(|s| self.build_slot(s)).collect(),
            compatibility: Compatibility {
                compatible: report.is_compatible(),
                errors: self.build_issues(&report.errors),
                warnings: self.build_issues(&report.warnings),
            },
            price: self.build_price(&report.price),
            can_confirm: report.can_confirm,
        };

        serde_json::to_string_pretty(&document).map_err(Into::into)
    }
}

impl JsonFormatter {
    fn build_metadata<'a>(&self, metadata: &'a ReportMetadataView) -> Metadata<'a> {
        Metadata {
            timestamp: &metadata.timestamp,
            tool_name: &metadata.tool_name,
            tool_version: &metadata.tool_version,
            report_id: &metadata.report_id,
        }
    }

    fn build_slot<'a>(&self, slot: &'a SlotView) -> Slot<'a> {
        Slot {
            category_id: &slot.category_id,
            category_name: &slot.category_name,
            component: slot.selection.as_ref().map(|s| self.build_selection(s)),
        }
    }

    fn build_selection<'a>(&self, selection: &'a SelectionView) -> Selection<'a> {
        Selection {
            id: &selection.component_id,
            brand: &selection.brand,
            name: &selection.name,
            price: selection.price,
            highlights: selection
                .highlights
                .iter()
                .map(|(label, value)| Highlight { label, value })
                .collect(),
        }
    }

    fn build_issues<'a>(&self, issues: &'a [IssueView]) -> Vec<Issue<'a>> {
        issues
            .iter()
            .map(|issue| Issue {
                severity: issue.severity,
                kind: issue.kind,
                message: &issue.message,
            })
            .collect()
    }

    fn build_price(&self, price: &PriceView) -> Price {
        Price {
            subtotal: price.subtotal,
            assembly_fee: price.assembly_fee,
            assembly_fee_percent: price.assembly_fee_percent,
            grand_total: price.grand_total,
        }
    }
}
