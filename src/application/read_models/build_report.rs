//! Build report read model
//!
//! A flattened, presentation-ready view of one validation run, shared by
//! every report formatter.

use crate::build_validation::domain::{IssueKind, Severity};

/// Main read model for a validated build
#[derive(Debug, Clone)]
pub struct BuildReport {
    pub metadata: ReportMetadataView,
    /// One entry per catalog category, in catalog order
    pub slots: Vec<SlotView>,
    pub errors: Vec<IssueView>,
    pub warnings: Vec<IssueView>,
    pub price: PriceView,
    /// False when any error-severity issue is present
    pub can_confirm: bool,
}

impl BuildReport {
    pub fn selected_count(&self) -> usize {
        self.slots.iter().filter(|s| s.selection.is_some()).count()
    }

    pub fn is_compatible(&self) -> bool {
        self.errors.is_empty() && self.warnings.is_empty()
    }
}

/// View representation of report metadata
#[derive(Debug, Clone)]
pub struct ReportMetadataView {
    pub timestamp: String,
    pub tool_name: String,
    pub tool_version: String,
    pub report_id: String,
}

/// View representation of one category slot
#[derive(Debug, Clone)]
pub struct SlotView {
    pub category_id: String,
    pub category_name: String,
    pub selection: Option<SelectionView>,
}

/// View representation of a selected component
#[derive(Debug, Clone)]
pub struct SelectionView {
    pub component_id: String,
    pub brand: String,
    pub name: String,
    pub price: u64,
    /// The first few spec labels, for a one-line summary
    pub highlights: Vec<(String, String)>,
}

/// View representation of a compatibility issue
#[derive(Debug, Clone)]
pub struct IssueView {
    pub severity: Severity,
    pub kind: IssueKind,
    pub message: String,
}

/// View representation of the price breakdown
#[derive(Debug, Clone)]
pub struct PriceView {
    pub subtotal: u64,
    pub assembly_fee: u64,
    pub assembly_fee_percent: f64,
    pub grand_total: u64,
}
