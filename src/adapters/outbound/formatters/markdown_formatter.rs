use crate::application::read_models::{BuildReport, IssueView, PriceView, SlotView};
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;

/// Markdown table header for the build slots
const TABLE_HEADER: &str = "| Category | Component | Key specs | Price |\n";

/// Markdown table separator line
const TABLE_SEPARATOR: &str = "|----------|-----------|-----------|------:|\n";

/// MarkdownFormatter adapter for human-readable build reports
///
/// Renders the slot table, the compatibility section, the price breakdown
/// and whether the build can be confirmed.
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Escapes pipe characters and newlines for safe Markdown table rendering
    fn escape_markdown_table_cell(text: &str) -> String {
        text.replace('|', "\\|").replace('\n', " ")
    }

    fn pluralize(count: usize, singular: &str, plural: &str) -> String {
        format!("{} {}", count, if count == 1 { singular } else { plural })
    }
}

/// Helper methods for rendering sections
impl MarkdownFormatter {
    fn render_header(&self, output: &mut String, report: &BuildReport) {
        output.push_str("# PC Build Report\n\n");
        output.push_str(&format!(
            "Generated by {} {} at {}  \nReport ID: `{}`\n\n",
            report.metadata.tool_name,
            report.metadata.tool_version,
            report.metadata.timestamp,
            report.metadata.report_id
        ));
    }

    fn render_slots(&self, output: &mut String, slots: &[SlotView], selected: usize) {
        output.push_str("## Components\n\n");
        output.push_str(&format!(
            "{} of {} selected.\n\n",
            selected,
            Self::pluralize(slots.len(), "slot", "slots")
        ));
        output.push_str(TABLE_HEADER);
        output.push_str(TABLE_SEPARATOR);

        for slot in slots {
            self.render_slot_row(output, slot);
        }
        output.push('\n');
    }

    fn render_slot_row(&self, output: &mut String, slot: &SlotView) {
        let category = Self::escape_markdown_table_cell(&slot.category_name);

        match &slot.selection {
            Some(selection) => {
                let specs = selection
                    .highlights
                    .iter()
                    .map(|(label, value)| format!("{}: {}", label, value))
                    .collect::<Vec<_>>()
                    .join(", ");

                output.push_str(&format!(
                    "| {} | {} {} | {} | {} |\n",
                    category,
                    Self::escape_markdown_table_cell(&selection.brand),
                    Self::escape_markdown_table_cell(&selection.name),
                    Self::escape_markdown_table_cell(&specs),
                    selection.price
                ));
            }
            None => {
                output.push_str(&format!("| {} | *Not selected* |  |  |\n", category));
            }
        }
    }

    fn render_compatibility(&self, output: &mut String, report: &BuildReport) {
        output.push_str("## Compatibility\n\n");

        if report.is_compatible() {
            output.push_str("✅ All components are compatible!\n\n");
            return;
        }

        if !report.errors.is_empty() {
            output.push_str(&format!(
                "### ❌ Errors ({})\n\n",
                report.errors.len()
            ));
            self.render_issue_list(output, &report.errors);
        }

        if !report.warnings.is_empty() {
            output.push_str(&format!(
                "### ⚠️ Warnings ({})\n\n",
                report.warnings.len()
            ));
            self.render_issue_list(output, &report.warnings);
        }
    }

    fn render_issue_list(&self, output: &mut String, issues: &[IssueView]) {
        for issue in issues {
            output.push_str(&format!("- {} (`{}`)\n", issue.message, issue.kind));
        }
        output.push('\n');
    }

    fn render_price(&self, output: &mut String, price: &PriceView) {
        output.push_str("## Price\n\n");
        output.push_str("| Item | Amount |\n");
        output.push_str("|------|-------:|\n");
        output.push_str(&format!("| Components | {} |\n", price.subtotal));
        output.push_str(&format!(
            "| Professional assembly ({}%) | {} |\n",
            price.assembly_fee_percent, price.assembly_fee
        ));
        output.push_str(&format!(
            "| **Total with assembly** | **{}** |\n\n",
            price.grand_total
        ));
    }

    fn render_status(&self, output: &mut String, report: &BuildReport) {
        output.push_str("## Status\n\n");
        if report.can_confirm {
            output.push_str("✅ This build can be confirmed.\n");
        } else {
            output.push_str(&format!(
                "❌ This build cannot be confirmed until {} resolved.\n",
                Self::pluralize(report.errors.len(), "error is", "errors are")
            ));
        }
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for MarkdownFormatter {
    fn format(&self, report: &BuildReport) -> Result<String> {
        let mut output = String::new();

        self.render_header(&mut output, report);
        self.render_slots(&mut output, &report.slots, report.selected_count());
        self.render_compatibility(&mut output, report);
        self.render_price(&mut output, &report.price);
        self.render_status(&mut output, report);

        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::read_models::{ReportMetadataView, SelectionView};
    use crate::build_validation::domain::{IssueKind, Severity};

    fn create_test_report() -> BuildReport {
        BuildReport {
            metadata: ReportMetadataView {
                timestamp: "2024-01-01T00:00:00Z".to_string(),
                tool_name: "pc-builder".to_string(),
                tool_version: "0.1.0".to_string(),
                report_id: "urn:uuid:test-123".to_string(),
            },
            slots: vec![
                SlotView {
                    category_id: "cpu".to_string(),
                    category_name: "Processor".to_string(),
                    selection: Some(SelectionView {
                        component_id: "ryzen-7-7700x".to_string(),
                        brand: "AMD".to_string(),
                        name: "Ryzen 7 7700X".to_string(),
                        price: 50000,
                        highlights: vec![
                            ("Boost".to_string(), "5.4 GHz".to_string()),
                            ("Cores".to_string(), "8".to_string()),
                        ],
                    }),
                },
                SlotView {
                    category_id: "gpu".to_string(),
                    category_name: "Graphics Card".to_string(),
                    selection: None,
                },
            ],
            errors: vec![],
            warnings: vec![],
            price: PriceView {
                subtotal: 50000,
                assembly_fee: 3250,
                assembly_fee_percent: 6.5,
                grand_total: 53250,
            },
            can_confirm: true,
        }
    }

    #[test]
    fn test_escape_markdown_table_cell() {
        let escaped = MarkdownFormatter::escape_markdown_table_cell("A | B\nC");
        assert_eq!(escaped, "A \\| B C");
    }

    #[test]
    fn test_format_compatible_build() {
        let markdown = MarkdownFormatter::new()
            .format(&create_test_report())
            .unwrap();

        assert!(markdown.contains("# PC Build Report"));
        assert!(markdown.contains("Report ID: `urn:uuid:test-123`"));
        assert!(markdown.contains("1 of 2 slots selected."));
        assert!(markdown.contains("| Processor | AMD Ryzen 7 7700X | Boost: 5.4 GHz, Cores: 8 | 50000 |"));
        assert!(markdown.contains("| Graphics Card | *Not selected* |"));
        assert!(markdown.contains("✅ All components are compatible!"));
        assert!(markdown.contains("✅ This build can be confirmed."));
    }

    #[test]
    fn test_format_price_section() {
        let markdown = MarkdownFormatter::new()
            .format(&create_test_report())
            .unwrap();

        assert!(markdown.contains("| Components | 50000 |"));
        assert!(markdown.contains("| Professional assembly (6.5%) | 3250 |"));
        assert!(markdown.contains("| **Total with assembly** | **53250** |"));
    }

    #[test]
    fn test_format_with_issues() {
        let mut report = create_test_report();
        report.errors.push(IssueView {
            severity: Severity::Error,
            kind: IssueKind::SocketMismatch,
            message: "Socket mismatch: processor uses AM5, motherboard uses LGA1700".to_string(),
        });
        report.warnings.push(IssueView {
            severity: Severity::Warning,
            kind: IssueKind::MarginalPower,
            message: "Power supply is at its limit. 650W recommended for headroom".to_string(),
        });
        report.can_confirm = false;

        let markdown = MarkdownFormatter::new().format(&report).unwrap();

        assert!(!markdown.contains("All components are compatible"));
        assert!(markdown.contains("### ❌ Errors (1)"));
        assert!(markdown.contains(
            "- Socket mismatch: processor uses AM5, motherboard uses LGA1700 (`socket-mismatch`)"
        ));
        assert!(markdown.contains("### ⚠️ Warnings (1)"));
        assert!(markdown.contains("(`marginal-power`)"));
        assert!(markdown.contains("cannot be confirmed until 1 error is resolved"));

        let errors_at = markdown.find("### ❌ Errors").unwrap();
        let warnings_at = markdown.find("### ⚠️ Warnings").unwrap();
        assert!(errors_at < warnings_at);
    }

    #[test]
    fn test_format_warnings_only_still_confirmable() {
        let mut report = create_test_report();
        report.warnings.push(IssueView {
            severity: Severity::Warning,
            kind: IssueKind::MissingMotherboard,
            message: "Select a motherboard for the processor".to_string(),
        });

        let markdown = MarkdownFormatter::new().format(&report).unwrap();

        assert!(!markdown.contains("### ❌ Errors"));
        assert!(markdown.contains("### ⚠️ Warnings (1)"));
        assert!(markdown.contains("✅ This build can be confirmed."));
    }
}
