//! Read models for CQRS-lite pattern
//!
//! This module contains view-optimized structs that provide
//! a denormalized representation of domain data for queries.

pub mod build_report;
pub mod build_report_builder;

pub use build_report::{
    BuildReport, IssueView, PriceView, ReportMetadataView, SelectionView, SlotView,
};
pub use build_report_builder::BuildReportBuilder;
