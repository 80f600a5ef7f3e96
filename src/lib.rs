//! pc-builder - compatibility checking and pricing for custom PC builds
//!
//! This library validates a selection of components (one per category) against
//! a product catalog, reports compatibility problems by severity and prices the
//! build including a professional assembly fee. It follows hexagonal
//! architecture and Domain-Driven Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`build_validation`): Build state, compatibility rules and pricing
//! - **Application Layer** (`application`): Use cases, DTOs and read models
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use pc_builder::prelude::*;
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<()> {
//! let use_case = ValidateBuildUseCase::new(
//!     FileSystemReader::new(),
//!     FileSystemReader::new(),
//!     StderrProgressReporter::new(),
//! );
//!
//! let request = ValidationRequest::new(
//!     PathBuf::from("catalog.json"),
//!     Some(PathBuf::from("build.toml")),
//! );
//! let response = use_case.execute(request)?;
//!
//! let report = BuildReportBuilder::build(&response);
//! let output = MarkdownFormatter::new().format(&report)?;
//! println!("{}", output);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod build_validation;
pub mod config;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemReader, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{JsonFormatter, MarkdownFormatter};
    pub use crate::application::dto::{OutputFormat, ValidationRequest, ValidationResponse};
    pub use crate::application::read_models::{BuildReport, BuildReportBuilder};
    pub use crate::application::use_cases::ValidateBuildUseCase;
    pub use crate::build_validation::domain::{
        BuildState, Catalog, Category, CompatibilityIssue, Component, IssueKind, PriceBreakdown,
        Severity, TechnicalAttributes,
    };
    pub use crate::build_validation::policies::{PowerAssessment, PowerBudget};
    pub use crate::build_validation::services::{
        CompatibilityCheckResult, CompatibilityEvaluator, PricingCalculator,
    };
    pub use crate::ports::outbound::{
        BuildReader, BuildSelection, CatalogReader, OutputPresenter, ProgressReporter,
        ReportFormatter,
    };
    pub use crate::shared::Result;
}
