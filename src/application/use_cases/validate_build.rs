use crate::application::dto::{ValidationRequest, ValidationResponse};
use crate::build_validation::domain::{BuildState, Catalog};
use crate::build_validation::services::{
    CompatibilityEvaluator, PricingCalculator, ReportMetadataGenerator,
};
use crate::ports::outbound::{BuildReader, BuildSelection, CatalogReader, ProgressReporter};
use crate::shared::error::BuildError;
use crate::shared::Result;

/// ValidateBuildUseCase - Core use case for checking and pricing a build
///
/// Orchestrates catalog loading, applying the user's selection to an empty
/// build, compatibility evaluation and pricing, using generic dependency
/// injection for all infrastructure dependencies.
///
/// # Type Parameters
/// * `CR` - CatalogReader implementation
/// * `BR` - BuildReader implementation
/// * `PR` - ProgressReporter implementation
pub struct ValidateBuildUseCase<CR, BR, PR> {
    catalog_reader: CR,
    build_reader: BR,
    progress_reporter: PR,
    evaluator: CompatibilityEvaluator,
    pricing: PricingCalculator,
}

impl<CR, BR, PR> ValidateBuildUseCase<CR, BR, PR>
where
    CR: CatalogReader,
    BR: BuildReader,
    PR: ProgressReporter,
{
    /// Creates a new ValidateBuildUseCase with injected dependencies
    pub fn new(catalog_reader: CR, build_reader: BR, progress_reporter: PR) -> Self {
        Self {
            catalog_reader,
            build_reader,
            progress_reporter,
            evaluator: CompatibilityEvaluator::new(),
            pricing: PricingCalculator::new(),
        }
    }

    /// Replaces the pricing calculator (e.g. a different assembly fee rate)
    pub fn with_pricing(mut self, pricing: PricingCalculator) -> Self {
        self.pricing = pricing;
        self
    }

    /// Executes the build validation use case
    ///
    /// # Errors
    /// Returns an error if the catalog or build file cannot be read, or if
    /// the selection names an unknown category or component. Compatibility
    /// problems are not errors; they are part of the response.
    pub fn execute(&self, request: ValidationRequest) -> Result<ValidationResponse> {
        // Step 1: Load catalog
        let catalog = self.load_catalog(&request)?;

        // Step 2: Apply the selection to an empty build
        let selection = self.read_selection(&request)?;
        let build = self.apply_selection(&catalog, &selection)?;

        // Step 3: Evaluate and price
        let compatibility = self.evaluator.check(&build);
        let price = self.pricing.quote(&build);

        self.report_outcome(compatibility.errors.len(), compatibility.warnings.len());

        Ok(ValidationResponse::new(
            build,
            compatibility,
            price,
            self.pricing.fee_percent(),
            ReportMetadataGenerator::generate_default_metadata(),
        ))
    }

    /// Loads the catalog referenced by the request
    pub fn load_catalog(&self, request: &ValidationRequest) -> Result<Catalog> {
        self.progress_reporter.report(&format!(
            "📖 Loading catalog from: {}",
            request.catalog_path.display()
        ));

        let catalog = self.catalog_reader.read_catalog(&request.catalog_path)?;

        self.progress_reporter.report(&format!(
            "✅ Loaded {} component(s) in {} categor{}",
            catalog.component_count(),
            catalog.categories().len(),
            if catalog.categories().len() == 1 { "y" } else { "ies" }
        ));

        Ok(catalog)
    }

    fn read_selection(&self, request: &ValidationRequest) -> Result<BuildSelection> {
        match &request.build_path {
            Some(path) => {
                self.progress_reporter
                    .report(&format!("📖 Loading build from: {}", path.display()));
                self.build_reader.read_build(path)
            }
            None => {
                self.progress_reporter
                    .report("ℹ️  No build file given, validating an empty build");
                Ok(BuildSelection::new())
            }
        }
    }

    /// Places each selected component into its slot
    ///
    /// # Errors
    /// - `BuildError::InvalidCategory` for a category the catalog does not
    ///   declare, or a component placed under the wrong category
    /// - `BuildError::UnknownComponent` for a component id missing from the catalog
    fn apply_selection(&self, catalog: &Catalog, selection: &BuildSelection) -> Result<BuildState> {
        let mut build = catalog.empty_build()?;

        for (category, component_id) in selection {
            let component = catalog.component(component_id).ok_or_else(|| {
                BuildError::UnknownComponent {
                    category: category.clone(),
                    component_id: component_id.clone(),
                }
            })?;
            build.set(category, Some(component.clone()))?;
        }

        let selected = build.selected().count();
        self.progress_reporter.report(&format!(
            "🧩 Selected {} of {} slot(s)",
            selected,
            build.slots().len()
        ));

        Ok(build)
    }

    fn report_outcome(&self, errors: usize, warnings: usize) {
        if errors > 0 {
            self.progress_reporter.report_error(&format!(
                "❌ Found {} compatibility error(s) and {} warning(s)",
                errors, warnings
            ));
        } else if warnings > 0 {
            self.progress_reporter.report_completion(&format!(
                "⚠️  No compatibility errors, {} warning(s)",
                warnings
            ));
        } else {
            self.progress_reporter
                .report_completion("✅ All components are compatible");
        }
    }
}
