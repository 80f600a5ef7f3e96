mod cli;

use cli::Args;
use pc_builder::adapters::outbound::console::StderrProgressReporter;
use pc_builder::adapters::outbound::filesystem::FileSystemReader;
use pc_builder::application::dto::{OutputFormat, ValidationRequest};
use pc_builder::application::factories::{FormatterFactory, PresenterFactory, PresenterType};
use pc_builder::application::read_models::BuildReportBuilder;
use pc_builder::application::use_cases::ValidateBuildUseCase;
use pc_builder::build_validation::domain::Catalog;
use pc_builder::config::{self, ConfigFile};
use pc_builder::shared::error::{BuildError, ExitCode};
use pc_builder::shared::Result;
use std::path::PathBuf;
use std::process;

const DEFAULT_CATALOG: &str = "catalog.json";
const LISTING_SPEC_COUNT: usize = 3;

fn main() {
    match run() {
        Ok(exit_code) => process::exit(exit_code.as_i32()),
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            // Display error chain
            for cause in e.chain().skip(1) {
                eprintln!("\nCaused by: {}", cause);
            }

            eprintln!();
            process::exit(ExitCode::ApplicationError.as_i32());
        }
    }
}

/// Effective settings after merging CLI arguments over the config file
#[derive(Debug, PartialEq)]
struct Settings {
    catalog: PathBuf,
    format: OutputFormat,
    allow_incompatible: bool,
}

fn resolve_settings(args: &Args, config: Option<&ConfigFile>) -> Settings {
    let catalog = args
        .catalog
        .clone()
        .or_else(|| config.and_then(|c| c.catalog.clone()))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CATALOG));

    let format = args
        .format
        .or_else(|| config.and_then(ConfigFile::output_format))
        .unwrap_or_default();

    let allow_incompatible = args.allow_incompatible
        || config
            .and_then(|c| c.allow_incompatible)
            .unwrap_or(false);

    Settings {
        catalog,
        format,
        allow_incompatible,
    }
}

fn load_config(args: &Args) -> Result<Option<ConfigFile>> {
    match &args.config {
        Some(path) => config::load_config_from_path(path).map(Some),
        None => {
            let dir = std::env::current_dir()?;
            let discovered = config::discover_config(&dir)?;
            if discovered.is_some() {
                eprintln!(
                    "📄 Auto-discovered config file: {}",
                    dir.join(config::CONFIG_FILENAME).display()
                );
            }
            Ok(discovered)
        }
    }
}

fn run() -> Result<ExitCode> {
    // Parse command-line arguments
    let args = Args::parse_args();

    let config = load_config(&args)?;
    let settings = resolve_settings(&args, config.as_ref());

    // Create adapters (Dependency Injection)
    let catalog_reader = FileSystemReader::new();
    let build_reader = FileSystemReader::new();
    let progress_reporter = StderrProgressReporter::new();

    let use_case = ValidateBuildUseCase::new(catalog_reader, build_reader, progress_reporter);
    let request = ValidationRequest::new(settings.catalog.clone(), args.build.clone());
    let presenter = PresenterFactory::create(PresenterType::from_output(args.output.clone()));

    if let Some(category) = &args.list {
        let catalog = use_case.load_catalog(&request)?;
        presenter.present(&render_listing(&catalog, category)?)?;
        return Ok(ExitCode::Success);
    }

    // Execute use case
    let response = use_case.execute(request)?;
    let report = BuildReportBuilder::build(&response);

    eprintln!("{}", FormatterFactory::progress_message(settings.format));
    let formatter = FormatterFactory::create(settings.format);
    presenter.present(&formatter.format(&report)?)?;

    if report.can_confirm || settings.allow_incompatible {
        Ok(ExitCode::Success)
    } else {
        Ok(ExitCode::IncompatibleBuild)
    }
}

/// Plain-text listing of the components offered for one category
fn render_listing(catalog: &Catalog, category: &str) -> Result<String> {
    let Some(declared) = catalog.category(category) else {
        let known: Vec<String> = catalog
            .categories()
            .iter()
            .map(|c| c.id().to_string())
            .collect();
        return Err(BuildError::InvalidCategory {
            category: category.to_string(),
            reason: format!("not in the catalog (available: {})", known.join(", ")),
        }
        .into());
    };

    let components: Vec<_> = catalog.components_in(category).collect();
    let mut output = format!(
        "{} ({}): {} component(s)\n\n",
        declared.name(),
        declared.id(),
        components.len()
    );

    for component in components {
        let specs: Vec<String> = component
            .specs()
            .iter()
            .take(LISTING_SPEC_COUNT)
            .map(|(label, value)| format!("{}: {}", label, value))
            .collect();
        let row = format!(
            "  {:<24} {:<40} {:>10}  {}",
            component.id().as_str(),
            format!("{} {}", component.brand(), component.name()),
            component.price(),
            specs.join(", ")
        );
        output.push_str(row.trim_end());
        output.push('\n');
    }

    Ok(output)
}
