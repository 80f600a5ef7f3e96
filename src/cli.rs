use clap::Parser;
use pc_builder::application::dto::OutputFormat;
use std::path::PathBuf;

/// Check a custom PC build for compatibility problems and price it
#[derive(Parser, Debug)]
#[command(name = "pc-builder")]
#[command(version)]
#[command(
    about = "Check a custom PC build for compatibility problems and price it",
    long_about = None
)]
pub struct Args {
    /// Path to the component catalog (JSON). Defaults to the config file's
    /// `catalog`, then to ./catalog.json
    #[arg(short, long, value_name = "PATH")]
    pub catalog: Option<PathBuf>,

    /// Path to the build selection (TOML with a [components] table).
    /// Without it an empty build is validated
    #[arg(short, long, value_name = "PATH")]
    pub build: Option<PathBuf>,

    /// Output format: markdown or json
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Path to a config file (defaults to ./pc-builder.config.yml if present)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// List the catalog components available for a category and exit
    #[arg(long, value_name = "CATEGORY")]
    pub list: Option<String>,

    /// Exit with 0 even when the build has compatibility errors
    #[arg(long)]
    pub allow_incompatible: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
