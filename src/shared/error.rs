use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes let scripts distinguish an incompatible build from a
/// failure to run the check at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - the build has no compatibility errors
    Success = 0,
    /// The build has at least one error-severity compatibility issue
    IncompatibleBuild = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (missing catalog, malformed build file, I/O error, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::IncompatibleBuild => write!(f, "Incompatible Build (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for build validation.
///
/// Structural problems (a component placed in the wrong slot, an id the
/// catalog does not know) land here. Compatibility problems never do; those
/// are reported as `CompatibilityIssue` values.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Invalid category: {category}\nReason: {reason}")]
    InvalidCategory { category: String, reason: String },

    #[error("Unknown component '{component_id}' selected for category '{category}'\n\n💡 Hint: Use --list {category} to see the components available in the catalog")]
    UnknownComponent {
        category: String,
        component_id: String,
    },

    #[error("Catalog file not found: {path}\n\n💡 Hint: Specify a catalog with --catalog or the 'catalog' key of the config file")]
    CatalogNotFound { path: PathBuf },

    #[error("Failed to parse catalog file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the catalog is valid JSON with 'categories' and 'components' arrays")]
    CatalogParseError { path: PathBuf, details: String },

    #[error("Build file not found: {path}\n\n💡 Hint: Specify a build selection file with --build")]
    BuildFileNotFound { path: PathBuf },

    #[error("Failed to parse build file: {path}\nDetails: {details}\n\n💡 Hint: The build file must contain a [components] table mapping category ids to component ids")]
    BuildFileParseError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    /// Validation error for catalog and selection invariants
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Security violation: {path}\nReason: {reason}\n\n💡 Hint: {hint}")]
    SecurityError {
        path: PathBuf,
        reason: String,
        hint: String,
    },
}
