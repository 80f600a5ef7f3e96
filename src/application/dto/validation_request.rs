use std::path::PathBuf;

/// ValidationRequest - Internal request DTO for the build validation use case
#[derive(Debug, Clone)]
pub struct ValidationRequest {
    /// Path to the component catalog (JSON)
    pub catalog_path: PathBuf,
    /// Path to the build selection (TOML); `None` validates an empty build
    pub build_path: Option<PathBuf>,
}

impl ValidationRequest {
    pub fn new(catalog_path: PathBuf, build_path: Option<PathBuf>) -> Self {
        Self {
            catalog_path,
            build_path,
        }
    }
}
