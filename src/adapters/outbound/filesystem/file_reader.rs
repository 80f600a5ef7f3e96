use crate::build_validation::domain::{Catalog, Category, Component};
use crate::ports::outbound::{BuildReader, BuildSelection, CatalogReader};
use crate::shared::error::BuildError;
use crate::shared::Result;
use anyhow::Context;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Maximum file size for catalog and build files (10 MB)
const MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// On-disk catalog layout (JSON)
#[derive(Debug, Deserialize)]
struct CatalogDocument {
    categories: Vec<Category>,
    #[serde(default)]
    components: Vec<Component>,
}

/// On-disk build selection layout (TOML)
#[derive(Debug, Deserialize)]
struct BuildDocument {
    components: BuildSelection,
}

/// FileSystemReader adapter for reading files from the file system
///
/// Implements both CatalogReader (JSON catalogs) and BuildReader
/// (TOML build selections).
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl FileSystemReader {
    /// Safely read a file with security checks:
    /// - Reject symbolic links
    /// - Check file size limits
    /// - Validate file is a regular file
    fn safe_read_file(&self, path: &Path, file_type: &str) -> Result<String> {
        let metadata = fs::symlink_metadata(path).map_err(|e| BuildError::FileReadError {
            path: path.to_path_buf(),
            details: format!("Failed to read {} metadata: {}", file_type, e),
        })?;

        if metadata.is_symlink() {
            return Err(BuildError::SecurityError {
                path: path.to_path_buf(),
                reason: format!("{} is a symbolic link", file_type),
                hint: "Point to the target file directly; symbolic links are not followed"
                    .to_string(),
            }
            .into());
        }

        if !metadata.is_file() {
            anyhow::bail!("{} is not a regular file", path.display());
        }

        let file_size = metadata.len();
        if file_size > MAX_FILE_SIZE {
            return Err(BuildError::SecurityError {
                path: path.to_path_buf(),
                reason: format!(
                    "{} is too large ({} bytes). Maximum allowed size is {} bytes.",
                    file_type, file_size, MAX_FILE_SIZE
                ),
                hint: "Split the file or remove unused entries".to_string(),
            }
            .into());
        }

        fs::read_to_string(path).map_err(|e| {
            BuildError::FileReadError {
                path: path.to_path_buf(),
                details: e.to_string(),
            }
            .into()
        })
    }
}

impl CatalogReader for FileSystemReader {
    fn read_catalog(&self, path: &Path) -> Result<Catalog> {
        if !path.exists() {
            return Err(BuildError::CatalogNotFound {
                path: path.to_path_buf(),
            }
            .into());
        }

        let content = self.safe_read_file(path, "catalog")?;

        let document: CatalogDocument =
            serde_json::from_str(&content).map_err(|e| BuildError::CatalogParseError {
                path: path.to_path_buf(),
                details: e.to_string(),
            })?;

        Catalog::new(document.categories, document.components)
            .with_context(|| format!("Invalid catalog: {}", path.display()))
    }
}

impl BuildReader for FileSystemReader {
    fn read_build(&self, path: &Path) -> Result<BuildSelection> {
        if !path.exists() {
            return Err(BuildError::BuildFileNotFound {
                path: path.to_path_buf(),
            }
            .into());
        }

        let content = self.safe_read_file(path, "build file")?;

        let document: BuildDocument =
            toml::from_str(&content).map_err(|e| BuildError::BuildFileParseError {
                path: path.to_path_buf(),
                details: e.to_string(),
            })?;

        Ok(document.components)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const CATALOG: &str = r#"{
        "categories": [
            {"id": "cpu", "name": "Processor"},
            {"id": "psu", "name": "Power Supply"}
        ],
        "components": [
            {
                "id": "ryzen-5-7600",
                "category": "cpu",
                "brand": "AMD",
                "name": "Ryzen 5 7600",
                "price": 21990,
                "specs": {"Cores": "6"},
                "socket": "AM5",
                "tdp": 65
            },
            {
                "id": "rm750e",
                "category": "psu",
                "brand": "Corsair",
                "name": "RM750e",
                "price": 10990,
                "wattage": 750,
                "psuConnectors": ["16-pin"]
            }
        ]
    }"#;

    #[test]
    fn test_read_catalog_success() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("catalog.json");
        fs::write(&path, CATALOG).unwrap();

        let catalog = FileSystemReader::new().read_catalog(&path).unwrap();

        assert_eq!(catalog.categories().len(), 2);
        assert_eq!(catalog.component_count(), 2);
        let cpu = catalog.component("ryzen-5-7600").unwrap();
        assert_eq!(cpu.attributes().socket.as_deref(), Some("AM5"));
        assert_eq!(cpu.attributes().tdp, Some(65));
        let psu = catalog.component("rm750e").unwrap();
        assert!(psu.attributes().has_connector("16-pin"));
    }

    #[test]
    fn test_read_catalog_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let result = FileSystemReader::new().read_catalog(&temp_dir.path().join("missing.json"));

        let err = result.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<BuildError>(),
            Some(BuildError::CatalogNotFound { .. })
        ));
    }

    #[test]
    fn test_read_catalog_invalid_json() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("catalog.json");
        fs::write(&path, "{ not json").unwrap();

        let err_string = format!("{}", FileSystemReader::new().read_catalog(&path).unwrap_err());
        assert!(err_string.contains("Failed to parse catalog file"));
    }

    #[test]
    fn test_read_catalog_undeclared_category() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("catalog.json");
        fs::write(
            &path,
            r#"{
                "categories": [{"id": "cpu", "name": "Processor"}],
                "components": [
                    {"id": "case-1", "category": "case", "brand": "NZXT", "name": "H5", "price": 8990}
                ]
            }"#,
        )
        .unwrap();

        let err = FileSystemReader::new().read_catalog(&path).unwrap_err();
        let chain = format!("{:#}", err);
        assert!(chain.contains("Invalid catalog"));
        assert!(chain.contains("undeclared category 'case'"));
    }

    #[test]
    fn test_read_catalog_rejects_directory() {
        let temp_dir = TempDir::new().unwrap();
        let result = FileSystemReader::new().read_catalog(temp_dir.path());
        let err_string = format!("{}", result.unwrap_err());
        assert!(err_string.contains("not a regular file"));
    }

    #[cfg(unix)]
    #[test]
    fn test_read_catalog_rejects_symlink() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("catalog.json");
        fs::write(&target, CATALOG).unwrap();
        let link = temp_dir.path().join("link.json");
        std::os::unix::fs::symlink(&target, &link).unwrap();

        let err = FileSystemReader::new().read_catalog(&link).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<BuildError>(),
            Some(BuildError::SecurityError { .. })
        ));
    }

    #[test]
    fn test_read_build_success() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("build.toml");
        fs::write(
            &path,
            r#"
[components]
cpu = "ryzen-5-7600"
psu = "rm750e"
"#,
        )
        .unwrap();

        let selection = FileSystemReader::new().read_build(&path).unwrap();

        assert_eq!(selection.len(), 2);
        assert_eq!(selection.get("cpu").map(String::as_str), Some("ryzen-5-7600"));
        assert_eq!(selection.get("psu").map(String::as_str), Some("rm750e"));
    }

    #[test]
    fn test_read_build_empty_table() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("build.toml");
        fs::write(&path, "[components]\n").unwrap();

        let selection = FileSystemReader::new().read_build(&path).unwrap();
        assert!(selection.is_empty());
    }

    #[test]
    fn test_read_build_missing_table() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("build.toml");
        fs::write(&path, "cpu = \"ryzen-5-7600\"\n").unwrap();

        let err_string = format!("{}", FileSystemReader::new().read_build(&path).unwrap_err());
        assert!(err_string.contains("Failed to parse build file"));
    }

    #[test]
    fn test_read_build_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let err = FileSystemReader::new()
            .read_build(&temp_dir.path().join("build.toml"))
            .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<BuildError>(),
            Some(BuildError::BuildFileNotFound { .. })
        ));
    }
}
