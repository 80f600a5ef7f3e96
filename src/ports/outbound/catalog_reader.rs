use crate::build_validation::domain::Catalog;
use crate::shared::Result;
use std::path::Path;

/// CatalogReader port for loading the component catalog
///
/// The catalog is read once per run and treated as immutable afterwards.
pub trait CatalogReader {
    /// Reads and validates the catalog stored at `path`
    ///
    /// # Errors
    /// Returns an error if:
    /// - The catalog file does not exist or cannot be read
    /// - The content is not a valid catalog document
    /// - Category or component ids are duplicated, or a component refers
    ///   to an undeclared category
    fn read_catalog(&self, path: &Path) -> Result<Catalog>;
}
