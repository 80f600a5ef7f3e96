use std::path::Path;
use pc_builder::prelude::*;

/// Mock CatalogReader for testing
pub struct MockCatalogReader {
    pub categories: Vec<Category>,
    pub components: Vec<Component>,
    pub should_fail: bool,
}

impl MockCatalogReader {
    pub fn new(categories: Vec<Category>, components: Vec<Component>) -> Self {
        Self {
            categories,
            components,
            should_fail: false,
        }
    }

    pub fn with_failure() -> Self {
        Self {
            categories: Vec::new(),
            components: Vec::new(),
            should_fail: true,
        }
    }
}

impl CatalogReader for MockCatalogReader {
    fn read_catalog(&self, _path: &Path) -> Result<Catalog> {
        if self.should_fail {
            anyhow::bail!("Mock catalog read failure");
        }
        Catalog::new(self.categories.clone(), self.components.clone())
    }
}
