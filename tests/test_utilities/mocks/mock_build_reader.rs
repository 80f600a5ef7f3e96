use std::path::Path;
use pc_builder::prelude::*;

/// Mock BuildReader for testing
pub struct MockBuildReader {
    pub selection: BuildSelection,
    pub should_fail: bool,
}

impl MockBuildReader {
    pub fn new(entries: &[(&str, &str)]) -> Self {
        Self {
            selection: entries
                .iter()
                .map(|(category, id)| (category.to_string(), id.to_string()))
                .collect(),
            should_fail: false,
        }
    }

    pub fn with_failure() -> Self {
        Self {
            selection: BuildSelection::new(),
            should_fail: true,
        }
    }
}

impl BuildReader for MockBuildReader {
    fn read_build(&self, _path: &Path) -> Result<BuildSelection> {
        if self.should_fail {
            anyhow::bail!("Mock build read failure");
        }
        Ok(self.selection.clone())
    }
}
