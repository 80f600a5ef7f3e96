use crate::shared::Result;
use std::collections::BTreeMap;
use std::path::Path;

/// Category id -> component id, as chosen by the user
pub type BuildSelection = BTreeMap<String, String>;

/// BuildReader port for reading a saved component selection
pub trait BuildReader {
    /// Reads the selection stored at `path`
    ///
    /// # Errors
    /// Returns an error if the file does not exist, cannot be read,
    /// or does not contain a `[components]` table of strings
    fn read_build(&self, path: &Path) -> Result<BuildSelection>;
}
