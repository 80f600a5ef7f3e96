use crate::shared::Result;
use serde::{Deserialize, Serialize};

/// Maximum length for category ids (security limit)
const MAX_CATEGORY_ID_LENGTH: usize = 64;

/// Category ids the compatibility rules know about.
///
/// Catalogs may declare any number of additional categories (storage, case, ...);
/// those take part in pricing but are never inspected by a rule.
pub mod well_known {
    pub const PROCESSOR: &str = "cpu";
    pub const MOTHERBOARD: &str = "motherboard";
    pub const MEMORY: &str = "ram";
    pub const GRAPHICS_CARD: &str = "gpu";
    pub const POWER_SUPPLY: &str = "psu";
    pub const COOLING: &str = "cooling";
}

/// NewType wrapper for a category id with validation
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CategoryId(String);

impl CategoryId {
    pub fn new(id: String) -> Result<Self> {
        if id.is_empty() {
            anyhow::bail!("Category id cannot be empty");
        }

        if id.len() > MAX_CATEGORY_ID_LENGTH {
            anyhow::bail!(
                "Category id is too long ({} bytes). Maximum allowed: {} bytes",
                id.len(),
                MAX_CATEGORY_ID_LENGTH
            );
        }

        if !id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            anyhow::bail!(
                "Category id '{}' contains invalid characters. Only ASCII alphanumerics, hyphens and underscores are allowed.",
                id
            );
        }

        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for CategoryId {
    type Error = anyhow::Error;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}

impl From<CategoryId> for String {
    fn from(id: CategoryId) -> Self {
        id.0
    }
}

impl std::fmt::Display for CategoryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A slot kind declared by the catalog, e.g. "cpu" / "Processor"
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    id: CategoryId,
    name: String,
}

impl Category {
    pub fn new(id: &str, name: &str) -> Result<Self> {
        Ok(Self {
            id: CategoryId::new(id.to_string())?,
            name: name.to_string(),
        })
    }

    pub fn id(&self) -> &CategoryId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}
